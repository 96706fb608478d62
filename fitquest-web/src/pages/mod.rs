mod add_exercise;
mod add_nutrition;
mod add_workout;
mod dashboard;
mod error;
mod login;
mod nutrition;
mod sign_up;
mod workout_details;

pub use add_exercise::AddExercisePage;
pub use add_nutrition::AddNutritionPage;
pub use add_workout::AddWorkoutPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use login::LoginPage;
pub use nutrition::NutritionPage;
pub use sign_up::SignUpPage;
pub use workout_details::WorkoutDetailsPage;
