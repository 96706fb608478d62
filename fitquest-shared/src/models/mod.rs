//! Wire models exchanged with the FitQuest API.
//!
//! Everything here is a view projection of server data: the client never owns
//! authoritative records, it only decodes what the API last returned and
//! encodes the payloads of the create forms.

pub mod errors;
pub mod ids;
pub mod level;
pub mod nutrition;
pub mod user;
pub mod workout;

mod lenient;

pub use errors::ErrorResponse;
pub use ids::{IdParseError, UserId, WorkoutId};
pub use level::{Level, LevelTone};
pub use nutrition::{CreateNutritionRequest, NutritionEntry};
pub use user::{CreateUserRequest, LoginRequest, LoginResponse, Role, UserProfile};
pub use workout::{CreateExerciseRequest, CreateWorkoutRequest, Exercise, Workout};
