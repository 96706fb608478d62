//! Screen controllers.
//!
//! A controller owns the state of one screen and drives its API calls. It
//! knows nothing about the renderer: pages hold one per mount, call into it
//! from event handlers and re-render when an operation returns.

pub mod add_exercise;
pub mod add_nutrition;
pub mod add_workout;
pub mod dashboard;
pub mod levels;
pub mod login;
pub mod nutrition;
pub mod sign_up;
pub mod workout_details;

use std::time::Duration;

use crate::routes::NavTarget;

pub use add_exercise::{AddExerciseController, ExerciseFields};
pub use add_nutrition::{AddNutritionController, NutritionFields};
pub use add_workout::{AddWorkoutController, WorkoutFields};
pub use dashboard::{DashboardController, DashboardView};
pub use levels::LevelCatalog;
pub use login::{LoginController, LoginFields};
pub use nutrition::NutritionController;
pub use sign_up::{SignUpController, SignUpFields};
pub use workout_details::{WorkoutDetailsController, WorkoutDetailsView};

/// Navigation scheduled after a successful operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub target: NavTarget,
    pub delay: Duration,
}

impl Redirect {
    pub fn after(delay: Duration, target: NavTarget) -> Self {
        Self { target, delay }
    }
}

/// State of a list fetched once per mount.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Fetch<T> {
    #[default]
    Loading,
    Ready(T),
}

impl<T> Fetch<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading => None,
        }
    }
}
