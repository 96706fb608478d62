//! The signed-in user's landing screen.

use futures::future::join;
use shared::models::{UserId, Workout, WorkoutId};
use std::cell::{Ref, RefCell};

use super::Fetch;
use crate::api::FitQuestClient;
use crate::routes::{NavTarget, Route};
use crate::session::AuthenticatedUser;

/// Shown instead of the name when the profile lookup fails.
pub const PLACEHOLDER_NAME: &str = "User";
pub const NO_WORKOUTS: &str = "You haven't created any workouts yet. Start by adding some!";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub username: String,
    pub workouts: Vec<Workout>,
}

#[derive(Debug)]
pub struct DashboardController {
    client: FitQuestClient,
    user: AuthenticatedUser,
    view: RefCell<Fetch<DashboardView>>,
}

impl DashboardController {
    pub fn new(client: FitQuestClient, user: AuthenticatedUser) -> Self {
        Self {
            client,
            user,
            view: RefCell::new(Fetch::Loading),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user.user_id
    }

    pub fn view(&self) -> Ref<'_, Fetch<DashboardView>> {
        self.view.borrow()
    }

    /// Fetch the user's name and workouts concurrently. Either may fail on
    /// its own without hiding the other.
    pub async fn load(&self) {
        let user_id = self.user_id();
        let (profile, workouts) = join(
            self.client.get_user(user_id),
            self.client.workouts_with_levels(user_id),
        )
        .await;

        let username = profile.map_or_else(
            |err| {
                log::warn!("failed to fetch user {user_id}: {err}");
                PLACEHOLDER_NAME.to_string()
            },
            |profile| profile.username,
        );
        let workouts = workouts.unwrap_or_else(|err| {
            log::warn!("failed to fetch workouts for user {user_id}: {err}");
            Vec::new()
        });

        *self.view.borrow_mut() = Fetch::Ready(DashboardView { username, workouts });
    }

    pub fn add_workout_target(&self) -> NavTarget {
        NavTarget::with_user(Route::AddWorkout, self.user_id())
    }

    pub fn nutrition_target(&self) -> NavTarget {
        NavTarget::with_user(Route::Nutrition, self.user_id())
    }

    pub fn details_target(workout_id: WorkoutId) -> NavTarget {
        NavTarget::to(Route::WorkoutDetails { workout_id })
    }

    pub fn add_exercise_target(workout_id: WorkoutId) -> NavTarget {
        NavTarget::to(Route::AddExercise { workout_id })
    }
}
