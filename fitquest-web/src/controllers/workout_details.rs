//! A workout and its exercises.

use shared::models::{Workout, WorkoutId};
use std::cell::{Ref, RefCell};

use crate::api::FitQuestClient;
use crate::routes::NavTarget;

pub const NO_WORKOUT: &str = "No workout found.";
pub const NO_EXERCISES: &str = "No exercises available for this workout.";
pub const LOAD_FAILED: &str = "Error fetching workout details. Please try again later.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum WorkoutDetailsView {
    #[default]
    Loading,
    Loaded(Workout),
    /// The server has no such workout.
    Missing,
    Failed(&'static str),
}

#[derive(Debug)]
pub struct WorkoutDetailsController {
    client: FitQuestClient,
    workout_id: WorkoutId,
    view: RefCell<WorkoutDetailsView>,
}

impl WorkoutDetailsController {
    pub fn new(client: FitQuestClient, workout_id: WorkoutId) -> Self {
        Self {
            client,
            workout_id,
            view: RefCell::default(),
        }
    }

    pub fn view(&self) -> Ref<'_, WorkoutDetailsView> {
        self.view.borrow()
    }

    pub async fn load(&self) {
        let view = match self.client.get_workout(self.workout_id).await {
            Ok(Some(workout)) => WorkoutDetailsView::Loaded(workout),
            Ok(None) => WorkoutDetailsView::Missing,
            Err(err) if err.is_not_found() => WorkoutDetailsView::Missing,
            Err(err) => {
                log::error!("failed to fetch workout {}: {err}", self.workout_id);
                WorkoutDetailsView::Failed(LOAD_FAILED)
            }
        };
        *self.view.borrow_mut() = view;
    }

    /// "Go back" returns to whatever screen linked here.
    pub fn back_target() -> NavTarget {
        NavTarget::Back
    }
}
