//! Adding an exercise to an existing workout.

use shared::models::{CreateExerciseRequest, WorkoutId};
use std::cell::{Ref, RefCell};
use std::time::Duration;

use super::Redirect;
use crate::api::{FailureMessages, FitQuestClient};
use crate::forms::validation::{number, require};
use crate::forms::{AsyncForm, FieldValue, FormFields, FormMessages, ValidationError, submit};
use crate::routes::{NavTarget, Route};

const FAILED: &str = "Failed to add exercise. Please try again.";

pub const MESSAGES: FormMessages = FormMessages {
    success: "Exercise added successfully!",
    failure: FailureMessages {
        rejected: FAILED,
        unreachable: FAILED,
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseFields {
    pub name: FieldValue,
    /// Whole seconds.
    pub duration: FieldValue,
    pub description: FieldValue,
}

/// Validated exercise without its workout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDraft {
    name: String,
    duration_seconds: u32,
    description: String,
}

impl FormFields for ExerciseFields {
    type Payload = ExerciseDraft;

    fn validate(&self) -> Result<ExerciseDraft, ValidationError> {
        require(&[
            ("name", &self.name),
            ("duration", &self.duration),
            ("description", &self.description),
        ])?;
        Ok(ExerciseDraft {
            name: self.name.text(),
            duration_seconds: number("Duration", &self.duration)?,
            description: self.description.text(),
        })
    }
}

#[derive(Debug)]
pub struct AddExerciseController {
    client: FitQuestClient,
    workout_id: WorkoutId,
    redirect_delay: Duration,
    form: RefCell<AsyncForm<ExerciseFields>>,
}

impl AddExerciseController {
    pub fn new(client: FitQuestClient, workout_id: WorkoutId, redirect_delay: Duration) -> Self {
        Self {
            client,
            workout_id,
            redirect_delay,
            form: RefCell::default(),
        }
    }

    pub fn form(&self) -> Ref<'_, AsyncForm<ExerciseFields>> {
        self.form.borrow()
    }

    pub fn edit(&self, edit: impl FnOnce(&mut ExerciseFields)) {
        self.form.borrow_mut().update(edit);
    }

    pub async fn submit(&self) -> Option<Redirect> {
        let client = &self.client;
        let workout_id = self.workout_id;
        submit(&self.form, &MESSAGES, |draft: ExerciseDraft| async move {
            let request = CreateExerciseRequest {
                workout_id,
                name: draft.name,
                description: draft.description,
                duration_seconds: draft.duration_seconds,
            };
            client.create_exercise(&request).await
        })
        .await
        .succeeded()
        .map(|_| Redirect::after(self.redirect_delay, NavTarget::to(Route::Dashboard)))
    }
}
