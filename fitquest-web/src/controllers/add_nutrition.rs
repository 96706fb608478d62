//! Logging a meal.

use shared::models::{CreateNutritionRequest, UserId};
use std::cell::{Ref, RefCell};
use std::time::Duration;

use super::Redirect;
use crate::api::{FailureMessages, FitQuestClient};
use crate::forms::validation::{decimal, require};
use crate::forms::{AsyncForm, FieldValue, FormFields, FormMessages, ValidationError, submit};
use crate::routes::{NavTarget, Route};

pub const MESSAGES: FormMessages = FormMessages {
    success: "Nutrition entry created successfully!",
    failure: FailureMessages {
        rejected: "Nutrition entry creation failed.",
        unreachable: "An error occurred while creating the nutrition entry.",
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionFields {
    pub meal_name: FieldValue,
    pub calories: FieldValue,
    /// Value of a `datetime-local` control, e.g. `2025-03-01T08:30`.
    pub logged_at: FieldValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealDraft {
    meal_name: String,
    calories: f64,
    logged_at: String,
}

impl FormFields for NutritionFields {
    type Payload = MealDraft;

    fn validate(&self) -> Result<MealDraft, ValidationError> {
        require(&[
            ("meal name", &self.meal_name),
            ("calories", &self.calories),
            ("logged at", &self.logged_at),
        ])?;
        Ok(MealDraft {
            meal_name: self.meal_name.text(),
            calories: decimal("Calories", &self.calories)?,
            logged_at: self.logged_at.text(),
        })
    }
}

#[derive(Debug)]
pub struct AddNutritionController {
    client: FitQuestClient,
    created_by: UserId,
    redirect_delay: Duration,
    form: RefCell<AsyncForm<NutritionFields>>,
}

impl AddNutritionController {
    pub fn new(client: FitQuestClient, created_by: UserId, redirect_delay: Duration) -> Self {
        Self {
            client,
            created_by,
            redirect_delay,
            form: RefCell::default(),
        }
    }

    pub fn form(&self) -> Ref<'_, AsyncForm<NutritionFields>> {
        self.form.borrow()
    }

    pub fn edit(&self, edit: impl FnOnce(&mut NutritionFields)) {
        self.form.borrow_mut().update(edit);
    }

    /// The acting user's nutrition log; used after success and by "go back".
    pub fn log_target(&self) -> NavTarget {
        NavTarget::with_user(Route::Nutrition, self.created_by)
    }

    pub async fn submit(&self) -> Option<Redirect> {
        let client = &self.client;
        let user_id = self.created_by;
        submit(&self.form, &MESSAGES, |draft: MealDraft| async move {
            let request = CreateNutritionRequest {
                meal_name: draft.meal_name,
                calories: draft.calories,
                logged_at: draft.logged_at,
                user_id,
            };
            client.create_nutrition(&request).await
        })
        .await
        .succeeded()
        .map(|_| Redirect::after(self.redirect_delay, self.log_target()))
    }
}
