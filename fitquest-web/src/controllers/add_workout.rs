//! Workout creation on behalf of an acting user.

use shared::models::{CreateWorkoutRequest, Level, UserId};
use std::cell::{Ref, RefCell};
use std::time::Duration;

use super::{LevelCatalog, Redirect};
use crate::api::{FailureMessages, FitQuestClient};
use crate::forms::validation::{decimal, number, optional_number, require};
use crate::forms::{AsyncForm, FieldValue, FormFields, FormMessages, ValidationError, submit};
use crate::routes::{NavTarget, Route};

pub const MESSAGES: FormMessages = FormMessages {
    success: "Workout created successfully!",
    failure: FailureMessages {
        rejected: "Workout creation failed.",
        unreachable: "An error occurred while creating the workout.",
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutFields {
    pub name: FieldValue,
    pub description: FieldValue,
    /// Whole minutes.
    pub duration: FieldValue,
    pub calories_burned: FieldValue,
    /// Selected level id; blank when none is chosen.
    pub level: FieldValue,
}

/// Validated form content; the creator is added at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    name: String,
    description: String,
    duration_minutes: u32,
    calories_burned: f64,
    level_id: Option<i64>,
}

impl WorkoutDraft {
    fn into_request(self, created_by: UserId) -> CreateWorkoutRequest {
        CreateWorkoutRequest {
            name: self.name,
            description: self.description,
            duration_minutes: self.duration_minutes,
            calories_burned: self.calories_burned,
            level_id: self.level_id,
            created_by,
        }
    }
}

impl FormFields for WorkoutFields {
    type Payload = WorkoutDraft;

    fn validate(&self) -> Result<WorkoutDraft, ValidationError> {
        require(&[
            ("name", &self.name),
            ("duration", &self.duration),
            ("calories burned", &self.calories_burned),
        ])?;
        Ok(WorkoutDraft {
            name: self.name.text(),
            description: self.description.text(),
            duration_minutes: number("Duration", &self.duration)?,
            calories_burned: decimal("Calories burned", &self.calories_burned)?,
            level_id: optional_number("Level", &self.level)?,
        })
    }
}

#[derive(Debug)]
pub struct AddWorkoutController {
    client: FitQuestClient,
    created_by: UserId,
    redirect_delay: Duration,
    catalog: LevelCatalog,
    form: RefCell<AsyncForm<WorkoutFields>>,
}

impl AddWorkoutController {
    pub fn new(client: FitQuestClient, created_by: UserId, redirect_delay: Duration) -> Self {
        Self {
            client,
            created_by,
            redirect_delay,
            catalog: LevelCatalog::default(),
            form: RefCell::default(),
        }
    }

    pub fn form(&self) -> Ref<'_, AsyncForm<WorkoutFields>> {
        self.form.borrow()
    }

    pub fn levels(&self) -> Ref<'_, Vec<Level>> {
        self.catalog.levels()
    }

    pub fn edit(&self, edit: impl FnOnce(&mut WorkoutFields)) {
        self.form.borrow_mut().update(edit);
    }

    pub async fn load_levels(&self) {
        if let Some(message) = self.catalog.load(&self.client).await {
            self.form.borrow_mut().notice_error(message);
        }
    }

    pub async fn submit(&self) -> Option<Redirect> {
        let client = &self.client;
        let created_by = self.created_by;
        submit(&self.form, &MESSAGES, |draft: WorkoutDraft| async move {
            client.create_workout(&draft.into_request(created_by)).await
        })
        .await
        .succeeded()
        .map(|_| Redirect::after(self.redirect_delay, NavTarget::to(Route::Dashboard)))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::{Reply, ScriptedTransport, client_for};
    use reqwest::Method;
    use serde_json::json;
    use std::rc::Rc;

    const DELAY: Duration = Duration::from_millis(1500);

    fn controller(transport: &Rc<ScriptedTransport>) -> AddWorkoutController {
        AddWorkoutController::new(client_for(transport), UserId(7), DELAY)
    }

    fn fill(controller: &AddWorkoutController) {
        controller.edit(|fields| {
            fields.name = FieldValue::from("Leg day");
            fields.duration = FieldValue::from("45");
            fields.calories_burned = FieldValue::from("350");
        });
    }

    #[tokio::test]
    async fn test_blank_duration_sends_nothing() {
        let transport = ScriptedTransport::new();
        let controller = controller(&transport);
        controller.edit(|fields| {
            fields.name = FieldValue::from("Leg day");
            fields.calories_burned = FieldValue::from("350");
        });

        assert_eq!(controller.submit().await, None);
        assert_eq!(transport.sent_count(), 0);
        assert_eq!(
            controller.form().error(),
            Some("Please fill in all required fields.")
        );
    }

    #[tokio::test]
    async fn test_non_numeric_duration_sends_nothing() {
        let transport = ScriptedTransport::new();
        let controller = controller(&transport);
        fill(&controller);
        controller.edit(|fields| fields.duration = FieldValue::from("forty"));

        assert_eq!(controller.submit().await, None);
        assert_eq!(transport.sent_count(), 0);
        assert_eq!(
            controller.form().error(),
            Some("Duration must be a valid number.")
        );
    }

    #[tokio::test]
    async fn test_success_redirects_to_dashboard_after_delay() {
        let transport = ScriptedTransport::new();
        transport.on(Method::POST, "workouts", Reply::Json(201, json!({ "id": 4 })));
        let controller = controller(&transport);
        fill(&controller);
        controller.edit(|fields| fields.level = FieldValue::from("3"));

        let redirect = controller.submit().await.unwrap();
        assert_eq!(redirect.target, NavTarget::to(Route::Dashboard));
        assert_eq!(redirect.delay, Duration::from_millis(1500));
        assert_eq!(
            controller.form().success(),
            Some("Workout created successfully!")
        );
        assert_eq!(
            transport.sent()[0].body,
            Some(json!({
                "name": "Leg day",
                "description": "",
                "duration_minutes": 45,
                "calories_burned": 350.0,
                "level_id": 3,
                "created_by": 7
            }))
        );
    }

    #[tokio::test]
    async fn test_level_is_omitted_when_not_chosen() {
        let transport = ScriptedTransport::new();
        transport.on(Method::POST, "workouts", Reply::Json(201, json!({})));
        let controller = controller(&transport);
        fill(&controller);

        assert!(controller.submit().await.is_some());
        let body = transport.sent()[0].body.clone().unwrap();
        assert!(body.get("level_id").is_none());
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_ignored() {
        let transport = ScriptedTransport::new();
        transport.suspend_each_send();
        transport.on(Method::POST, "workouts", Reply::Json(201, json!({})));
        let controller = controller(&transport);
        fill(&controller);

        let (first, second) = tokio::join!(controller.submit(), controller.submit());
        assert!(first.is_some());
        assert_eq!(second, None);
        assert_eq!(transport.sent_count(), 1);
    }

    #[tokio::test]
    async fn test_submit_after_success_sends_nothing() {
        let transport = ScriptedTransport::new();
        transport
            .on(Method::POST, "workouts", Reply::Json(201, json!({ "id": 4 })))
            .on(Method::POST, "workouts", Reply::Json(201, json!({ "id": 5 })));
        let controller = controller(&transport);
        fill(&controller);

        assert!(controller.submit().await.is_some());
        assert_eq!(controller.submit().await, None);
        assert_eq!(transport.sent_count(), 1);
        assert_eq!(
            controller.form().success(),
            Some("Workout created successfully!")
        );
    }

    #[tokio::test]
    async fn test_plain_text_created_reply_counts_as_success() {
        let transport = ScriptedTransport::new();
        transport.on(
            Method::POST,
            "workouts",
            Reply::Text(201, "Created".to_string()),
        );
        let controller = controller(&transport);
        fill(&controller);

        let redirect = controller.submit().await.unwrap();
        assert_eq!(redirect.target, NavTarget::to(Route::Dashboard));
        assert_eq!(controller.form().error(), None);
    }
}
