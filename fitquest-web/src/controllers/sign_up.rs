//! Account creation.

use shared::models::{CreateUserRequest, Level, Role};
use std::cell::{Ref, RefCell};
use std::time::Duration;

use super::{LevelCatalog, Redirect};
use crate::api::{FailureMessages, FitQuestClient};
use crate::forms::validation::{number, require};
use crate::forms::{AsyncForm, FieldValue, FormFields, FormMessages, ValidationError, submit};
use crate::routes::{NavTarget, Route};

pub const MESSAGES: FormMessages = FormMessages {
    success: "User created successfully!",
    failure: FailureMessages {
        rejected: "Failed to create user.",
        unreachable: "An error occurred while creating the user.",
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpFields {
    pub username: FieldValue,
    pub email: FieldValue,
    pub password: FieldValue,
    /// Selected level id.
    pub level: FieldValue,
}

impl FormFields for SignUpFields {
    type Payload = CreateUserRequest;

    fn validate(&self) -> Result<CreateUserRequest, ValidationError> {
        require(&[
            ("username", &self.username),
            ("email", &self.email),
            ("password", &self.password),
            ("level", &self.level),
        ])?;
        Ok(CreateUserRequest {
            username: self.username.text(),
            email: self.email.text(),
            // Passwords are sent exactly as typed.
            password: self.password.as_str().to_string(),
            role_id: Role::Member.id(),
            level_id: number("Level", &self.level)?,
        })
    }
}

#[derive(Debug)]
pub struct SignUpController {
    client: FitQuestClient,
    redirect_delay: Duration,
    catalog: LevelCatalog,
    form: RefCell<AsyncForm<SignUpFields>>,
}

impl SignUpController {
    pub fn new(client: FitQuestClient, redirect_delay: Duration) -> Self {
        Self {
            client,
            redirect_delay,
            catalog: LevelCatalog::default(),
            form: RefCell::default(),
        }
    }

    pub fn form(&self) -> Ref<'_, AsyncForm<SignUpFields>> {
        self.form.borrow()
    }

    pub fn levels(&self) -> Ref<'_, Vec<Level>> {
        self.catalog.levels()
    }

    pub fn edit(&self, edit: impl FnOnce(&mut SignUpFields)) {
        self.form.borrow_mut().update(edit);
    }

    /// Mount-time fetch of the level options.
    pub async fn load_levels(&self) {
        if let Some(message) = self.catalog.load(&self.client).await {
            self.form.borrow_mut().notice_error(message);
        }
    }

    /// Create the account; on success the user is sent to the login screen.
    pub async fn submit(&self) -> Option<Redirect> {
        let client = &self.client;
        submit(&self.form, &MESSAGES, |payload| async move {
            client.create_user(&payload).await
        })
        .await
        .succeeded()
        .map(|_| Redirect::after(self.redirect_delay, NavTarget::to(Route::Login)))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::controllers::levels::LEVELS_ERROR;
    use crate::test_support::{Reply, ScriptedTransport, client_for};
    use reqwest::Method;
    use serde_json::json;
    use std::rc::Rc;

    const DELAY: Duration = Duration::from_millis(1500);

    fn controller(transport: &Rc<ScriptedTransport>) -> SignUpController {
        SignUpController::new(client_for(transport), DELAY)
    }

    fn fill(controller: &SignUpController) {
        controller.edit(|fields| {
            fields.username = FieldValue::from("ada");
            fields.email = FieldValue::from("ada@example.com");
            fields.password = FieldValue::from(" secret ");
            fields.level = FieldValue::from("2");
        });
    }

    #[tokio::test]
    async fn test_missing_level_sends_nothing() {
        let transport = ScriptedTransport::new();
        let controller = controller(&transport);
        fill(&controller);
        controller.edit(|fields| fields.level = FieldValue::Empty);

        assert_eq!(controller.submit().await, None);
        assert_eq!(transport.sent_count(), 0);
        assert_eq!(
            controller.form().error(),
            Some("Please fill in all required fields.")
        );
    }

    #[tokio::test]
    async fn test_success_registers_member_and_redirects_to_login() {
        let transport = ScriptedTransport::new();
        transport.on(Method::POST, "users", Reply::Json(201, json!({ "id": 9 })));
        let controller = controller(&transport);
        fill(&controller);

        let redirect = controller.submit().await;
        assert_eq!(
            redirect,
            Some(Redirect::after(DELAY, NavTarget::to(Route::Login)))
        );
        assert_eq!(controller.form().success(), Some("User created successfully!"));

        let sent = transport.sent();
        assert_eq!(
            sent[0].body,
            Some(json!({
                "username": "ada",
                "email": "ada@example.com",
                "password": " secret ",
                "role_id": 2,
                "level_id": 2
            }))
        );
    }

    #[tokio::test]
    async fn test_rejection_without_message_uses_fallback() {
        let transport = ScriptedTransport::new();
        transport.on(Method::POST, "users", Reply::Text(500, "oops".to_string()));
        let controller = controller(&transport);
        fill(&controller);

        assert_eq!(controller.submit().await, None);
        assert_eq!(controller.form().error(), Some("Failed to create user."));
        assert!(!controller.form().is_loading());
    }

    #[tokio::test]
    async fn test_level_fetch_failure_keeps_form_usable() {
        let transport = ScriptedTransport::new();
        transport.on(Method::GET, "levels", Reply::Unreachable);
        transport.on(Method::POST, "users", Reply::Json(201, json!({})));
        let controller = controller(&transport);

        controller.load_levels().await;
        assert_eq!(controller.form().error(), Some(LEVELS_ERROR));
        assert!(controller.levels().is_empty());

        fill(&controller);
        assert!(controller.submit().await.is_some());
        assert_eq!(controller.form().error(), None);
    }
}
