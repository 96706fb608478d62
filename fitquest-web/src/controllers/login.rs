//! Email/password authentication.

use shared::models::LoginRequest;
use std::cell::{Ref, RefCell};
use std::time::Duration;

use super::Redirect;
use crate::api::{FailureMessages, FitQuestClient};
use crate::forms::validation::require;
use crate::forms::{AsyncForm, FieldValue, FormFields, FormMessages, ValidationError, submit};
use crate::routes::{NavTarget, Route};
use crate::session::{Session, SessionStore};

pub const MESSAGES: FormMessages = FormMessages {
    success: "Login successful!",
    failure: FailureMessages {
        rejected: "Failed to log in.",
        unreachable: "An error occurred while logging in.",
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFields {
    pub email: FieldValue,
    pub password: FieldValue,
}

impl FormFields for LoginFields {
    type Payload = LoginRequest;

    fn validate(&self) -> Result<LoginRequest, ValidationError> {
        require(&[("email", &self.email), ("password", &self.password)])?;
        Ok(LoginRequest {
            email: self.email.text(),
            password: self.password.as_str().to_string(),
        })
    }
}

/// A completed login: the stored session and where to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub session: Session,
    pub redirect: Redirect,
}

#[derive(Debug)]
pub struct LoginController {
    client: FitQuestClient,
    sessions: SessionStore,
    redirect_delay: Duration,
    form: RefCell<AsyncForm<LoginFields>>,
}

impl LoginController {
    pub fn new(client: FitQuestClient, sessions: SessionStore, redirect_delay: Duration) -> Self {
        Self {
            client,
            sessions,
            redirect_delay,
            form: RefCell::default(),
        }
    }

    pub fn form(&self) -> Ref<'_, AsyncForm<LoginFields>> {
        self.form.borrow()
    }

    pub fn edit(&self, edit: impl FnOnce(&mut LoginFields)) {
        self.form.borrow_mut().update(edit);
    }

    /// Authenticate and persist the session for this tab.
    pub async fn submit(&self) -> Option<LoginSuccess> {
        let client = &self.client;
        let response = submit(&self.form, &MESSAGES, |payload| async move {
            client.login(&payload).await
        })
        .await
        .succeeded()?;

        match self.sessions.set(response.user_id, &response.token) {
            Ok(session) => Some(LoginSuccess {
                session,
                redirect: Redirect::after(self.redirect_delay, NavTarget::to(Route::Dashboard)),
            }),
            Err(err) => {
                log::error!("could not store session: {err}");
                self.form.borrow_mut().fail(MESSAGES.failure.rejected);
                None
            }
        }
    }
}
