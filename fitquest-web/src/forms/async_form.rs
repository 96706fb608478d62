//! The submit lifecycle shared by every form screen.
//!
//! ```text
//! Idle --submit, fields valid--> Submitting --2xx--> Succeeded
//!                                     \----error---> Failed (editable, resubmittable)
//! ```
//!
//! A submit while `Submitting` or after `Succeeded` is ignored, and a submit
//! with invalid fields never leaves `Idle`, so none of them reach the network.

use std::cell::RefCell;
use std::future::Future;

use super::validation::ValidationError;
use crate::api::{ApiError, FailureMessages};

/// Field set of a form, able to validate itself into a request payload.
pub trait FormFields: Clone + Default + PartialEq {
    type Payload;

    fn validate(&self) -> Result<Self::Payload, ValidationError>;
}

/// Texts a form shows on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormMessages {
    pub success: &'static str,
    pub failure: FailureMessages,
}

/// Form values plus loading, error and success state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AsyncForm<F> {
    fields: F,
    loading: bool,
    error: Option<String>,
    success: Option<String>,
}

/// Why a submit did not reach the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    InFlight,
    /// The form already succeeded and is waiting to navigate away.
    Completed,
    Invalid(ValidationError),
}

impl<F: FormFields> AsyncForm<F> {
    pub fn fields(&self) -> &F {
        &self.fields
    }

    /// Edit the fields; allowed while a request is in flight.
    pub fn update(&mut self, edit: impl FnOnce(&mut F)) {
        edit(&mut self.fields);
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Try to enter `Submitting`, yielding the payload to send.
    pub fn begin(&mut self) -> Result<F::Payload, Rejection> {
        if self.loading {
            return Err(Rejection::InFlight);
        }
        if self.success.is_some() {
            return Err(Rejection::Completed);
        }
        self.error = None;
        match self.fields.validate() {
            Ok(payload) => {
                self.loading = true;
                Ok(payload)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(Rejection::Invalid(err))
            }
        }
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.success = Some(message.into());
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.success = None;
        self.error = Some(message.into());
    }

    /// Show an error that did not come from a submit, e.g. a failed lookup.
    pub fn notice_error(&mut self, message: impl Into<String>) {
        if !self.loading {
            self.error = Some(message.into());
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<R> {
    /// Ignored: a request for this form is already in flight.
    InFlight,
    /// Ignored: the form already succeeded.
    Completed,
    /// Rejected client-side; nothing was sent.
    Invalid(ValidationError),
    Failed(ApiError),
    Succeeded(R),
}

impl<R> SubmitOutcome<R> {
    pub fn succeeded(self) -> Option<R> {
        match self {
            Self::Succeeded(response) => Some(response),
            _ => None,
        }
    }
}

/// Run one submit of `form`, sending the validated payload with `send`.
///
/// The form is only borrowed around the await point, never across it, so
/// field edits and repeated submits stay possible while the request runs.
pub async fn submit<F, R, Fut>(
    form: &RefCell<AsyncForm<F>>,
    messages: &FormMessages,
    send: impl FnOnce(F::Payload) -> Fut,
) -> SubmitOutcome<R>
where
    F: FormFields,
    Fut: Future<Output = Result<R, ApiError>>,
{
    let started = form.borrow_mut().begin();
    let payload = match started {
        Ok(payload) => payload,
        Err(Rejection::InFlight) => return SubmitOutcome::InFlight,
        Err(Rejection::Completed) => return SubmitOutcome::Completed,
        Err(Rejection::Invalid(err)) => return SubmitOutcome::Invalid(err),
    };

    let result = send(payload).await;

    let mut form = form.borrow_mut();
    match result {
        Ok(response) => {
            form.succeed(messages.success);
            SubmitOutcome::Succeeded(response)
        }
        Err(err) => {
            log::error!("submit failed: {err}");
            form.fail(err.user_message(&messages.failure));
            SubmitOutcome::Failed(err)
        }
    }
}
