//! HTTP client for the FitQuest API.
//!
//! [`FitQuestClient`] builds requests and normalises responses; the actual
//! I/O goes through a [`Transport`] so the browser build can use `reqwest`
//! while tests script responses in memory.

use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::{
    CreateExerciseRequest, CreateNutritionRequest, CreateUserRequest, CreateWorkoutRequest,
    ErrorResponse, Level, LoginRequest, LoginResponse, NutritionEntry, UserId, UserProfile,
    Workout, WorkoutId,
};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

use crate::config::FrontendConfig;

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

thread_local! {
    static SHARED_CLIENT: OnceCell<FitQuestClient> = OnceCell::new();
}

/// A request ready to be put on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Attach a JSON body together with its content type.
    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.headers.push((CONTENT_TYPE, APPLICATION_JSON));
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

/// Status and raw body of a received response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was received at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends [`ApiRequest`]s.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

/// Browser transport backed by `reqwest`'s fetch implementation.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body.to_string());
        }
        let response = builder
            .send()
            .await
            .map_err(|err| TransportError(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError(err.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

/// Failure of an API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered outside the 2xx range.
    #[error("request failed with status {status}")]
    Request {
        status: u16,
        /// Message supplied by the server, if any.
        message: Option<String>,
    },
    /// No response was received.
    #[error("server unreachable: {0}")]
    Transport(String),
    /// A 2xx response whose body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// User-facing texts for a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureMessages {
    /// Shown when the server rejected the request without saying why.
    pub rejected: &'static str,
    /// Shown when the server could not be reached.
    pub unreachable: &'static str,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The message a screen should display for this failure.
    pub fn user_message(&self, messages: &FailureMessages) -> String {
        match self {
            Self::Request {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Request { message: None, .. } | Self::Decode(_) => messages.rejected.to_string(),
            Self::Transport(_) => messages.unreachable.to_string(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err.0)
    }
}

/// Lightweight API client for FitQuest web interactions.
#[derive(Clone)]
pub struct FitQuestClient {
    base_url: String,
    transport: Rc<dyn Transport>,
}

impl fmt::Debug for FitQuestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FitQuestClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl FitQuestClient {
    /// Create a new API client with the provided base URL and transport.
    pub fn new(base_url: &str, transport: Rc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// The per-thread client configured from [`FrontendConfig`].
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let config = FrontendConfig::new();
                Self::new(
                    config.api_base_url(),
                    Rc::new(ReqwestTransport::default()),
                )
            })
            .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issue a request and return the decoded JSON body of a 2xx response.
    ///
    /// An empty 2xx body decodes to [`Value::Null`] and a non-JSON one is
    /// returned as a [`Value::String`].
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let mut request = ApiRequest::new(method, self.api_url(path));
        if let Some(body) = body {
            request = request.with_json(body);
        }
        log::debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await?;
        let parsed = if response.body.trim().is_empty() {
            None
        } else {
            serde_json::from_str::<Value>(&response.body).ok()
        };

        if response.is_success() {
            return Ok(match parsed {
                Some(value) => value,
                None if response.body.trim().is_empty() => Value::Null,
                None => Value::String(response.body),
            });
        }

        let message = parsed
            .as_ref()
            .and_then(ErrorResponse::from_value)
            .and_then(|body| body.best_message().map(str::to_string));
        Err(ApiError::Request {
            status: response.status,
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.request(Method::GET, path, None).await?;
        decode(value)
    }

    async fn post_json<B: Serialize>(&self, path: &str, payload: &B) -> Result<Value, ApiError> {
        let body = serde_json::to_value(payload).map_err(|err| ApiError::Decode(err.to_string()))?;
        self.request(Method::POST, path, Some(body)).await
    }

    /// Register a new account.
    pub async fn create_user(&self, payload: &CreateUserRequest) -> Result<Value, ApiError> {
        self.post_json("users", payload).await
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let value = self.post_json("login", payload).await?;
        decode(value)
    }

    pub async fn get_user(&self, user_id: UserId) -> Result<UserProfile, ApiError> {
        self.get_json(&format!("users/{user_id}")).await
    }

    /// Reference list of difficulty levels.
    pub async fn levels(&self) -> Result<Vec<Level>, ApiError> {
        self.get_json("levels").await
    }

    pub async fn create_workout(&self, payload: &CreateWorkoutRequest) -> Result<Value, ApiError> {
        self.post_json("workouts", payload).await
    }

    /// Fetch one workout with its nested exercises; `None` when the server
    /// answers with an empty body.
    pub async fn get_workout(&self, workout_id: WorkoutId) -> Result<Option<Workout>, ApiError> {
        let value = self
            .request(Method::GET, &format!("workouts/{workout_id}"), None)
            .await?;
        if value.is_null() {
            return Ok(None);
        }
        decode(value).map(Some)
    }

    /// Workouts created by `user_id`, each annotated with its level.
    pub async fn workouts_with_levels(&self, user_id: UserId) -> Result<Vec<Workout>, ApiError> {
        self.get_json(&format!("workouts_with_levels?created_by={user_id}"))
            .await
    }

    pub async fn create_exercise(&self, payload: &CreateExerciseRequest) -> Result<Value, ApiError> {
        self.post_json("exercises", payload).await
    }

    /// Nutrition log of `user_id`.
    pub async fn nutrition(&self, user_id: UserId) -> Result<Vec<NutritionEntry>, ApiError> {
        self.get_json(&format!("nutrition?created_by={user_id}"))
            .await
    }

    pub async fn create_nutrition(
        &self,
        payload: &CreateNutritionRequest,
    ) -> Result<Value, ApiError> {
        self.post_json("nutrition", payload).await
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}
