use serde::{Deserialize, Serialize};

/// Error body returned by the API on a rejected request.
///
/// Most endpoints answer `{"error": "..."}`; a few use `{"message": "..."}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Primary error text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Alternate error text used by some endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Extracts an error body from an arbitrary JSON value.
    ///
    /// Returns `None` when the value is not an object with a usable message.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let body: Self = serde_json::from_value(value.clone()).ok()?;
        body.best_message().is_some().then_some(body)
    }

    /// The most specific non-blank message, preferring `error` over `message`.
    #[must_use]
    pub fn best_message(&self) -> Option<&str> {
        [self.error.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|text| !text.is_empty())
    }
}
