//! Tests for the API client functionality
//!
//! Validates request construction, response normalisation and the error
//! messages screens derive from failed calls.

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use crate::api::{ApiError, ApiRequest, FailureMessages, FitQuestClient};
    use crate::test_support::{BASE_URL, Reply, ScriptedTransport, client_for};
    use reqwest::Method;
    use serde_json::{Value, json};
    use shared::models::{LoginRequest, UserId};

    const MESSAGES: FailureMessages = FailureMessages {
        rejected: "Failed to log in.",
        unreachable: "An error occurred while logging in.",
    };

    /// Tests that the base URL is normalised once
    #[tokio::test]
    async fn test_base_url_trailing_slash_is_dropped() {
        let transport = ScriptedTransport::new();
        transport.on(Method::GET, "levels", Reply::Json(200, json!([])));
        let client = FitQuestClient::new("http://api.test/", transport.clone());
        client.levels().await.unwrap();
        assert_eq!(transport.sent()[0].url, "http://api.test/levels");
    }

    /// Tests that a JSON content type accompanies every body and only then
    #[tokio::test]
    async fn test_content_type_only_with_body() {
        let transport = ScriptedTransport::new();
        transport
            .on(Method::GET, "levels", Reply::Json(200, json!([])))
            .on(Method::POST, "login", Reply::Json(200, json!({ "token": "t", "user_id": 1 })));
        let client = client_for(&transport);

        client.levels().await.unwrap();
        client
            .login(&LoginRequest {
                email: "a@b.com".to_string(),
                password: "x".to_string(),
            })
            .await
            .unwrap();

        let sent = transport.sent();
        assert_eq!(sent[0].header("content-type"), None);
        assert_eq!(sent[0].body, None);
        assert_eq!(sent[1].header("Content-Type"), Some("application/json"));
        assert_eq!(sent[1].url, format!("{BASE_URL}/login"));
    }

    /// Tests the request builder directly
    #[test]
    fn test_request_with_json_sets_header() {
        let request = ApiRequest::new(Method::POST, "http://x/y".to_string()).with_json(json!({}));
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.body, Some(json!({})));
    }

    /// Tests that an empty 2xx body is treated as null
    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let transport = ScriptedTransport::new();
        transport.on(Method::POST, "exercises", Reply::Text(204, String::new()));
        let value = client_for(&transport)
            .request(Method::POST, "/exercises", Some(json!({ "name": "Squat" })))
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    /// Tests that a plain-text 2xx body is still a success
    #[tokio::test]
    async fn test_non_json_success_body_is_returned_as_text() {
        let transport = ScriptedTransport::new();
        transport.on(Method::POST, "workouts", Reply::Text(201, "Created".to_string()));
        let value = client_for(&transport)
            .request(Method::POST, "workouts", Some(json!({ "name": "Run" })))
            .await
            .unwrap();
        assert_eq!(value, Value::String("Created".to_string()));
    }

    /// Tests that a typed decode of a non-JSON 2xx body fails
    #[tokio::test]
    async fn test_non_json_success_body_is_decode_error_for_typed_calls() {
        let transport = ScriptedTransport::new();
        transport.on(Method::GET, "levels", Reply::Text(200, "<html>".to_string()));
        let err = client_for(&transport).levels().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.user_message(&MESSAGES), "Failed to log in.");
    }

    /// Tests that the server's `error` field wins over `message`
    #[tokio::test]
    async fn test_error_field_is_preferred() {
        let transport = ScriptedTransport::new();
        transport.on(
            Method::POST,
            "login",
            Reply::Json(401, json!({ "error": "Invalid credentials", "message": "nope" })),
        );
        let err = client_for(&transport)
            .request(Method::POST, "login", Some(json!({})))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Request {
                status: 401,
                message: Some("Invalid credentials".to_string()),
            }
        );
        assert_eq!(err.user_message(&MESSAGES), "Invalid credentials");
    }

    /// Tests the `message` field and the generic fallback
    #[tokio::test]
    async fn test_message_field_then_fallback() {
        let transport = ScriptedTransport::new();
        transport
            .on(Method::GET, "levels", Reply::Json(500, json!({ "message": "db down" })))
            .on(Method::GET, "levels", Reply::Text(502, "Bad Gateway".to_string()));
        let client = client_for(&transport);

        let first = client.levels().await.unwrap_err();
        assert_eq!(first.user_message(&MESSAGES), "db down");

        let second = client.levels().await.unwrap_err();
        assert_eq!(second.status(), Some(502));
        assert_eq!(second.user_message(&MESSAGES), "Failed to log in.");
    }

    /// Tests that an unreachable server maps to the transport message
    #[tokio::test]
    async fn test_transport_failure() {
        let transport = ScriptedTransport::new();
        transport.on(Method::GET, "levels", Reply::Unreachable);
        let err = client_for(&transport).levels().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.status(), None);
        assert_eq!(err.user_message(&MESSAGES), "An error occurred while logging in.");
    }

    /// Tests the query-string endpoints
    #[tokio::test]
    async fn test_user_scoped_paths() {
        let transport = ScriptedTransport::new();
        transport
            .on(Method::GET, "users/42", Reply::Json(200, json!({ "username": "ada" })))
            .on(Method::GET, "workouts_with_levels?created_by=42", Reply::Json(200, json!([])))
            .on(Method::GET, "nutrition?created_by=42", Reply::Json(200, json!([])));
        let client = client_for(&transport);

        assert_eq!(client.get_user(UserId(42)).await.unwrap().username, "ada");
        assert!(client.workouts_with_levels(UserId(42)).await.unwrap().is_empty());
        assert!(client.nutrition(UserId(42)).await.unwrap().is_empty());
        assert_eq!(
            transport.sent_paths(),
            vec![
                "/users/42",
                "/workouts_with_levels?created_by=42",
                "/nutrition?created_by=42"
            ]
        );
    }

    /// Tests single workout lookups
    #[tokio::test]
    async fn test_get_workout_null_and_not_found() {
        let transport = ScriptedTransport::new();
        transport
            .on(Method::GET, "workouts/9", Reply::Json(200, Value::Null))
            .on(Method::GET, "workouts/9", Reply::Json(404, json!({ "error": "missing" })));
        let client = client_for(&transport);

        assert_eq!(client.get_workout(9).await.unwrap(), None);
        let err = client.get_workout(9).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
