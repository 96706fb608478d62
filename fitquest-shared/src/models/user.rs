use serde::{Deserialize, Serialize};

use super::UserId;

/// Role given to accounts created from the client.
///
/// The client only ever registers members; the role is not exposed in the
/// sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Member,
}

impl Role {
    /// Numeric role id expected by `POST /users`.
    #[must_use]
    pub const fn id(self) -> i64 {
        match self {
            Self::Member => 2,
        }
    }
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role_id: i64,
    pub level_id: i64,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `POST /login` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Opaque bearer token.
    pub token: String,
    /// Identifier of the authenticated account.
    pub user_id: UserId,
}

/// Projection of `GET /users/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn member_role_id_is_two() {
        assert_eq!(Role::default(), Role::Member);
        assert_eq!(Role::Member.id(), 2);
    }

    #[test]
    fn login_response_decodes_numeric_user_id() {
        let response: LoginResponse =
            serde_json::from_value(json!({ "token": "t1", "user_id": 7 })).unwrap();
        assert_eq!(response.token, "t1");
        assert_eq!(response.user_id, UserId(7));
    }

    #[test]
    fn create_user_request_wire_shape() {
        let request = CreateUserRequest {
            username: "sam".to_string(),
            email: "sam@example.com".to_string(),
            password: "secret".to_string(),
            role_id: Role::Member.id(),
            level_id: 3,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "username": "sam",
                "email": "sam@example.com",
                "password": "secret",
                "role_id": 2,
                "level_id": 3
            })
        );
    }

    #[test]
    fn user_profile_ignores_extra_fields() {
        let profile: UserProfile = serde_json::from_value(json!({
            "id": 7,
            "username": "sam",
            "password_hash": "xxx"
        }))
        .unwrap();
        assert_eq!(profile.username, "sam");
        assert_eq!(profile.id, Some(UserId(7)));
        assert_eq!(profile.email, None);
    }
}
