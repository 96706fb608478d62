use serde::{Deserialize, Serialize};

use super::{UserId, lenient};

/// One logged meal from `GET /nutrition?created_by=`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub meal_name: String,
    #[serde(deserialize_with = "lenient::number")]
    pub calories: f64,
    /// Timestamp exactly as the API sent it; parsed only for display.
    pub logged_at: String,
    /// Owner, when the API echoes it back.
    #[serde(default, alias = "created_by")]
    pub user_id: Option<UserId>,
}

impl NutritionEntry {
    /// Whether this entry may be shown to `user`.
    ///
    /// Entries without an owner are trusted to be pre-filtered by the API.
    #[must_use]
    pub fn belongs_to(&self, user: UserId) -> bool {
        self.user_id.is_none_or(|owner| owner == user)
    }
}

/// Body of `POST /nutrition`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateNutritionRequest {
    pub meal_name: String,
    pub calories: f64,
    pub logged_at: String,
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_accepts_created_by_alias() {
        let entry: NutritionEntry = serde_json::from_value(json!({
            "meal_name": "Oats",
            "calories": 320,
            "logged_at": "2025-03-01T08:30:00Z",
            "created_by": "42"
        }))
        .unwrap();
        assert_eq!(entry.user_id, Some(UserId(42)));
        assert!(entry.belongs_to(UserId(42)));
        assert!(!entry.belongs_to(UserId(43)));
    }

    #[test]
    fn ownerless_entry_belongs_to_anyone() {
        let entry: NutritionEntry = serde_json::from_value(json!({
            "meal_name": "Apple",
            "calories": "95",
            "logged_at": "2025-03-01T12:00"
        }))
        .unwrap();
        assert!(entry.belongs_to(UserId(1)));
        assert!((entry.calories - 95.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_calories_fail_to_decode() {
        let result = serde_json::from_value::<NutritionEntry>(json!({
            "meal_name": "Mystery",
            "calories": "lots",
            "logged_at": "2025-03-01T12:00"
        }));
        assert!(result.is_err());
    }
}
