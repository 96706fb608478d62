use serde::{Deserialize, Serialize};

use super::{Level, UserId, WorkoutId, lenient};

/// A workout as returned by `GET /workouts/:id` and
/// `GET /workouts_with_levels`.
///
/// The list endpoint omits `exercises`; the detail endpoint nests them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    pub id: WorkoutId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub duration_minutes: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub calories_burned: f64,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// An exercise belonging to a workout. Durations are stored in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub duration_seconds: f64,
}

/// Body of `POST /workouts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateWorkoutRequest {
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub calories_burned: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_id: Option<i64>,
    pub created_by: UserId,
}

/// Body of `POST /exercises`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateExerciseRequest {
    pub workout_id: WorkoutId,
    pub name: String,
    pub description: String,
    pub duration_seconds: u32,
}
