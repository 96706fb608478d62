use serde::{Deserialize, Serialize};

/// Difficulty level reference data from `GET /levels`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Level {
    pub id: i64,
    pub name: String,
}

/// Display tone for a level, keyed by the well-known level ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelTone {
    Beginner,
    Intermediate,
    Advanced,
    Neutral,
}

impl LevelTone {
    #[must_use]
    pub const fn for_level_id(id: i64) -> Self {
        match id {
            1 => Self::Beginner,
            2 => Self::Intermediate,
            3 => Self::Advanced,
            _ => Self::Neutral,
        }
    }

    #[must_use]
    pub const fn for_level(level: Option<&Level>) -> Self {
        match level {
            Some(level) => Self::for_level_id(level.id),
            None => Self::Neutral,
        }
    }
}
