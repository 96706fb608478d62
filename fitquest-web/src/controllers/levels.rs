//! Difficulty levels offered by the sign-up and add-workout forms.

use shared::models::Level;
use std::cell::{Ref, RefCell};

use crate::api::FitQuestClient;

pub const LEVELS_ERROR: &str = "An error occurred while fetching levels.";

/// Options of a level `<select>`, fetched on mount.
#[derive(Debug, Default)]
pub struct LevelCatalog {
    levels: RefCell<Vec<Level>>,
}

impl LevelCatalog {
    pub fn levels(&self) -> Ref<'_, Vec<Level>> {
        self.levels.borrow()
    }

    /// Fetch the options; on failure the list stays empty and the returned
    /// message should be shown on the form.
    pub async fn load(&self, client: &FitQuestClient) -> Option<&'static str> {
        match client.levels().await {
            Ok(levels) => {
                *self.levels.borrow_mut() = levels;
                None
            }
            Err(err) => {
                log::warn!("failed to fetch levels: {err}");
                Some(LEVELS_ERROR)
            }
        }
    }
}
