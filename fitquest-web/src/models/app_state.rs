use yewdux::Store;

use crate::session::{Session, SessionStore};

/// Application-wide state shared through `yewdux`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppState {
    pub session: Session,
}

impl Store for AppState {
    /// Start from whatever session the tab already holds.
    fn new(_cx: &yewdux::Context) -> Self {
        Self {
            session: SessionStore::browser().get(),
        }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}
