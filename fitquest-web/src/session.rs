//! Tab-scoped session handling.
//!
//! The session lives in the browser's `sessionStorage` under the `token` and
//! `userId` keys and disappears with the tab. Screens never read storage
//! directly: they receive a [`Session`] value and protected screens only get
//! built with an [`AuthenticatedUser`].

use gloo_storage::{SessionStorage, Storage};
use shared::models::UserId;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

use crate::routes::{NavTarget, Route};

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("session storage unavailable: {0}")]
    Storage(String),
}

/// Key/value backend of the session.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn delete(&self, key: &str);
}

/// `window.sessionStorage`, holding plain string values.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStorage;

impl KeyValueStore for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        SessionStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        SessionStorage::raw()
            .set_item(key, value)
            .map_err(|err| SessionError::Storage(format!("{err:?}")))
    }

    fn delete(&self, key: &str) {
        SessionStorage::delete(key);
    }
}

/// Identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub token: Option<String>,
}

/// Current session of the tab.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(AuthenticatedUser),
}

impl Session {
    /// The signed-in user, or [`SessionError::NotAuthenticated`].
    pub fn require(&self) -> Result<&AuthenticatedUser, SessionError> {
        match self {
            Self::Authenticated(user) => Ok(user),
            Self::Anonymous => Err(SessionError::NotAuthenticated),
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.require().ok().map(|user| user.user_id)
    }
}

/// Reads and writes the session through a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn KeyValueStore>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Store backed by the browser's `sessionStorage`.
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserSessionStorage))
    }

    /// Persist a fresh login and return the resulting session.
    pub fn set(&self, user_id: UserId, token: &str) -> Result<Session, SessionError> {
        self.backend.set(TOKEN_KEY, token)?;
        self.backend.set(USER_ID_KEY, &user_id.to_string())?;
        log::info!("session started for user {user_id}");
        Ok(self.get())
    }

    /// Current session; an unreadable user id counts as signed out.
    pub fn get(&self) -> Session {
        let Some(raw_id) = self.backend.get(USER_ID_KEY) else {
            return Session::Anonymous;
        };
        match raw_id.parse::<UserId>() {
            Ok(user_id) => Session::Authenticated(AuthenticatedUser {
                user_id,
                token: self.backend.get(TOKEN_KEY).filter(|token| !token.is_empty()),
            }),
            Err(err) => {
                log::warn!("discarding stored session: {err}");
                Session::Anonymous
            }
        }
    }

    pub fn clear(&self) {
        self.backend.delete(USER_ID_KEY);
        self.backend.delete(TOKEN_KEY);
    }
}

/// End the session; the caller must navigate to the returned target.
pub fn logout(store: &SessionStore) -> NavTarget {
    store.clear();
    log::info!("session cleared");
    NavTarget::to(Route::Login)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::memory_session;

    #[test]
    fn empty_store_is_anonymous() {
        let (_, store) = memory_session();
        assert_eq!(store.get(), Session::Anonymous);
        assert_eq!(store.get().require(), Err(SessionError::NotAuthenticated));
    }

    #[test]
    fn set_then_get_round_trips_identity() {
        let (raw, store) = memory_session();
        let session = store.set(UserId(7), "t1").unwrap();
        assert_eq!(
            session,
            Session::Authenticated(AuthenticatedUser {
                user_id: UserId(7),
                token: Some("t1".to_string()),
            })
        );
        assert_eq!(raw.raw(USER_ID_KEY).as_deref(), Some("7"));
        assert_eq!(raw.raw(TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(store.get().user_id(), Some(UserId(7)));
    }

    #[test]
    fn corrupt_user_id_is_anonymous() {
        let (raw, store) = memory_session();
        raw.set(USER_ID_KEY, "undefined").unwrap();
        assert_eq!(store.get(), Session::Anonymous);
    }

    #[test]
    fn user_id_without_token_is_still_signed_in() {
        let (raw, store) = memory_session();
        raw.set(USER_ID_KEY, "3").unwrap();
        let session = store.get();
        assert_eq!(session.user_id(), Some(UserId(3)));
        assert_eq!(session.require().unwrap().token, None);
    }

    #[test]
    fn logout_clears_both_keys_and_targets_login() {
        let (raw, store) = memory_session();
        store.set(UserId(7), "t1").unwrap();
        let target = logout(&store);
        assert_eq!(target, NavTarget::to(Route::Login));
        assert_eq!(raw.raw(USER_ID_KEY), None);
        assert_eq!(raw.raw(TOKEN_KEY), None);
        assert_eq!(store.get(), Session::Anonymous);
    }
}
