//! In-memory doubles shared by the unit tests.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use crate::api::{ApiRequest, FitQuestClient, RawResponse, Transport, TransportError};
use crate::session::{KeyValueStore, SessionStore};

pub const BASE_URL: &str = "http://api.test";

/// Canned answer for one request.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(u16, Value),
    Text(u16, String),
    Unreachable,
}

/// Transport answering from a script keyed by method and path.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: RefCell<HashMap<(Method, String), VecDeque<Reply>>>,
    sent: RefCell<Vec<ApiRequest>>,
    yield_before_reply: Cell<bool>,
}

impl ScriptedTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Queue `reply` for `method path`; `path` excludes the base URL.
    pub fn on(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.replies
            .borrow_mut()
            .entry((method, path.trim_start_matches('/').to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    /// Suspend once inside every `send`, so callers observe the in-flight state.
    pub fn suspend_each_send(&self) {
        self.yield_before_reply.set(true);
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }

    pub fn sent_paths(&self) -> Vec<String> {
        self.sent
            .borrow()
            .iter()
            .map(|request| request.url.trim_start_matches(BASE_URL).to_string())
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let key = (
            request.method.clone(),
            request
                .url
                .trim_start_matches(BASE_URL)
                .trim_start_matches('/')
                .to_string(),
        );
        self.sent.borrow_mut().push(request);
        if self.yield_before_reply.get() {
            YieldOnce::default().await;
        }
        let reply = self
            .replies
            .borrow_mut()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);
        match reply {
            Some(Reply::Json(status, body)) => Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
            Some(Reply::Text(status, body)) => Ok(RawResponse { status, body }),
            Some(Reply::Unreachable) | None => {
                Err(TransportError("connection refused".to_string()))
            }
        }
    }
}

pub fn client_for(transport: &Rc<ScriptedTransport>) -> FitQuestClient {
    FitQuestClient::new(BASE_URL, transport.clone())
}

/// Future that returns `Pending` exactly once.
#[derive(Debug, Default)]
pub struct YieldOnce {
    yielded: bool,
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Session storage kept in a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.raw(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), crate::session::SessionError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

pub fn memory_session() -> (Rc<MemoryStore>, SessionStore) {
    let store = Rc::new(MemoryStore::default());
    (store.clone(), SessionStore::new(store))
}
