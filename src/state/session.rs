//! Shared session store holding the current access token.
//!
//! ARCHITECTURE
//! ============
//! Views receive the store explicitly (`Rc<dyn SessionStore>`) instead of
//! reaching for a global. The in-memory implementation is backed by a
//! `tokio::sync::watch` channel so any view can subscribe to token changes
//! and always observe the latest value.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use tokio::sync::watch;

use crate::net::types::AccessToken;

/// Process-wide holder of the current access token.
pub trait SessionStore {
    /// Current token, if a session has been established.
    fn read(&self) -> Option<AccessToken>;

    /// Replace the current token. The store becomes its sole owner.
    fn write(&self, token: AccessToken);

    /// Receiver that observes every subsequent token change.
    fn subscribe(&self) -> watch::Receiver<Option<AccessToken>>;
}

/// In-memory session store. Clones share the same underlying session.
#[derive(Debug, Clone)]
pub struct MemorySessionStore {
    tx: Arc<watch::Sender<Option<AccessToken>>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::from_token(None)
    }

    /// Store seeded with an existing session, e.g. a token carried over from
    /// an earlier login.
    #[must_use]
    pub fn with_token(token: AccessToken) -> Self {
        Self::from_token(Some(token))
    }

    fn from_token(token: Option<AccessToken>) -> Self {
        let (tx, _rx) = watch::channel(token);
        Self { tx: Arc::new(tx) }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> Option<AccessToken> {
        self.tx.borrow().clone()
    }

    fn write(&self, token: AccessToken) {
        // send_replace succeeds even with no live receivers.
        self.tx.send_replace(Some(token));
        tracing::debug!(subscribers = self.tx.receiver_count(), "session token updated");
    }

    fn subscribe(&self) -> watch::Receiver<Option<AccessToken>> {
        self.tx.subscribe()
    }
}
