//! Unauthenticated redirect guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages render from a `ViewState` computed out of (loading flag, session
//! token). The guard is the single transition function that turns state
//! changes into navigation: entering `Unauthenticated` requests the login
//! route once, and re-rendering in the same state does not repeat it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::Cell;
use std::rc::Rc;

use super::navigate::Navigator;
use crate::net::types::AccessToken;

/// What a guarded page should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// A login request is in flight.
    Loading,
    /// No session token; the page redirects to login.
    Unauthenticated,
    /// A session token is present.
    Authenticated,
}

impl ViewState {
    /// Loading wins over session contents, matching the spinner-first render.
    #[must_use]
    pub fn resolve(loading: bool, token: Option<&AccessToken>) -> Self {
        match (loading, token) {
            (true, _) => Self::Loading,
            (false, None) => Self::Unauthenticated,
            (false, Some(_)) => Self::Authenticated,
        }
    }
}

/// Issues the login redirect on transitions into `Unauthenticated`.
pub struct RedirectGuard {
    navigator: Rc<dyn Navigator>,
    login_path: String,
    last: Cell<Option<ViewState>>,
}

impl RedirectGuard {
    pub fn new(navigator: Rc<dyn Navigator>, login_path: impl Into<String>) -> Self {
        Self { navigator, login_path: login_path.into(), last: Cell::new(None) }
    }

    /// Record the state for this render pass and navigate if it just became
    /// unauthenticated. Returns the state unchanged.
    pub fn apply(&self, state: ViewState) -> ViewState {
        let previous = self.last.replace(Some(state));
        if should_redirect_unauth(previous, state) {
            tracing::debug!(path = %self.login_path, "no session; redirecting to login");
            self.navigator.navigate(&self.login_path);
        }
        state
    }
}

fn should_redirect_unauth(previous: Option<ViewState>, current: ViewState) -> bool {
    current == ViewState::Unauthenticated && previous != Some(ViewState::Unauthenticated)
}
