//! Navigation seam shared by every page.
//!
//! Navigation is fire-and-forget: a page asks to change the active view and
//! moves on. Any `Fn(&str)` closure is a navigator, which is how a router's
//! navigate handle plugs in.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use std::cell::RefCell;

pub const DEFAULT_LANDING_PATH: &str = "/mentor";
pub const DEFAULT_LOGIN_PATH: &str = "/mentor/login";
pub const APPLY_PATH: &str = "/mentorship";

/// Request a change of the active view.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path);
    }
}

/// Paths the login flow navigates between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePaths {
    /// Authenticated landing page.
    pub landing: String,
    /// Login page.
    pub login: String,
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self { landing: DEFAULT_LANDING_PATH.to_owned(), login: DEFAULT_LOGIN_PATH.to_owned() }
    }
}

/// Navigator that records every request in order.
///
/// Used by the headless driver, where there is no real router, to report
/// where the flow ended up.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: RefCell<Vec<String>>,
}

impl HistoryNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path requested so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    /// Most recently requested path.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!(path, "navigate");
        self.history.borrow_mut().push(path.to_owned());
    }
}
