//! Login page: the controller plus a render pass gated by the session.
//!
//! `render` resolves a `ViewState` from the loading flag and the session
//! token, lets the redirect guard react to it, and returns a plain view
//! model. Styling and animation belong to whatever front end draws it.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::rc::Rc;

use super::login_flow::LoginController;
use crate::net::api::AuthEndpoint;
use crate::state::login::Credentials;
use crate::state::session::SessionStore;
use crate::util::auth::{RedirectGuard, ViewState};
use crate::util::navigate::{APPLY_PATH, Navigator, RoutePaths};

pub const WELCOME_HEADING: &str = "Welcome Back!";

/// Everything the authenticated form needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub credentials: Credentials,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub apply_link: &'static str,
}

/// Result of one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginView {
    Spinner,
    /// No session; the guard has sent (or already sent) the user here.
    Redirect(String),
    Form(FormView),
}

pub struct LoginPage {
    controller: LoginController,
    session: Rc<dyn SessionStore>,
    guard: RedirectGuard,
    routes: RoutePaths,
}

impl LoginPage {
    pub fn new(
        endpoint: Rc<dyn AuthEndpoint>,
        session: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        routes: RoutePaths,
    ) -> Self {
        let controller =
            LoginController::new(endpoint, Rc::clone(&session), Rc::clone(&navigator), routes.landing.clone());
        let guard = RedirectGuard::new(navigator, routes.login.clone());
        Self { controller, session, guard, routes }
    }

    #[must_use]
    pub fn controller(&self) -> &LoginController {
        &self.controller
    }

    #[must_use]
    pub fn routes(&self) -> &RoutePaths {
        &self.routes
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        let token = self.session.read();
        ViewState::resolve(self.controller.is_loading(), token.as_ref())
    }

    /// One render pass. Navigation, if any, happens through the guard.
    pub fn render(&self) -> LoginView {
        match self.guard.apply(self.view_state()) {
            ViewState::Loading => LoginView::Spinner,
            ViewState::Unauthenticated => LoginView::Redirect(self.routes.login.clone()),
            ViewState::Authenticated => {
                let form = self.controller.form();
                LoginView::Form(FormView {
                    heading: WELCOME_HEADING,
                    submit_label: form.submit_label(),
                    submit_enabled: form.can_submit(),
                    credentials: form.credentials,
                    apply_link: APPLY_PATH,
                })
            }
        }
    }
}
