//! Login flow controller: form state plus the one `submit` operation.
//!
//! DESIGN
//! ======
//! State lives in a `RefCell` and is never borrowed across an await, so the
//! loading flag and fields can be read while a submit is suspended on the
//! network. The loading flag is the only re-entrancy guard: a submit that
//! starts while another is in flight is turned away before any request.
//!
//! ERROR HANDLING
//! ==============
//! Nothing propagates. Failures are logged and the page stays put with a
//! cleared form; the returned `SubmitOutcome` is informational only and does
//! not distinguish bad credentials from an unreachable backend.

#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::api::AuthEndpoint;
use crate::state::login::{Credentials, FormField, FormState};
use crate::state::session::SessionStore;
use crate::util::navigate::Navigator;

/// How a `submit` call settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Token stored and navigation to the landing page requested.
    Authenticated,
    /// Success response without a usable token; nothing else happened.
    MissingToken,
    /// Transport error, non-success status or unparseable body.
    Failed,
    /// Another submit was already in flight; no request was made.
    Busy,
    /// A required field was empty; no request was made.
    Incomplete,
}

impl SubmitOutcome {
    /// Whether a request was actually sent for this call.
    #[must_use]
    pub fn was_sent(self) -> bool {
        !matches!(self, Self::Busy | Self::Incomplete)
    }
}

pub struct LoginController {
    endpoint: Rc<dyn AuthEndpoint>,
    session: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    landing_path: String,
    form: RefCell<FormState>,
}

impl LoginController {
    pub fn new(
        endpoint: Rc<dyn AuthEndpoint>,
        session: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        landing_path: impl Into<String>,
    ) -> Self {
        Self {
            endpoint,
            session,
            navigator,
            landing_path: landing_path.into(),
            form: RefCell::new(FormState::default()),
        }
    }

    // -------------------------------------------------------------------------
    // Form state
    // -------------------------------------------------------------------------

    pub fn update(&self, field: FormField, value: impl Into<String>) {
        self.form.borrow_mut().update(field, value);
    }

    pub fn set_email(&self, value: impl Into<String>) {
        self.update(FormField::Email, value);
    }

    pub fn set_password(&self, value: impl Into<String>) {
        self.update(FormField::Password, value);
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        self.form.borrow().credentials.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.form.borrow().loading
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.form.borrow().can_submit()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        self.form.borrow().submit_label()
    }

    #[must_use]
    pub fn form(&self) -> FormState {
        self.form.borrow().clone()
    }

    // -------------------------------------------------------------------------
    // Submit
    // -------------------------------------------------------------------------

    /// Send the current credentials to the authentication endpoint.
    ///
    /// Exactly one request per accepted call. Once accepted, the loading flag
    /// is cleared and both fields are blanked when the call settles, and also
    /// if the returned future is dropped before it does.
    pub async fn submit(&self) -> SubmitOutcome {
        let credentials = {
            let mut form = self.form.borrow_mut();
            if form.loading {
                tracing::debug!("login already in flight; ignoring submit");
                return SubmitOutcome::Busy;
            }
            if !form.credentials.is_complete() {
                tracing::debug!("login form incomplete; ignoring submit");
                return SubmitOutcome::Incomplete;
            }
            form.loading = true;
            form.credentials.clone()
        };

        let _settle = SettleOnDrop(&self.form);
        self.authenticate(&credentials).await
    }

    async fn authenticate(&self, credentials: &Credentials) -> SubmitOutcome {
        let response = match self.endpoint.login(credentials).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "login error");
                return SubmitOutcome::Failed;
            }
        };
        tracing::debug!(?response, "login response received");

        let Some(token) = response.into_token() else {
            tracing::warn!("login succeeded without an access token");
            return SubmitOutcome::MissingToken;
        };

        self.session.write(token);
        tracing::info!(email = %credentials.email, "login succeeded");
        self.navigator.navigate(&self.landing_path);
        SubmitOutcome::Authenticated
    }
}

/// Resets form state when a submit settles, however it settles.
struct SettleOnDrop<'a>(&'a RefCell<FormState>);

impl Drop for SettleOnDrop<'_> {
    fn drop(&mut self) {
        self.0.borrow_mut().settle();
    }
}
