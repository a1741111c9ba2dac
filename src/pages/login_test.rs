use std::cell::RefCell;

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::*;
use crate::net::types::{AccessToken, LoginError, LoginResponse};
use crate::pages::login_flow::SubmitOutcome;
use crate::state::session::MemorySessionStore;
use crate::util::navigate::HistoryNavigator;

struct TokenEndpoint {
    token: Option<&'static str>,
}

#[async_trait(?Send)]
impl AuthEndpoint for TokenEndpoint {
    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, LoginError> {
        match self.token {
            Some(raw) => Ok(LoginResponse { access_token: Some(raw.to_owned()) }),
            None => Err(LoginError::Status { status: 401, body: String::new() }),
        }
    }
}

fn build_page(
    token: Option<&'static str>,
    session: MemorySessionStore,
) -> (LoginPage, Rc<MemorySessionStore>, Rc<HistoryNavigator>) {
    let endpoint = Rc::new(TokenEndpoint { token });
    let session = Rc::new(session);
    let nav = Rc::new(HistoryNavigator::new());
    let page = LoginPage::new(endpoint, session.clone(), nav.clone(), RoutePaths::default());
    (page, session, nav)
}

fn xyz() -> AccessToken {
    AccessToken::new("xyz").unwrap()
}

// =============================================================================
// Render guard
// =============================================================================

#[test]
fn render_without_token_redirects_to_login() {
    let (page, _session, nav) = build_page(None, MemorySessionStore::new());

    assert_eq!(page.render(), LoginView::Redirect("/mentor/login".to_owned()));
    assert_eq!(nav.history(), vec!["/mentor/login".to_owned()]);
}

#[test]
fn repeated_unauthenticated_renders_navigate_once() {
    let (page, _session, nav) = build_page(None, MemorySessionStore::new());

    page.render();
    page.render();
    page.render();

    assert_eq!(nav.history().len(), 1);
}

#[test]
fn render_with_token_shows_form_without_navigation() {
    let (page, _session, nav) = build_page(None, MemorySessionStore::with_token(xyz()));

    let LoginView::Form(form) = page.render() else {
        panic!("expected the form view");
    };
    assert_eq!(form.heading, "Welcome Back!");
    assert_eq!(form.submit_label, "Log In");
    assert!(form.submit_enabled);
    assert_eq!(form.apply_link, "/mentorship");
    assert!(nav.history().is_empty());
}

#[test]
fn render_form_reflects_typed_fields() {
    let (page, _session, _nav) = build_page(None, MemorySessionStore::with_token(xyz()));
    page.controller().set_email("a@b.com");

    let LoginView::Form(form) = page.render() else {
        panic!("expected the form view");
    };
    assert_eq!(form.credentials.email, "a@b.com");
    assert_eq!(form.credentials.password, "");
}

#[test]
fn session_change_is_picked_up_on_next_render() {
    let (page, session, nav) = build_page(None, MemorySessionStore::new());

    assert!(matches!(page.render(), LoginView::Redirect(_)));
    session.write(xyz());
    assert!(matches!(page.render(), LoginView::Form(_)));

    assert_eq!(nav.history().len(), 1);
}

#[test]
fn page_exposes_its_routes() {
    let (page, _session, _nav) = build_page(None, MemorySessionStore::new());
    assert_eq!(page.routes(), &RoutePaths::default());
}

#[test]
fn view_state_reads_session() {
    let (page, _session, _nav) = build_page(None, MemorySessionStore::with_token(xyz()));
    assert_eq!(page.view_state(), ViewState::Authenticated);
}

// =============================================================================
// Submit through the page
// =============================================================================

struct HeldEndpoint {
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

#[async_trait(?Send)]
impl AuthEndpoint for HeldEndpoint {
    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, LoginError> {
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(LoginResponse { access_token: Some("abc123".to_owned()) })
    }
}

#[tokio::test]
async fn render_while_loading_shows_spinner() {
    let (release, gate) = oneshot::channel();
    let endpoint = Rc::new(HeldEndpoint { gate: RefCell::new(Some(gate)) });
    let nav = Rc::new(HistoryNavigator::new());
    let page = LoginPage::new(endpoint, Rc::new(MemorySessionStore::new()), nav.clone(), RoutePaths::default());
    page.controller().set_email("a@b.com");
    page.controller().set_password("pw");

    let mut pending = std::pin::pin!(page.controller().submit());
    assert!(futures::poll!(pending.as_mut()).is_pending());

    assert_eq!(page.render(), LoginView::Spinner);
    assert!(nav.history().is_empty());

    release.send(()).unwrap();
    assert_eq!(pending.await, SubmitOutcome::Authenticated);
    assert_eq!(nav.history(), vec!["/mentor".to_owned()]);
    assert!(matches!(page.render(), LoginView::Form(_)));
}

#[tokio::test]
async fn successful_submit_then_render_shows_authenticated_form() {
    let (page, session, nav) = build_page(Some("abc123"), MemorySessionStore::new());
    assert!(matches!(page.render(), LoginView::Redirect(_)));

    page.controller().set_email("a@b.com");
    page.controller().set_password("pw");
    assert_eq!(page.controller().submit().await, SubmitOutcome::Authenticated);

    assert_eq!(session.read(), AccessToken::new("abc123"));
    assert!(matches!(page.render(), LoginView::Form(_)));
    assert_eq!(nav.history(), vec!["/mentor/login".to_owned(), "/mentor".to_owned()]);
}

#[tokio::test]
async fn failed_submit_keeps_user_on_login() {
    let (page, session, nav) = build_page(None, MemorySessionStore::new());
    page.render();

    page.controller().set_email("a@b.com");
    page.controller().set_password("wrong");
    assert_eq!(page.controller().submit().await, SubmitOutcome::Failed);

    assert!(session.read().is_none());
    assert_eq!(page.render(), LoginView::Redirect("/mentor/login".to_owned()));
    assert_eq!(nav.history(), vec!["/mentor/login".to_owned()]);
}
