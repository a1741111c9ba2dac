use std::cell::RefCell;

use super::*;

fn recording_guard() -> (RedirectGuard, Rc<RefCell<Vec<String>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let nav: Rc<dyn Navigator> = Rc::new(move |path: &str| sink.borrow_mut().push(path.to_owned()));
    (RedirectGuard::new(nav, "/mentor/login"), calls)
}

// =============================================================================
// ViewState::resolve
// =============================================================================

#[test]
fn resolve_loading_wins_over_token() {
    let token = AccessToken::new("xyz").unwrap();
    assert_eq!(ViewState::resolve(true, Some(&token)), ViewState::Loading);
    assert_eq!(ViewState::resolve(true, None), ViewState::Loading);
}

#[test]
fn resolve_without_token_is_unauthenticated() {
    assert_eq!(ViewState::resolve(false, None), ViewState::Unauthenticated);
}

#[test]
fn resolve_with_token_is_authenticated() {
    let token = AccessToken::new("xyz").unwrap();
    assert_eq!(ViewState::resolve(false, Some(&token)), ViewState::Authenticated);
}

// =============================================================================
// should_redirect_unauth
// =============================================================================

#[test]
fn should_redirect_on_first_unauthenticated_render() {
    assert!(should_redirect_unauth(None, ViewState::Unauthenticated));
}

#[test]
fn should_redirect_when_session_lost() {
    assert!(should_redirect_unauth(Some(ViewState::Authenticated), ViewState::Unauthenticated));
    assert!(should_redirect_unauth(Some(ViewState::Loading), ViewState::Unauthenticated));
}

#[test]
fn should_not_redirect_twice_in_a_row() {
    assert!(!should_redirect_unauth(Some(ViewState::Unauthenticated), ViewState::Unauthenticated));
}

#[test]
fn should_not_redirect_while_loading_or_authenticated() {
    assert!(!should_redirect_unauth(None, ViewState::Loading));
    assert!(!should_redirect_unauth(None, ViewState::Authenticated));
}

// =============================================================================
// RedirectGuard
// =============================================================================

#[test]
fn guard_navigates_to_login_once_per_transition() {
    let (guard, calls) = recording_guard();

    assert_eq!(guard.apply(ViewState::Unauthenticated), ViewState::Unauthenticated);
    guard.apply(ViewState::Unauthenticated);
    guard.apply(ViewState::Unauthenticated);

    assert_eq!(*calls.borrow(), vec!["/mentor/login".to_owned()]);
}

#[test]
fn guard_redirects_again_after_leaving_unauthenticated() {
    let (guard, calls) = recording_guard();

    guard.apply(ViewState::Unauthenticated);
    guard.apply(ViewState::Authenticated);
    guard.apply(ViewState::Unauthenticated);

    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn guard_never_navigates_when_authenticated() {
    let (guard, calls) = recording_guard();

    guard.apply(ViewState::Authenticated);
    guard.apply(ViewState::Loading);
    guard.apply(ViewState::Authenticated);

    assert!(calls.borrow().is_empty());
}
