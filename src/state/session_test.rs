use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::error::ApiError;
use crate::test_support::{FakeTransport, RecordingNavigator, client_at};

fn guard_at(pathname: &str) -> (SessionGuard<FakeTransport, RecordingNavigator>, FakeTransport, RecordingNavigator) {
    let (client, transport, navigator) = client_at(pathname);
    (SessionGuard::new(client), transport, navigator)
}

fn me() -> serde_json::Value {
    json!({ "user_id": "U1", "display_name": "小明", "picture_url": "https://profile.line-scdn.net/p" })
}

// =============================================================
// check_auth / user
// =============================================================

#[test]
fn starts_unauthenticated() {
    let (guard, transport, _) = guard_at("/static/dashboard.html");
    assert_eq!(guard.state(), AuthState::Unauthenticated);
    assert!(guard.user().is_none());
    assert!(transport.sent().is_empty());
}

#[test]
fn check_auth_success_stores_user() {
    let (guard, transport, _) = guard_at("/static/dashboard.html");
    transport.reply_json(200, &me());

    assert!(block_on(guard.check_auth()));

    let user = guard.user().unwrap();
    assert_eq!(user.user_id, "U1");
    assert_eq!(user.display_name, "小明");
}

#[test]
fn check_auth_failure_clears_previous_user() {
    let (guard, transport, _) = guard_at("/static/dashboard.html");
    transport.reply_json(200, &me()).reply(Err(ApiError::Network("offline".to_owned())));

    assert!(block_on(guard.check_auth()));
    assert!(!block_on(guard.check_auth()));

    assert_eq!(guard.state(), AuthState::Unauthenticated);
}

#[test]
fn check_auth_unauthorized_returns_false_without_error() {
    let (guard, transport, navigator) = guard_at("/static/index.html");
    transport.reply_json(401, &json!({ "detail": "未登入" }));

    assert!(!block_on(guard.check_auth()));
    assert!(guard.user().is_none());
    assert!(navigator.visits().is_empty());
}

#[test]
fn check_auth_replaces_user_wholesale() {
    let (guard, transport, _) = guard_at("/");
    transport
        .reply_json(200, &me())
        .reply_json(200, &json!({ "user_id": "U2", "display_name": "小華", "picture_url": null }));

    block_on(guard.check_auth());
    block_on(guard.check_auth());

    let user = guard.user().unwrap();
    assert_eq!(user.user_id, "U2");
    assert!(user.picture_url.is_none());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_navigates_to_login_and_clears_user() {
    let (guard, transport, navigator) = guard_at("/static/dashboard.html");
    transport.reply_json(200, &me()).reply_json(200, &json!({ "status": "ok" }));

    block_on(guard.check_auth());
    block_on(guard.logout());

    assert!(guard.user().is_none());
    assert_eq!(navigator.visits(), vec!["/static/index.html".to_owned()]);
    assert_eq!(transport.last_sent().0, "/auth/logout");
}

#[test]
fn logout_navigates_even_when_server_call_fails() {
    let (guard, transport, navigator) = guard_at("/static/dashboard.html");
    transport.reply_json(500, &json!({ "detail": "db down" }));

    block_on(guard.logout());

    assert_eq!(navigator.visits(), vec!["/static/index.html".to_owned()]);
}

// =============================================================
// require_auth
// =============================================================

#[test]
fn require_auth_passes_signed_in_users_through() {
    let (guard, transport, navigator) = guard_at("/static/dashboard.html");
    transport.reply_json(200, &me());

    assert!(block_on(guard.require_auth()));
    assert!(navigator.visits().is_empty());
}

#[test]
fn require_auth_redirects_on_network_failure() {
    let (guard, transport, navigator) = guard_at("/static/dashboard.html");
    transport.reply(Err(ApiError::Network("offline".to_owned())));

    assert!(!block_on(guard.require_auth()));
    assert_eq!(navigator.visits(), vec!["/static/index.html".to_owned()]);
}

#[test]
fn require_auth_on_401_navigates_from_client_and_guard() {
    let (guard, transport, navigator) = guard_at("/static/dashboard.html");
    transport.reply_json(401, &json!({ "detail": "Session 已過期" }));

    assert!(!block_on(guard.require_auth()));
    assert_eq!(navigator.visits(), vec!["/static/index.html".to_owned(), "/static/index.html".to_owned()]);
}

#[test]
fn require_auth_on_401_at_login_page_navigates_only_from_guard() {
    let (guard, transport, navigator) = guard_at("/static/index.html");
    transport.reply_json(401, &json!({ "detail": "未登入" }));

    assert!(!block_on(guard.require_auth()));
    assert_eq!(navigator.visits(), vec!["/static/index.html".to_owned()]);
}

// =============================================================
// display helpers
// =============================================================

#[test]
fn avatar_source_skips_empty_urls() {
    let mut user = CurrentUser { user_id: "U1".to_owned(), display_name: "A".to_owned(), picture_url: None };
    assert_eq!(avatar_source(&user), None);
    user.picture_url = Some(String::new());
    assert_eq!(avatar_source(&user), None);
    user.picture_url = Some("https://img".to_owned());
    assert_eq!(avatar_source(&user), Some("https://img"));
}

#[test]
fn init_user_display_uses_the_stored_user() {
    let (guard, transport, _) = guard_at("/");

    guard.init_user_display();
    assert!(guard.user().is_none());
    assert!(transport.sent().is_empty());

    transport.reply_json(200, &me());
    block_on(guard.check_auth());
    guard.init_user_display();

    let user = guard.user().unwrap();
    assert_eq!(user.display_name, "小明");
    assert_eq!(avatar_source(&user), Some("https://profile.line-scdn.net/p"));
    assert_eq!(transport.sent().len(), 1);
}
