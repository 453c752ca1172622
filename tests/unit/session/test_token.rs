use envelope_client::session::interface::{Anonymous, Authenticator};
use envelope_client::session::token::StaticToken;
use tokio_test::block_on;

#[test]
fn test_anonymous_has_no_token() {
    let auth = Anonymous;
    assert_eq!(block_on(auth.token()), None);
}

#[test]
fn test_anonymous_refresh_reports_failure() {
    let auth = Anonymous;
    assert!(!block_on(auth.ensure_authenticated(true)));
    assert!(!block_on(auth.ensure_authenticated(false)));
}

#[test]
fn test_static_token_returns_held_token() {
    let auth = StaticToken::new("abc");
    assert_eq!(block_on(auth.token()).as_deref(), Some("abc"));
    assert!(block_on(auth.ensure_authenticated(false)));
}

#[test]
fn test_static_token_empty() {
    let auth = StaticToken::empty();
    assert_eq!(block_on(auth.token()), None);
    assert!(!block_on(auth.ensure_authenticated(true)));
}

#[test]
fn test_static_token_set_and_clear() {
    let auth = StaticToken::empty();

    block_on(auth.set_token("fresh"));
    assert_eq!(block_on(auth.token()).as_deref(), Some("fresh"));
    assert!(block_on(auth.ensure_authenticated(true)));

    block_on(auth.clear());
    assert_eq!(block_on(auth.token()), None);
}
