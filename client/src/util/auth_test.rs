use super::*;
use chrono::TimeZone;
use tasks::session::AuthUser;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).single().expect("ts")
}

fn session(expires_in: i64) -> Session {
    Session {
        access_token: "jwt".to_owned(),
        refresh_token: "r".to_owned(),
        expires_at: now().timestamp() + expires_in,
        user: AuthUser { id: "u1".to_owned(), email: None },
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_session_missing() {
    let state = AuthState { loading: false, ..AuthState::default() };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::booting()));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let mut state = AuthState::booting();
    state.signed_in(session(3600));
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn classify_stored_sorts_sessions() {
    assert_eq!(classify_stored(None, now()), StoredSession::None);
    assert_eq!(classify_stored(Some(session(3600)), now()), StoredSession::Valid(session(3600)));
    assert_eq!(classify_stored(Some(session(30)), now()), StoredSession::Refresh(session(30)));
    assert_eq!(classify_stored(Some(session(-10)), now()), StoredSession::Refresh(session(-10)));
}
