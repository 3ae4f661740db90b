use super::*;
use tasks::session::AuthUser;

fn config() -> BackendConfig {
    BackendConfig::new("https://abc.example.co", "anon", None).expect("config")
}

fn session() -> Session {
    Session {
        access_token: "jwt".to_owned(),
        refresh_token: "r".to_owned(),
        expires_at: 1_792_310_400,
        user: AuthUser { id: "u1".to_owned(), email: Some("a@b.co".to_owned()) },
    }
}

#[test]
fn default_is_signed_out_and_idle() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.loading);
    assert_eq!(state.user_id(), None);
}

#[test]
fn booting_is_loading() {
    assert!(AuthState::booting().loading);
}

#[test]
fn signed_in_exposes_user() {
    let mut state = AuthState::booting();
    state.error = Some("old".to_owned());
    state.signed_in(session());
    assert!(!state.loading);
    assert_eq!(state.user_id(), Some("u1"));
    assert_eq!(state.email(), Some("a@b.co"));
    assert_eq!(state.error, None);
}

#[test]
fn credentials_need_config_and_session() {
    let mut state = AuthState::default();
    assert!(state.credentials().is_none());
    state.signed_in(session());
    assert!(state.credentials().is_none());
    state.config = Some(config());
    let (cfg, sess) = state.credentials().expect("credentials");
    assert_eq!(cfg.anon_key, "anon");
    assert_eq!(sess.access_token, "jwt");
}

#[test]
fn signed_out_clears_session_and_keeps_config() {
    let mut state = AuthState { config: Some(config()), ..AuthState::default() };
    state.signed_in(session());
    state.signed_out();
    assert!(state.session.is_none());
    assert!(state.config.is_some());
    assert!(!state.loading);
}
