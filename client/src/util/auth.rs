//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior,
//! and every page restores the stored session the same way at startup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use tasks::session::Session;

use crate::state::auth::AuthState;

/// What to do with a session found in storage at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredSession {
    None,
    Valid(Session),
    /// Expired or close to expiry; exchange the refresh token first.
    Refresh(Session),
}

/// Classify a stored session against the current time.
pub fn classify_stored(session: Option<Session>, now: DateTime<Utc>) -> StoredSession {
    match session {
        None => StoredSession::None,
        Some(s) if s.needs_refresh(now) => StoredSession::Refresh(s),
        Some(s) => StoredSession::Valid(s),
    }
}

/// Whether a guarded page should bounce to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.session.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Persist a fresh session and publish it.
pub fn store_session(auth: RwSignal<AuthState>, session: Session) {
    crate::util::storage::save_json(crate::util::storage::SESSION_KEY, &session);
    auth.update(|a| a.signed_in(session));
}

/// Forget the session locally.
pub fn forget_session(auth: RwSignal<AuthState>) {
    crate::util::storage::remove(crate::util::storage::SESSION_KEY);
    auth.update(AuthState::signed_out);
}

/// Current config and session, refreshing the session first when it is
/// about to expire. A failed refresh signs the user out.
#[cfg(feature = "hydrate")]
pub async fn fresh_credentials(
    auth: RwSignal<AuthState>,
) -> Result<(tasks::config::BackendConfig, Session), String> {
    let Some((config, session)) = auth.with_untracked(AuthState::credentials) else {
        return Err("Not signed in.".to_owned());
    };
    if !session.needs_refresh(crate::util::clock::now_utc()) {
        return Ok((config, session));
    }
    match crate::net::api::refresh_session(&config, &session.refresh_token).await {
        Ok(fresh) => {
            store_session(auth, fresh.clone());
            Ok((config, fresh))
        }
        Err(e) => {
            log::warn!("session refresh failed: {e}");
            forget_session(auth);
            Err(e)
        }
    }
}

/// Startup: fetch the backend config, then restore (and refresh if needed)
/// the stored session. Leaves `loading` false when done.
pub fn bootstrap(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let config = match crate::net::api::fetch_config().await {
            Ok(config) => config,
            Err(e) => {
                log::error!("config fetch failed: {e}");
                auth.update(|a| {
                    a.error = Some(e);
                    a.loading = false;
                });
                return;
            }
        };
        auth.update(|a| a.config = Some(config.clone()));

        let stored = crate::util::storage::load_json::<Session>(crate::util::storage::SESSION_KEY);
        match classify_stored(stored, crate::util::clock::now_utc()) {
            StoredSession::None => auth.update(AuthState::signed_out),
            StoredSession::Valid(session) => auth.update(|a| a.signed_in(session)),
            StoredSession::Refresh(session) => {
                match crate::net::api::refresh_session(&config, &session.refresh_token).await {
                    Ok(fresh) => store_session(auth, fresh),
                    Err(e) => {
                        log::info!("stored session dropped: {e}");
                        forget_session(auth);
                    }
                }
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
