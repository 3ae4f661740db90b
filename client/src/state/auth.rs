//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the API layer. `config` arrives from the host at
//! startup; `session` is restored from `localStorage` or set by the login
//! page. Both must be present before any table call can be made.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use tasks::config::BackendConfig;
use tasks::session::Session;

/// Authentication state tracking the backend settings, session, and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub config: Option<BackendConfig>,
    pub session: Option<Session>,
    pub loading: bool,
    /// Startup failure (config fetch), shown on the login page.
    pub error: Option<String>,
}

impl AuthState {
    /// State before the startup config/session restore has finished.
    pub fn booting() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(Session::user_id)
    }

    pub fn email(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.user.email.as_deref())
    }

    /// Config and session together, as needed by every authenticated call.
    pub fn credentials(&self) -> Option<(BackendConfig, Session)> {
        Some((self.config.clone()?, self.session.clone()?))
    }

    pub fn signed_in(&mut self, session: Session) {
        self.session = Some(session);
        self.loading = false;
        self.error = None;
    }

    pub fn signed_out(&mut self) {
        self.session = None;
        self.loading = false;
    }
}
