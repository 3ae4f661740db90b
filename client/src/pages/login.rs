//! Login page: email + password sign-in and sign-up.
//!
//! SYSTEM CONTEXT
//! ==============
//! Talks to the hosted auth service directly with the anon key from
//! `/api/config`. A successful sign-in stores the session and navigates to
//! the Today page; a sign-up that needs email confirmation stays here with a
//! notice.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

pub(crate) const MIN_PASSWORD_CHARS: usize = 6;

/// Which form the page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub(crate) fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Create account",
        }
    }

    pub(crate) fn busy_label(self) -> &'static str {
        match self {
            Self::SignIn => "Signing in...",
            Self::SignUp => "Creating account...",
        }
    }

    pub(crate) fn switch_prompt(self) -> &'static str {
        match self {
            Self::SignIn => "No account yet? Sign up",
            Self::SignUp => "Already have an account? Sign in",
        }
    }

    pub(crate) fn other(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

/// `user@domain.tld`: one `@`, no whitespace, and a dotted domain with no
/// empty labels.
fn email_shaped(email: &str) -> bool {
    let Some((user, domain)) = email.split_once('@') else {
        return false;
    };
    !user.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Trim the email and check both fields before any network call.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email.");
    }
    if !email_shaped(email) {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 6 characters.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: nothing to do here.
    Effect::new(move || {
        if auth.with(|a| !a.loading && a.session.is_some()) {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let Some(config) = auth.with_untracked(|a| a.config.clone()) else {
            info.set(auth.with_untracked(|a| a.error.clone()).unwrap_or_else(|| "Still connecting...".to_owned()));
            return;
        };
        let current = mode.get();
        busy.set(true);
        info.set(current.busy_label().to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use tasks::session::SignUpOutcome;

            let result = match current {
                AuthMode::SignIn => crate::net::api::sign_in(&config, &email_value, &password_value)
                    .await
                    .map(SignUpOutcome::SignedIn),
                AuthMode::SignUp => crate::net::api::sign_up(&config, &email_value, &password_value).await,
            };
            match result {
                Ok(SignUpOutcome::SignedIn(session)) => {
                    log::info!("signed in as {}", session.user_id());
                    password.set(String::new());
                    info.set(String::new());
                    crate::util::auth::store_session(auth, session);
                }
                Ok(SignUpOutcome::ConfirmEmail) => {
                    mode.set(AuthMode::SignIn);
                    info.set("Check your email to confirm the account, then sign in.".to_owned());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, email_value, password_value, current);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Today"</h1>
                <p class="login-card__subtitle">"Tasks and reminders for the day ahead"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete=move || {
                            if mode.get() == AuthMode::SignUp { "new-password" } else { "current-password" }
                        }
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || mode.get().submit_label()}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || auth.with(|a| a.error.is_some())>
                    <p class="login-message login-message--error">
                        {move || auth.with(|a| a.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <button
                    class="login-switch"
                    type="button"
                    disabled=move || busy.get()
                    on:click=move |_| {
                        mode.update(|m| *m = m.other());
                        info.set(String::new());
                    }
                >
                    {move || mode.get().switch_prompt()}
                </button>
            </div>
        </div>
    }
}
