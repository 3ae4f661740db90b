//! REST calls to the host and the hosted backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>`. Backend error bodies are
//! flattened by `tasks::rest::error_message` so pages can show the message
//! as-is without knowing which service produced it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use tasks::config::BackendConfig;
use tasks::session::{Session, SignUpOutcome};
use tasks::{NewTask, Task, TaskId, TaskPatch};

#[cfg(not(feature = "hydrate"))]
const SERVER_ONLY: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
const CONFIG_ENDPOINT: &str = "/api/config";

#[cfg(any(test, feature = "hydrate"))]
fn config_failed_message(status: u16) -> String {
    format!("config request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_rows(body: &str) -> Result<Vec<Task>, String> {
    serde_json::from_str(body).map_err(|e| format!("unexpected task list: {e}"))
}

/// `return=representation` answers with an array holding the written row.
#[cfg(any(test, feature = "hydrate"))]
fn first_row(body: &str) -> Result<Task, String> {
    parse_rows(body)?.into_iter().next().ok_or_else(|| "no row returned".to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn task_api(config: &BackendConfig) -> Result<tasks::rest::TaskApi, String> {
    tasks::rest::TaskApi::new(config).map_err(|e| e.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_api(config: &BackendConfig) -> Result<tasks::rest::AuthApi, String> {
    tasks::rest::AuthApi::new(config).map_err(|e| e.to_string())
}

/// Execute a backend request and return the raw body of a 2xx response.
#[cfg(feature = "hydrate")]
async fn send(req: tasks::rest::RestRequest) -> Result<String, String> {
    use gloo_net::http::Request;
    use tasks::rest::Method;

    let mut builder = match req.method {
        Method::Get => Request::get(&req.url),
        Method::Post => Request::post(&req.url),
        Method::Patch => Request::patch(&req.url),
        Method::Delete => Request::delete(&req.url),
    };
    for (name, value) in &req.headers {
        builder = builder.header(name, value);
    }
    let sent = match &req.body {
        Some(body) => builder.json(body).map_err(|e| e.to_string())?.send().await,
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| e.to_string())?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        log::warn!("{} {} -> {status}", req.method.as_str(), req.url);
        return Err(tasks::rest::error_message(status, &body));
    }
    Ok(body)
}

/// Fetch the public backend settings from the host at `/api/config`.
///
/// # Errors
///
/// Returns an error string if the host is unreachable or not configured.
pub async fn fetch_config() -> Result<BackendConfig, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(config_failed_message(resp.status()));
        }
        resp.json::<BackendConfig>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_ONLY.to_owned())
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Password sign-in.
///
/// # Errors
///
/// Returns the auth service's message, e.g. "Invalid login credentials".
pub async fn sign_in(config: &BackendConfig, email: &str, password: &str) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        let req = auth_api(config)?.sign_in(email, password).map_err(|e| e.to_string())?;
        let body = send(req).await?;
        Session::from_token_response(&body, crate::util::clock::now_utc()).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, password);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Create an account. Depending on the project settings the response is a
/// session or a pending confirmation.
///
/// # Errors
///
/// Returns the auth service's message, e.g. "User already registered".
pub async fn sign_up(config: &BackendConfig, email: &str, password: &str) -> Result<SignUpOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let req = auth_api(config)?.sign_up(email, password).map_err(|e| e.to_string())?;
        let body = send(req).await?;
        tasks::session::parse_sign_up(&body, crate::util::clock::now_utc()).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, password);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Exchange a refresh token for a new session.
///
/// # Errors
///
/// Returns an error string when the refresh token was revoked or expired.
pub async fn refresh_session(config: &BackendConfig, refresh_token: &str) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        let req = auth_api(config)?.refresh(refresh_token).map_err(|e| e.to_string())?;
        let body = send(req).await?;
        Session::from_token_response(&body, crate::util::clock::now_utc()).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, refresh_token);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Revoke the session server-side.
///
/// # Errors
///
/// Returns an error string if the logout call fails.
pub async fn sign_out(config: &BackendConfig, session: &Session) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let req = auth_api(config)?.sign_out(&session.access_token);
        send(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session);
        Err(SERVER_ONLY.to_owned())
    }
}

// =============================================================================
// TASKS
// =============================================================================

/// All rows owned by the session's user.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is not a task list.
pub async fn list_tasks(config: &BackendConfig, session: &Session) -> Result<Vec<Task>, String> {
    #[cfg(feature = "hydrate")]
    {
        let req = task_api(config)?.list(session.user_id(), &session.access_token);
        let body = send(req).await?;
        parse_rows(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Insert a row and return it as stored.
///
/// # Errors
///
/// Returns an error string if the insert is rejected.
pub async fn create_task(config: &BackendConfig, session: &Session, task: &NewTask) -> Result<Task, String> {
    #[cfg(feature = "hydrate")]
    {
        let req = task_api(config)?.insert(task, &session.access_token).map_err(|e| e.to_string())?;
        let body = send(req).await?;
        first_row(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session, task);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Patch a row and return it as stored.
///
/// # Errors
///
/// Returns an error string if the update is rejected or matched no row.
pub async fn update_task(
    config: &BackendConfig,
    session: &Session,
    id: TaskId,
    patch: &TaskPatch,
) -> Result<Task, String> {
    #[cfg(feature = "hydrate")]
    {
        let req = task_api(config)?
            .update(id, session.user_id(), patch, &session.access_token)
            .map_err(|e| e.to_string())?;
        let body = send(req).await?;
        first_row(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session, id, patch);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Delete one row.
///
/// # Errors
///
/// Returns an error string if the delete is rejected.
pub async fn delete_task(config: &BackendConfig, session: &Session, id: TaskId) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let req = task_api(config)?.delete(id, session.user_id(), &session.access_token);
        send(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session, id);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Delete every completed row of the user.
///
/// # Errors
///
/// Returns an error string if the delete is rejected.
pub async fn clear_completed(config: &BackendConfig, session: &Session) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let req = task_api(config)?.delete_completed(session.user_id(), &session.access_token);
        send(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session);
        Err(SERVER_ONLY.to_owned())
    }
}
