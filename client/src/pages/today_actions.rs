//! Remote writes triggered from the Today page.
//!
//! ERROR HANDLING
//! ==============
//! Every action runs one request/await sequence. On success the matching
//! `TasksState` reducer applies the returned row; on failure the message is
//! recorded and the list is left as it was. Nothing retries.

#[cfg(test)]
#[path = "today_actions_test.rs"]
mod today_actions_test;

use leptos::prelude::*;
use tasks::TaskId;

use crate::components::task_sheet::SheetSubmit;
use crate::state::auth::AuthState;
use crate::state::tasks::TasksState;
use crate::state::ui::{SheetMode, UiState};

fn cleared_notice(count: usize) -> String {
    match count {
        0 => "No completed tasks to clear.".to_owned(),
        1 => "Cleared 1 completed task.".to_owned(),
        n => format!("Cleared {n} completed tasks."),
    }
}

/// Load (or reload) the user's tasks.
pub(crate) fn load(auth: RwSignal<AuthState>, tasks_state: RwSignal<TasksState>, refresh: bool) {
    tasks_state.update(|s| s.begin_load(refresh));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match fetch_all(auth).await {
            Ok(items) => {
                log::info!("loaded {} tasks", items.len());
                tasks_state.update(|s| s.loaded(items));
            }
            Err(e) => tasks_state.update(|s| s.failed(e)),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Flip completion on one row.
pub(crate) fn toggle(auth: RwSignal<AuthState>, tasks_state: RwSignal<TasksState>, id: TaskId) {
    let Some(patch) = tasks_state.with_untracked(|s| s.find(id).map(tasks::Task::toggled_patch)) else {
        return;
    };
    if tasks_state.with_untracked(|s| s.is_busy(id)) {
        return;
    }
    tasks_state.update(|s| s.mark_busy(id));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match patch_one(auth, id, patch).await {
            Ok(task) => tasks_state.update(|s| s.saved(task)),
            Err(e) => tasks_state.update(|s| s.rejected(id, e)),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, patch);
    }
}

/// Delete one row, from a swipe or from the edit sheet.
pub(crate) fn delete(auth: RwSignal<AuthState>, tasks_state: RwSignal<TasksState>, ui: RwSignal<UiState>, id: TaskId) {
    if tasks_state.with_untracked(|s| s.is_busy(id)) {
        return;
    }
    tasks_state.update(|s| s.mark_busy(id));
    let from_sheet = ui.with_untracked(|u| u.sheet == SheetMode::Edit(id));
    if from_sheet {
        ui.update(UiState::sheet_started);
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match delete_one(auth, id).await {
            Ok(()) => {
                tasks_state.update(|s| {
                    s.deleted(id);
                });
                ui.update(|u| {
                    u.conceal(id);
                    if u.sheet == SheetMode::Edit(id) {
                        u.close_sheet();
                    }
                });
            }
            Err(e) => {
                if from_sheet {
                    ui.update(|u| u.sheet_failed(e.clone()));
                }
                tasks_state.update(|s| s.rejected(id, e));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Bulk delete every completed row. Ignored while a clear is in flight.
pub(crate) fn clear_completed(auth: RwSignal<AuthState>, tasks_state: RwSignal<TasksState>, ui: RwSignal<UiState>) {
    let mut claimed = None;
    tasks_state.update(|s| claimed = s.begin_clear());
    let Some(ids) = claimed else {
        return;
    };
    if ids.is_empty() {
        ui.update(|u| u.notice = Some(cleared_notice(0)));
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match delete_completed(auth).await {
            Ok(()) => {
                let mut count = 0;
                tasks_state.update(|s| count = s.cleared(&ids));
                ui.update(|u| u.notice = Some(cleared_notice(count)));
            }
            Err(e) => tasks_state.update(|s| s.clear_rejected(&ids, e)),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, ids);
    }
}

/// Write a validated sheet form: insert for create, changed fields for edit.
pub(crate) fn submit(
    auth: RwSignal<AuthState>,
    tasks_state: RwSignal<TasksState>,
    ui: RwSignal<UiState>,
    payload: SheetSubmit,
) {
    ui.update(UiState::sheet_started);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match write_sheet(auth, tasks_state, payload).await {
            Ok(saved) => {
                if let Some(task) = saved {
                    tasks_state.update(|s| s.saved(task));
                }
                ui.update(UiState::close_sheet);
            }
            Err(e) => ui.update(|u| u.sheet_failed(e)),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, tasks_state, payload);
    }
}

/// Revoke the session, then drop all local state.
pub(crate) fn sign_out(auth: RwSignal<AuthState>, tasks_state: RwSignal<TasksState>, ui: RwSignal<UiState>) {
    let credentials = auth.with_untracked(AuthState::credentials);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some((config, session)) = credentials {
            if let Err(e) = crate::net::api::sign_out(&config, &session).await {
                log::warn!("logout call failed: {e}");
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
    }
    tasks_state.update(TasksState::reset);
    ui.update(|u| {
        u.close_sheet();
        u.revealed = None;
        u.notice = None;
    });
    crate::util::auth::forget_session(auth);
}

// =============================================================================
// REQUEST SEQUENCES
// =============================================================================

#[cfg(feature = "hydrate")]
async fn fetch_all(auth: RwSignal<AuthState>) -> Result<Vec<tasks::Task>, String> {
    let (config, session) = crate::util::auth::fresh_credentials(auth).await?;
    crate::net::api::list_tasks(&config, &session).await
}

#[cfg(feature = "hydrate")]
async fn patch_one(auth: RwSignal<AuthState>, id: TaskId, patch: tasks::TaskPatch) -> Result<tasks::Task, String> {
    let (config, session) = crate::util::auth::fresh_credentials(auth).await?;
    crate::net::api::update_task(&config, &session, id, &patch).await
}

#[cfg(feature = "hydrate")]
async fn delete_one(auth: RwSignal<AuthState>, id: TaskId) -> Result<(), String> {
    let (config, session) = crate::util::auth::fresh_credentials(auth).await?;
    crate::net::api::delete_task(&config, &session, id).await
}

#[cfg(feature = "hydrate")]
async fn delete_completed(auth: RwSignal<AuthState>) -> Result<(), String> {
    let (config, session) = crate::util::auth::fresh_credentials(auth).await?;
    crate::net::api::clear_completed(&config, &session).await
}

/// `Ok(None)` when an edit changed nothing and no request was sent.
#[cfg(feature = "hydrate")]
async fn write_sheet(
    auth: RwSignal<AuthState>,
    tasks_state: RwSignal<TasksState>,
    submit: SheetSubmit,
) -> Result<Option<tasks::Task>, String> {
    let (config, session) = crate::util::auth::fresh_credentials(auth).await?;
    match submit {
        SheetSubmit::Create(valid) => {
            let new_task = valid.into_new_task(session.user_id());
            crate::net::api::create_task(&config, &session, &new_task).await.map(Some)
        }
        SheetSubmit::Update(id, valid) => {
            let Some(existing) = tasks_state.with_untracked(|s| s.find(id).cloned()) else {
                return Err("This task no longer exists.".to_owned());
            };
            let patch = valid.diff(&existing);
            if patch.is_empty() {
                return Ok(None);
            }
            crate::net::api::update_task(&config, &session, id, &patch).await.map(Some)
        }
    }
}
