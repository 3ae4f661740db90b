//! Today page: the signed-in landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the user's tasks once auth is ready, then renders them in two
//! sections: "Today" (due today or overdue) and "Upcoming". Rows support
//! tap-to-edit, a completion toggle, and swipe-to-delete; the list supports
//! pull-to-refresh; the add button opens the bottom sheet.
//!
//! The calendar day is re-read every minute so the buckets roll over at
//! local midnight without a reload.

#[cfg(test)]
#[path = "today_test.rs"]
mod today_test;

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use tasks::list::Filter;
use tasks::{Task, TaskId};

use super::today_actions as actions;
use crate::components::filter_bar::FilterBar;
use crate::components::pull_refresh::PullRefresh;
use crate::components::summary_header::SummaryHeader;
use crate::components::task_row::TaskRow;
use crate::components::task_sheet::{SheetSubmit, TaskSheet};
use crate::state::auth::AuthState;
use crate::state::tasks::TasksState;
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;
use crate::util::clock;

/// Placeholder for an empty "Today" section.
fn empty_message(filter: Filter, searching: bool) -> &'static str {
    if searching {
        return "No tasks match your search.";
    }
    match filter {
        Filter::All => "Nothing due today. Tap + to add a task.",
        Filter::Active => "All caught up.",
        Filter::Completed => "Nothing completed yet.",
    }
}

/// Show the clear action only when it would do something and the list is
/// not already filtered down to open tasks.
fn show_clear_completed(has_completed: bool, filter: Filter) -> bool {
    has_completed && filter != Filter::Active
}

#[component]
pub fn TodayPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tasks_state = expect_context::<RwSignal<TasksState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    install_unauth_redirect(auth, use_navigate());

    let today = RwSignal::new(clock::today());
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(60)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let now = clock::today();
                if now != today.get_untracked() {
                    log::info!("day rolled over to {now}");
                    today.set(now);
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // First load once config and session are both present.
    Effect::new(move || {
        let ready = auth.with(|a| a.config.is_some() && a.session.is_some());
        if ready && tasks_state.with_untracked(|s| !s.loaded && !s.loading) {
            actions::load(auth, tasks_state, false);
        }
    });

    let sections = Memo::new(move |_| tasks_state.with(|s| s.view(today.get())));

    let on_toggle = Callback::new(move |id: TaskId| actions::toggle(auth, tasks_state, id));
    let on_delete = Callback::new(move |id: TaskId| actions::delete(auth, tasks_state, ui, id));
    let on_edit = Callback::new(move |id: TaskId| ui.update(|u| u.open_edit(id)));
    let on_refresh = Callback::new(move |()| actions::load(auth, tasks_state, true));
    let on_submit = Callback::new(move |payload: SheetSubmit| actions::submit(auth, tasks_state, ui, payload));
    let on_sign_out = Callback::new(move |()| actions::sign_out(auth, tasks_state, ui));

    let today_tasks = Signal::derive(move || sections.with(|v| v.today.clone()));
    let upcoming_tasks = Signal::derive(move || sections.with(|v| v.upcoming.clone()));
    let empty = move || tasks_state.with(|s| empty_message(s.filter, !s.query.trim().is_empty()));

    view! {
        <div class="today-page">
            <SummaryHeader today=today on_sign_out=on_sign_out/>
            <FilterBar/>

            <Show when=move || ui.with(|u| u.notice.is_some())>
                <p class="today-page__notice" on:click=move |_| ui.update(|u| u.notice = None)>
                    {move || ui.with(|u| u.notice.clone().unwrap_or_default())}
                </p>
            </Show>
            <Show when=move || tasks_state.with(|s| s.error.is_some())>
                <div class="today-page__error" role="alert">
                    <span>{move || tasks_state.with(|s| s.error.clone().unwrap_or_default())}</span>
                    <button on:click=move |_| tasks_state.update(TasksState::dismiss_error)>"Dismiss"</button>
                </div>
            </Show>

            <PullRefresh refreshing=Signal::derive(move || tasks_state.with(|s| s.refreshing)) on_refresh=on_refresh>
                <Show
                    when=move || tasks_state.with(|s| s.loaded)
                    fallback=|| view! { <p class="today-page__loading">"Loading tasks..."</p> }
                >
                    <TaskSection
                        title="Today"
                        tasks=today_tasks
                        today=today
                        on_toggle=on_toggle
                        on_delete=on_delete
                        on_edit=on_edit
                    />
                    <Show when=move || today_tasks.with(Vec::is_empty)>
                        <p class="today-page__empty">{empty}</p>
                    </Show>
                    <Show when=move || upcoming_tasks.with(|t| !t.is_empty())>
                        <TaskSection
                            title="Upcoming"
                            tasks=upcoming_tasks
                            today=today
                                on_toggle=on_toggle
                            on_delete=on_delete
                            on_edit=on_edit
                        />
                    </Show>
                </Show>
            </PullRefresh>

            <Show when=move || tasks_state.with(|s| show_clear_completed(s.has_completed(), s.filter))>
                <button
                    class="today-page__clear"
                    on:click=move |_| actions::clear_completed(auth, tasks_state, ui)
                >
                    "Clear completed"
                </button>
            </Show>

            <button
                class="today-page__add"
                aria-label="Add task"
                on:click=move |_| ui.update(UiState::open_create)
            >
                "+"
            </button>

            <TaskSheet today=today on_submit=on_submit on_delete=on_delete/>
        </div>
    }
}

/// One titled list of rows.
#[component]
fn TaskSection(
    title: &'static str,
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] today: Signal<NaiveDate>,
    on_toggle: Callback<TaskId>,
    on_delete: Callback<TaskId>,
    on_edit: Callback<TaskId>,
) -> impl IntoView {
    view! {
        <section class="task-section">
            <h2 class="task-section__title">
                {title}
                <span class="task-section__count">{move || tasks.with(Vec::len)}</span>
            </h2>
            <ul class="task-section__list">
                <For
                    each=move || tasks.get()
                    key=|task| (task.id, task.updated_at, task.completed)
                    children=move |task| {
                        view! {
                            <TaskRow
                                task=task
                                today=today
                                        on_toggle=on_toggle
                                on_delete=on_delete
                                on_edit=on_edit
                            />
                        }
                    }
                />
            </ul>
        </section>
    }
}
