//! Page header: date, progress, theme toggle, and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Counts come from `tasks::list::Summary` over the whole list, not the
//! filtered view, so the header stays stable while searching.

#[cfg(test)]
#[path = "summary_header_test.rs"]
mod summary_header_test;

use chrono::NaiveDate;
use leptos::prelude::*;
use tasks::dates::format_header_date;
use tasks::list::Summary;

use crate::state::auth::AuthState;
use crate::state::tasks::TasksState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

fn greeting(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

fn progress_line(summary: &Summary) -> String {
    if summary.total == 0 {
        return "Nothing planned yet".to_owned();
    }
    let mut line = format!("{} of {} done", summary.completed, summary.total);
    if summary.overdue > 0 {
        line.push_str(&format!(" \u{b7} {} overdue", summary.overdue));
    }
    line
}

#[component]
pub fn SummaryHeader(#[prop(into)] today: Signal<NaiveDate>, on_sign_out: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tasks_state = expect_context::<RwSignal<TasksState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let summary = Memo::new(move |_| tasks_state.with(|s| s.summary(today.get())));
    let hour = {
        use chrono::Timelike as _;
        crate::util::clock::now_local().hour()
    };

    let on_theme = move |_| {
        let next = dark_mode::toggle(ui.with_untracked(|u| u.dark_mode));
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <header class="summary-header">
            <div class="summary-header__top">
                <div>
                    <p class="summary-header__greeting">{greeting(hour)}</p>
                    <h1 class="summary-header__date">{move || format_header_date(today.get())}</h1>
                </div>
                <div class="summary-header__actions">
                    <button
                        class="summary-header__theme"
                        aria-label="Toggle dark mode"
                        on:click=on_theme
                    >
                        {move || if ui.with(|u| u.dark_mode) { "Light" } else { "Dark" }}
                    </button>
                    <button
                        class="summary-header__sign-out"
                        title=move || auth.with(|a| a.email().unwrap_or_default().to_owned())
                        on:click=move |_| on_sign_out.run(())
                    >
                        "Sign out"
                    </button>
                </div>
            </div>
            <p class="summary-header__progress-text">{move || progress_line(&summary.get())}</p>
            <div class="summary-header__progress" role="progressbar" aria-valuemin="0" aria-valuemax="100"
                aria-valuenow=move || summary.get().percent_done().to_string()>
                <div
                    class="summary-header__progress-fill"
                    style:width=move || format!("{}%", summary.get().percent_done())
                ></div>
            </div>
        </header>
    }
}
