//! One task in a list section, with swipe-to-delete.
//!
//! DESIGN
//! ======
//! The row body slides left over a delete action. Releasing past the delete
//! threshold deletes immediately; a shorter swipe holds the row open. Only
//! one row stays open at a time (`UiState::revealed`). A click that ends a
//! swipe is swallowed so it does not also open the editor.

#[cfg(test)]
#[path = "task_row_test.rs"]
mod task_row_test;

use chrono::NaiveDate;
use leptos::prelude::*;
use tasks::dates::{format_due_label, format_reminder};
use tasks::gesture::{SwipeGesture, SwipeOutcome};
use tasks::{Priority, Task, TaskId};

use crate::state::tasks::TasksState;
use crate::state::ui::UiState;
use crate::util::clock::BrowserZone;
use crate::util::pointer;

fn row_transform(offset: f64) -> String {
    format!("translateX({offset}px)")
}

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "task-row__priority task-row__priority--low",
        Priority::Medium => "task-row__priority task-row__priority--medium",
        Priority::High => "task-row__priority task-row__priority--high",
    }
}

/// First line of the notes, for the one-line preview.
fn notes_preview(notes: &str) -> Option<&str> {
    notes.lines().map(str::trim).find(|l| !l.is_empty())
}

#[component]
pub fn TaskRow(
    task: Task,
    #[prop(into)] today: Signal<NaiveDate>,
    on_toggle: Callback<TaskId>,
    on_delete: Callback<TaskId>,
    on_edit: Callback<TaskId>,
) -> impl IntoView {
    let tasks_state = expect_context::<RwSignal<TasksState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let id = task.id;
    let swipe = RwSignal::new(SwipeGesture::new());
    let swallow_click = RwSignal::new(false);

    // Another row was opened, or the sheet took over.
    Effect::new(move || {
        let open_here = ui.with(|u| u.is_revealed(id));
        if !open_here && swipe.with_untracked(SwipeGesture::is_revealed) {
            swipe.update(SwipeGesture::close);
        }
    });

    let busy = move || tasks_state.with(|s| s.is_busy(id));

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if busy() {
            return;
        }
        let (x, y) = pointer::point(&ev);
        pointer::capture(&ev);
        swipe.update(|s| s.start(x, y));
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let (x, y) = pointer::point(&ev);
        swipe.update(|s| {
            s.update(x, y);
        });
    };
    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        let mut was_swiping = false;
        let mut was_open = false;
        let mut outcome = SwipeOutcome::Reset;
        swipe.update(|s| {
            was_swiping = s.is_dragging();
            was_open = s.is_revealed();
            outcome = s.end();
        });
        swallow_click.set(was_swiping || was_open);
        match outcome {
            SwipeOutcome::Delete => on_delete.run(id),
            SwipeOutcome::Reveal => ui.update(|u| u.reveal(id)),
            SwipeOutcome::Reset => ui.update(|u| u.conceal(id)),
        }
    };
    let on_pointer_cancel = move |_ev: leptos::ev::PointerEvent| swipe.update(SwipeGesture::cancel);

    let on_body_click = move |_| {
        if swallow_click.get_untracked() {
            swallow_click.set(false);
            return;
        }
        on_edit.run(id);
    };

    let completed = task.completed;
    let due_date = task.due_date;
    let overdue = move || due_date < today.get() && !completed;
    let due_label = move || format_due_label(due_date, today.get());
    let reminder = task.reminder_at.map(|ts| format_reminder(ts, &BrowserZone));
    let notes = notes_preview(&task.notes).map(str::to_owned);
    let priority = task.priority;
    let title = task.title.clone();
    let toggle_label = if completed { "Mark as not done" } else { "Mark as done" };

    view! {
        <li class="task-row" class:task-row--done=completed class:task-row--busy=busy>
            <button
                class="task-row__delete"
                aria-label="Delete task"
                disabled=busy
                on:click=move |_| on_delete.run(id)
            >
                "Delete"
            </button>
            <div
                class="task-row__body"
                class:task-row__body--dragging=move || swipe.with(SwipeGesture::is_dragging)
                style:transform=move || row_transform(swipe.with(SwipeGesture::offset))
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
                on:click=on_body_click
            >
                <button
                    class="task-row__check"
                    class:task-row__check--on=completed
                    aria-label=toggle_label
                    disabled=busy
                    on:pointerdown=|ev: leptos::ev::PointerEvent| ev.stop_propagation()
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        on_toggle.run(id);
                    }
                ></button>
                <div class="task-row__text">
                    <span class="task-row__title">{title}</span>
                    {notes.map(|n| view! { <span class="task-row__notes">{n}</span> })}
                    <span class="task-row__meta">
                        <span class="task-row__due" class:task-row__due--overdue=overdue>{due_label}</span>
                        {reminder.map(|r| view! { <span class="task-row__reminder">{r}</span> })}
                    </span>
                </div>
                <span class=priority_class(priority) title=priority.label()></span>
            </div>
        </li>
    }
}
