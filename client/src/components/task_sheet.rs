//! Draggable bottom sheet hosting the create/edit task form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `UiState::sheet` decides what the sheet shows. Opening resets the form
//! (blank for create, pre-filled for edit) and snaps the sheet open; dragging
//! the handle below the lowest snap closes it. Validation runs here with
//! `tasks::form`; the remote write belongs to the page via `on_submit`.

#[cfg(test)]
#[path = "task_sheet_test.rs"]
mod task_sheet_test;

use chrono::NaiveDate;
use leptos::prelude::*;
use tasks::{Priority, TaskId};
use tasks::dates::DatePreset;
use tasks::form::{TaskForm, ValidTask};
use tasks::gesture::{BottomSheet, SheetSnap};

use crate::state::tasks::TasksState;
use crate::state::ui::{SheetMode, UiState};
use crate::util::clock::{self, BrowserZone};
use crate::util::pointer;

/// A validated form ready to be written.
#[derive(Clone, Debug, PartialEq)]
pub enum SheetSubmit {
    Create(ValidTask),
    Update(TaskId, ValidTask),
}

fn sheet_title(mode: SheetMode) -> &'static str {
    match mode {
        SheetMode::Closed => "",
        SheetMode::Create => "New task",
        SheetMode::Edit(_) => "Edit task",
    }
}

fn initial_snap(mode: SheetMode) -> SheetSnap {
    match mode {
        SheetMode::Closed => SheetSnap::Closed,
        SheetMode::Create => SheetSnap::Half,
        SheetMode::Edit(_) => SheetSnap::Full,
    }
}

/// `datetime-local` for a reminder on its own day, else a plain time picker.
fn reminder_input_type(dated: bool) -> &'static str {
    if dated { "datetime-local" } else { "time" }
}

fn reminder_toggle_label(dated: bool) -> &'static str {
    if dated { "On due date" } else { "Other day" }
}

#[component]
pub fn TaskSheet(
    #[prop(into)] today: Signal<NaiveDate>,
    on_submit: Callback<SheetSubmit>,
    on_delete: Callback<TaskId>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tasks_state = expect_context::<RwSignal<TasksState>>();

    let form = RwSignal::new(TaskForm::default());
    let local_error = RwSignal::new(None::<String>);
    let reminder_dated = RwSignal::new(false);
    let sheet = RwSignal::new(BottomSheet::new(pointer::viewport_height()));
    let mode = Memo::new(move |_| ui.with(|u| u.sheet));

    Effect::new(move || {
        let current = mode.get();
        match current {
            SheetMode::Closed => {
                sheet.update(BottomSheet::close);
                return;
            }
            SheetMode::Create => form.set(TaskForm::new(today.get_untracked())),
            SheetMode::Edit(id) => {
                match tasks_state.with_untracked(|s| s.find(id).map(|t| TaskForm::from_task(t, &BrowserZone))) {
                    Some(filled) => form.set(filled),
                    None => {
                        ui.update(UiState::close_sheet);
                        return;
                    }
                }
            }
        }
        local_error.set(None);
        reminder_dated.set(form.with_untracked(TaskForm::reminder_is_dated));
        sheet.update(|s| {
            s.set_viewport(pointer::viewport_height());
            s.open(initial_snap(current));
        });
    });

    let on_handle_down = move |ev: leptos::ev::PointerEvent| {
        let (_, y) = pointer::point(&ev);
        pointer::capture(&ev);
        sheet.update(|s| s.grab(y, clock::now_ms()));
    };
    let on_handle_move = move |ev: leptos::ev::PointerEvent| {
        if !sheet.with_untracked(BottomSheet::is_dragging) {
            return;
        }
        let (_, y) = pointer::point(&ev);
        sheet.update(|s| {
            s.drag_to(y, clock::now_ms());
        });
    };
    let on_handle_up = move |_ev: leptos::ev::PointerEvent| {
        if !sheet.with_untracked(BottomSheet::is_dragging) {
            return;
        }
        let mut snap = SheetSnap::Closed;
        sheet.update(|s| snap = s.release());
        if snap == SheetSnap::Closed {
            ui.update(UiState::close_sheet);
        }
    };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if ui.with_untracked(|u| u.sheet_busy) {
            return;
        }
        let valid = match form.with_untracked(|f| f.validate(&BrowserZone)) {
            Ok(valid) => valid,
            Err(e) => {
                local_error.set(Some(e.to_string()));
                return;
            }
        };
        local_error.set(None);
        match mode.get_untracked() {
            SheetMode::Create => on_submit.run(SheetSubmit::Create(valid)),
            SheetMode::Edit(id) => on_submit.run(SheetSubmit::Update(id, valid)),
            SheetMode::Closed => {}
        }
    };

    let error = move || local_error.get().or_else(|| ui.with(|u| u.sheet_error.clone()));
    let busy = move || ui.with(|u| u.sheet_busy);
    let is_open = move || mode.get() != SheetMode::Closed;

    let presets = DatePreset::QUICK
        .into_iter()
        .map(|preset| {
            view! {
                <button
                    type="button"
                    class="task-sheet__chip"
                    class:task-sheet__chip--active=move || form.with(|f| f.active_preset(today.get()) == preset)
                    on:click=move |_| form.update(|f| f.apply_preset(preset, today.get_untracked()))
                >
                    {preset.label()}
                </button>
            }
        })
        .collect_view();

    let priorities = Priority::ALL
        .into_iter()
        .map(|priority| {
            view! {
                <button
                    type="button"
                    class="task-sheet__priority"
                    class:task-sheet__priority--active=move || form.with(|f| f.priority == priority.as_str())
                    on:click=move |_| form.update(|f| f.priority = priority.as_str().to_owned())
                >
                    {priority.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <Show when=is_open>
            <div class="task-sheet__backdrop" on:click=move |_| ui.update(UiState::close_sheet)></div>
        </Show>
        <section
            class="task-sheet"
            class:task-sheet--open=is_open
            class:task-sheet--dragging=move || sheet.with(BottomSheet::is_dragging)
            style:height=move || format!("{}px", sheet.with(BottomSheet::visible_px))
            aria-hidden=move || (!is_open()).to_string()
        >
            <div
                class="task-sheet__handle"
                on:pointerdown=on_handle_down
                on:pointermove=on_handle_move
                on:pointerup=on_handle_up
                on:pointercancel=on_handle_up
            >
                <span class="task-sheet__grip"></span>
                <h2 class="task-sheet__title">{move || sheet_title(mode.get())}</h2>
            </div>
            <form class="task-sheet__form" on:submit=on_form_submit>
                <input
                    class="task-sheet__input"
                    type="text"
                    placeholder="What needs doing?"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
                <textarea
                    class="task-sheet__notes"
                    placeholder="Notes"
                    prop:value=move || form.with(|f| f.notes.clone())
                    on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                ></textarea>

                <label class="task-sheet__label">"Due"</label>
                <div class="task-sheet__chips">{presets}</div>
                <input
                    class="task-sheet__input"
                    type="date"
                    prop:value=move || form.with(|f| f.due_date.clone())
                    on:input=move |ev| form.update(|f| f.due_date = event_target_value(&ev))
                />

                <label class="task-sheet__label">"Reminder"</label>
                <div class="task-sheet__row">
                    <input
                        class="task-sheet__input"
                        type=move || reminder_input_type(reminder_dated.get())
                        prop:value=move || form.with(|f| f.reminder.clone())
                        on:input=move |ev| form.update(|f| f.reminder = event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="task-sheet__clear"
                        on:click=move |_| {
                            let dated = !reminder_dated.get_untracked();
                            form.update(|f| f.set_reminder_dated(dated));
                            reminder_dated.set(dated);
                        }
                    >
                        {move || reminder_toggle_label(reminder_dated.get())}
                    </button>
                    <Show when=move || form.with(|f| !f.reminder.is_empty())>
                        <button
                            type="button"
                            class="task-sheet__clear"
                            on:click=move |_| form.update(|f| f.reminder.clear())
                        >
                            "Clear"
                        </button>
                    </Show>
                </div>

                <label class="task-sheet__label">"Priority"</label>
                <div class="task-sheet__priorities">{priorities}</div>

                <Show when=move || error().is_some()>
                    <p class="task-sheet__error">{move || error().unwrap_or_default()}</p>
                </Show>

                <div class="task-sheet__actions">
                    <Show when=move || matches!(mode.get(), SheetMode::Edit(_))>
                        <button
                            type="button"
                            class="task-sheet__delete"
                            disabled=busy
                            on:click=move |_| {
                                if let SheetMode::Edit(id) = mode.get_untracked() {
                                    on_delete.run(id);
                                }
                            }
                        >
                            "Delete"
                        </button>
                    </Show>
                    <button type="submit" class="task-sheet__save" disabled=busy>
                        {move || if busy() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
