//! Filter chips and search box above the list.

use leptos::prelude::*;
use tasks::list::Filter;

use crate::state::tasks::TasksState;

#[component]
pub fn FilterBar() -> impl IntoView {
    let tasks_state = expect_context::<RwSignal<TasksState>>();

    let chips = Filter::ALL
        .into_iter()
        .map(|filter| {
            let active = move || tasks_state.with(|s| s.filter == filter);
            view! {
                <button
                    class="filter-chip"
                    class:filter-chip--active=active
                    aria-pressed=move || active().to_string()
                    on:click=move |_| tasks_state.update(|s| s.set_filter(filter))
                >
                    {filter.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="filter-bar">
            <div class="filter-bar__chips" role="group" aria-label="Filter tasks">{chips}</div>
            <input
                class="filter-bar__search"
                type="search"
                placeholder="Search tasks"
                prop:value=move || tasks_state.with(|s| s.query.clone())
                on:input=move |ev| tasks_state.update(|s| s.set_query(event_target_value(&ev)))
            />
        </div>
    }
}
