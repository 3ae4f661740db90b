//! In-memory task list plus the list controls (filter chip and search).
//!
//! DESIGN
//! ======
//! The list mirrors the remote table for the signed-in user. Reducers are
//! only called after a remote call succeeds, so a failed call leaves the
//! list untouched and records the message in `error`. Ordering and
//! bucketing are delegated to `tasks::list`.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use chrono::NaiveDate;
use tasks::list::{self, Filter, Summary, TodayView};
use tasks::{Task, TaskId};

#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<Task>,
    /// At least one successful load has happened.
    pub loaded: bool,
    /// Initial load in flight.
    pub loading: bool,
    /// Pull-to-refresh reload in flight.
    pub refreshing: bool,
    pub error: Option<String>,
    pub filter: Filter,
    pub query: String,
    /// Rows with a mutation in flight; their controls are disabled.
    pub busy: Vec<TaskId>,
}

impl TasksState {
    pub fn view(&self, today: NaiveDate) -> TodayView {
        list::partition(&self.items, today, self.filter, &self.query)
    }

    pub fn summary(&self, today: NaiveDate) -> Summary {
        Summary::of(&self.items, today)
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn has_completed(&self) -> bool {
        self.items.iter().any(|t| t.completed)
    }

    pub fn is_busy(&self, id: TaskId) -> bool {
        self.busy.contains(&id)
    }

    pub fn begin_load(&mut self, refresh: bool) {
        if refresh {
            self.refreshing = true;
        } else {
            self.loading = true;
        }
    }

    pub fn loaded(&mut self, mut items: Vec<Task>) {
        list::sort_tasks(&mut items);
        self.items = items;
        self.loaded = true;
        self.loading = false;
        self.refreshing = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.refreshing = false;
        self.error = Some(message);
    }

    /// A mutation was refused; the list stays as it was.
    pub fn rejected(&mut self, id: TaskId, message: String) {
        self.clear_busy(id);
        self.error = Some(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn mark_busy(&mut self, id: TaskId) {
        if !self.busy.contains(&id) {
            self.busy.push(id);
        }
    }

    pub fn clear_busy(&mut self, id: TaskId) {
        self.busy.retain(|b| *b != id);
    }

    /// A row came back from insert or update.
    pub fn saved(&mut self, task: Task) {
        self.clear_busy(task.id);
        list::upsert(&mut self.items, task);
        list::sort_tasks(&mut self.items);
        self.error = None;
    }

    pub fn deleted(&mut self, id: TaskId) -> Option<Task> {
        self.clear_busy(id);
        list::remove(&mut self.items, id)
    }

    /// Claim every completed row for a bulk clear and mark it busy. `None`
    /// while any of them already has a call in flight.
    pub fn begin_clear(&mut self) -> Option<Vec<TaskId>> {
        let ids = list::completed_ids(&self.items);
        if ids.iter().any(|id| self.is_busy(*id)) {
            return None;
        }
        for id in &ids {
            self.mark_busy(*id);
        }
        Some(ids)
    }

    /// The bulk clear of `ids` succeeded. Returns how many left the list.
    pub fn cleared(&mut self, ids: &[TaskId]) -> usize {
        self.busy.retain(|b| !ids.contains(b));
        list::remove_ids(&mut self.items, ids)
    }

    /// The bulk clear of `ids` was refused; the rows stay.
    pub fn clear_rejected(&mut self, ids: &[TaskId], message: String) {
        self.busy.retain(|b| !ids.contains(b));
        self.error = Some(message);
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Drop everything on sign-out.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
