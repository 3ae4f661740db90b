use super::*;
use chrono::{TimeZone, Utc};
use tasks::Priority;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

fn task(n: u128, title: &str, due: NaiveDate) -> Task {
    let created = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single().expect("ts");
    Task {
        id: TaskId::from_u128(n),
        user_id: "u1".to_owned(),
        title: title.to_owned(),
        notes: String::new(),
        due_date: due,
        reminder_at: None,
        priority: Priority::Medium,
        completed: false,
        created_at: created + chrono::Duration::minutes(i64::try_from(n).expect("small")),
        updated_at: created,
    }
}

fn today() -> NaiveDate {
    date(2026, 10, 18)
}

// =============================================================
// Loading
// =============================================================

#[test]
fn loaded_sorts_and_clears_flags() {
    let mut state = TasksState::default();
    state.begin_load(false);
    assert!(state.loading);
    state.error = Some("stale".to_owned());
    state.loaded(vec![task(1, "later", date(2026, 10, 20)), task(2, "now", today())]);
    assert!(state.loaded);
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.items[0].title, "now");
}

#[test]
fn refresh_uses_its_own_flag() {
    let mut state = TasksState::default();
    state.begin_load(true);
    assert!(state.refreshing);
    assert!(!state.loading);
    state.failed("offline".to_owned());
    assert!(!state.refreshing);
    assert_eq!(state.error.as_deref(), Some("offline"));
}

#[test]
fn failure_keeps_existing_items() {
    let mut state = TasksState::default();
    state.loaded(vec![task(1, "a", today())]);
    state.begin_load(true);
    state.failed("boom".to_owned());
    assert_eq!(state.items.len(), 1);
    state.dismiss_error();
    assert_eq!(state.error, None);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn saved_inserts_then_replaces() {
    let mut state = TasksState::default();
    state.loaded(vec![task(1, "a", today())]);
    state.mark_busy(TaskId::from_u128(2));
    state.saved(task(2, "b", date(2026, 10, 17)));
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].title, "b");
    assert!(!state.is_busy(TaskId::from_u128(2)));

    let mut edited = task(2, "b2", date(2026, 10, 25));
    edited.completed = true;
    state.saved(edited);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].title, "b2");
}

#[test]
fn deleted_removes_row() {
    let mut state = TasksState::default();
    state.loaded(vec![task(1, "a", today()), task(2, "b", today())]);
    let gone = state.deleted(TaskId::from_u128(1)).expect("removed");
    assert_eq!(gone.title, "a");
    assert!(state.find(TaskId::from_u128(1)).is_none());
    assert!(state.deleted(TaskId::from_u128(9)).is_none());
}

#[test]
fn cleared_drops_claimed_rows() {
    let mut done = task(2, "done", today());
    done.completed = true;
    let mut state = TasksState::default();
    state.loaded(vec![task(1, "open", today()), done]);
    assert!(state.has_completed());
    let ids = state.begin_clear().expect("nothing in flight");
    assert_eq!(ids, vec![TaskId::from_u128(2)]);
    assert!(state.is_busy(TaskId::from_u128(2)));
    assert_eq!(state.cleared(&ids), 1);
    assert!(!state.has_completed());
    assert!(state.busy.is_empty());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn second_clear_waits_for_the_first() {
    let mut done = task(2, "done", today());
    done.completed = true;
    let mut state = TasksState::default();
    state.loaded(vec![task(1, "open", today()), done]);
    let ids = state.begin_clear().expect("nothing in flight");
    assert_eq!(state.begin_clear(), None);
    state.clear_rejected(&ids, "offline".to_owned());
    assert_eq!(state.error.as_deref(), Some("offline"));
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.begin_clear(), Some(ids));
}

#[test]
fn rejected_keeps_list_and_refresh_flag() {
    let mut state = TasksState::default();
    state.loaded(vec![task(1, "a", today())]);
    let id = TaskId::from_u128(1);
    state.mark_busy(id);
    state.begin_load(true);
    state.rejected(id, "permission denied".to_owned());
    assert!(!state.is_busy(id));
    assert!(state.refreshing);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("permission denied"));
}

#[test]
fn busy_marks_are_unique() {
    let mut state = TasksState::default();
    let id = TaskId::from_u128(4);
    state.mark_busy(id);
    state.mark_busy(id);
    assert_eq!(state.busy.len(), 1);
    state.clear_busy(id);
    assert!(!state.is_busy(id));
}

// =============================================================
// View
// =============================================================

#[test]
fn view_applies_filter_and_query() {
    let mut done = task(3, "Pay rent", today());
    done.completed = true;
    let mut state = TasksState::default();
    state.loaded(vec![task(1, "Buy milk", today()), task(2, "Call mom", date(2026, 10, 21)), done]);

    let view = state.view(today());
    assert_eq!(view.today.len(), 2);
    assert_eq!(view.upcoming.len(), 1);

    state.set_filter(Filter::Active);
    assert_eq!(state.view(today()).today.len(), 1);

    state.set_query("mom".to_owned());
    let view = state.view(today());
    assert!(view.today.is_empty());
    assert_eq!(view.upcoming[0].title, "Call mom");
}

#[test]
fn summary_counts_overdue() {
    let mut state = TasksState::default();
    state.loaded(vec![task(1, "old", date(2026, 10, 10)), task(2, "now", today())]);
    let summary = state.summary(today());
    assert_eq!(summary.overdue, 1);
    assert_eq!(summary.due_today, 1);
}

#[test]
fn reset_forgets_everything() {
    let mut state = TasksState::default();
    state.loaded(vec![task(1, "a", today())]);
    state.set_query("a".to_owned());
    state.reset();
    assert!(state.items.is_empty());
    assert!(!state.loaded);
    assert!(state.query.is_empty());
}
