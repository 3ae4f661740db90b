use super::*;

#[test]
fn empty_message_prefers_search_hint() {
    assert_eq!(empty_message(Filter::Completed, true), "No tasks match your search.");
}

#[test]
fn empty_message_per_filter() {
    assert!(empty_message(Filter::All, false).starts_with("Nothing due today"));
    assert_eq!(empty_message(Filter::Active, false), "All caught up.");
    assert_eq!(empty_message(Filter::Completed, false), "Nothing completed yet.");
}

#[test]
fn clear_completed_hidden_without_targets_or_under_active_filter() {
    assert!(show_clear_completed(true, Filter::All));
    assert!(show_clear_completed(true, Filter::Completed));
    assert!(!show_clear_completed(true, Filter::Active));
    assert!(!show_clear_completed(false, Filter::All));
}
