use super::*;

#[test]
fn cleared_notice_pluralizes() {
    assert_eq!(cleared_notice(0), "No completed tasks to clear.");
    assert_eq!(cleared_notice(1), "Cleared 1 completed task.");
    assert_eq!(cleared_notice(4), "Cleared 4 completed tasks.");
}
