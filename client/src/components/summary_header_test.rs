use super::*;

#[test]
fn greeting_by_hour() {
    assert_eq!(greeting(4), "Good evening");
    assert_eq!(greeting(5), "Good morning");
    assert_eq!(greeting(11), "Good morning");
    assert_eq!(greeting(12), "Good afternoon");
    assert_eq!(greeting(17), "Good afternoon");
    assert_eq!(greeting(18), "Good evening");
}

#[test]
fn progress_line_for_empty_list() {
    assert_eq!(progress_line(&Summary::default()), "Nothing planned yet");
}

#[test]
fn progress_line_counts_done_and_overdue() {
    let summary = Summary { total: 5, completed: 2, remaining: 3, overdue: 0, due_today: 3 };
    assert_eq!(progress_line(&summary), "2 of 5 done");
    let summary = Summary { overdue: 1, ..summary };
    assert_eq!(progress_line(&summary), "2 of 5 done \u{b7} 1 overdue");
}
