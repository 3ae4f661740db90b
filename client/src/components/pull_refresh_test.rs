use super::*;

#[test]
fn indicator_label_follows_phase() {
    assert_eq!(indicator_label(PullPhase::Idle, false), "Pull to refresh");
    assert_eq!(indicator_label(PullPhase::Pulling, false), "Pull to refresh");
    assert_eq!(indicator_label(PullPhase::Pulling, true), "Release to refresh");
    assert_eq!(indicator_label(PullPhase::Refreshing, false), "Refreshing...");
}
