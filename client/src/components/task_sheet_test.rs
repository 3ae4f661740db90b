use super::*;

#[test]
fn sheet_title_per_mode() {
    assert_eq!(sheet_title(SheetMode::Create), "New task");
    assert_eq!(sheet_title(SheetMode::Edit(TaskId::from_u128(1))), "Edit task");
    assert_eq!(sheet_title(SheetMode::Closed), "");
}

#[test]
fn create_opens_half_and_edit_opens_full() {
    assert_eq!(initial_snap(SheetMode::Create), SheetSnap::Half);
    assert_eq!(initial_snap(SheetMode::Edit(TaskId::from_u128(1))), SheetSnap::Full);
    assert_eq!(initial_snap(SheetMode::Closed), SheetSnap::Closed);
}

#[test]
fn reminder_input_type_follows_dated_toggle() {
    assert_eq!(reminder_input_type(false), "time");
    assert_eq!(reminder_input_type(true), "datetime-local");
}

#[test]
fn reminder_toggle_offers_the_other_shape() {
    assert_eq!(reminder_toggle_label(false), "Other day");
    assert_eq!(reminder_toggle_label(true), "On due date");
}
