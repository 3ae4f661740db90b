use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_closed_and_light() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert_eq!(state.sheet, SheetMode::Closed);
    assert_eq!(state.revealed, None);
    assert_eq!(state.notice, None);
}

// =============================================================
// Sheet
// =============================================================

#[test]
fn opening_the_sheet_conceals_rows() {
    let id = TaskId::from_u128(1);
    let mut state = UiState::default();
    state.reveal(id);
    state.open_create();
    assert_eq!(state.sheet, SheetMode::Create);
    assert_eq!(state.revealed, None);

    state.reveal(id);
    state.open_edit(id);
    assert_eq!(state.sheet, SheetMode::Edit(id));
    assert_eq!(state.revealed, None);

    state.close_sheet();
    assert_eq!(state.sheet, SheetMode::Closed);
}

#[test]
fn sheet_errors_reset_on_retry_and_reopen() {
    let mut state = UiState::default();
    state.open_create();
    state.sheet_started();
    assert!(state.sheet_busy);
    state.sheet_failed("Title is required.".to_owned());
    assert!(!state.sheet_busy);
    assert_eq!(state.sheet_error.as_deref(), Some("Title is required."));

    state.sheet_started();
    assert_eq!(state.sheet_error, None);

    state.sheet_failed("offline".to_owned());
    state.open_edit(TaskId::from_u128(3));
    assert_eq!(state.sheet_error, None);
    assert!(!state.sheet_busy);
}

// =============================================================
// Revealed row
// =============================================================

#[test]
fn reveal_replaces_previous_row() {
    let a = TaskId::from_u128(1);
    let b = TaskId::from_u128(2);
    let mut state = UiState::default();
    state.reveal(a);
    state.reveal(b);
    assert!(!state.is_revealed(a));
    assert!(state.is_revealed(b));
}

#[test]
fn conceal_ignores_other_rows() {
    let a = TaskId::from_u128(1);
    let b = TaskId::from_u128(2);
    let mut state = UiState::default();
    state.reveal(a);
    state.conceal(b);
    assert!(state.is_revealed(a));
    state.conceal(a);
    assert_eq!(state.revealed, None);
}
