//! Local UI chrome state (theme, open sheet, revealed row).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of `tasks` state so rendering
//! controls can evolve independently of the remote data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use tasks::TaskId;

/// What the bottom sheet is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SheetMode {
    #[default]
    Closed,
    Create,
    Edit(TaskId),
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub sheet: SheetMode,
    /// At most one row sits swiped open.
    pub revealed: Option<TaskId>,
    /// One-line status shown under the header, e.g. after a bulk clear.
    pub notice: Option<String>,
    /// Save or delete from the sheet in flight.
    pub sheet_busy: bool,
    pub sheet_error: Option<String>,
}

impl UiState {
    pub fn open_create(&mut self) {
        self.open(SheetMode::Create);
    }

    pub fn open_edit(&mut self, id: TaskId) {
        self.open(SheetMode::Edit(id));
    }

    fn open(&mut self, mode: SheetMode) {
        self.revealed = None;
        self.sheet = mode;
        self.sheet_busy = false;
        self.sheet_error = None;
    }

    pub fn close_sheet(&mut self) {
        self.sheet = SheetMode::Closed;
        self.sheet_busy = false;
        self.sheet_error = None;
    }

    pub fn sheet_started(&mut self) {
        self.sheet_busy = true;
        self.sheet_error = None;
    }

    pub fn sheet_failed(&mut self, message: String) {
        self.sheet_busy = false;
        self.sheet_error = Some(message);
    }

    pub fn reveal(&mut self, id: TaskId) {
        self.revealed = Some(id);
    }

    /// Forget the revealed row if it is `id`.
    pub fn conceal(&mut self, id: TaskId) {
        if self.revealed == Some(id) {
            self.revealed = None;
        }
    }

    pub fn is_revealed(&self, id: TaskId) -> bool {
        self.revealed == Some(id)
    }
}
