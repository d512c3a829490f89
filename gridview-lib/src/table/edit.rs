//! Transient cell edit state.

use crate::model::RowId;
use crate::model::Value;

/// The transient state of one cell being interactively modified.
///
/// A session is created when a cell is activated for editing and destroyed
/// when its new value is committed. There is no cancel transition: the only
/// way to leave a session without a change is to commit the original value,
/// which [`original_value`](Self::original_value) exposes for that purpose.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    row: RowId,
    column: usize,
    original: Value,
}

impl EditSession {
    pub(crate) fn new(row: RowId, column: usize, original: Value) -> Self {
        Self {
            row,
            column,
            original,
        }
    }

    /// Returns the id of the row under edit.
    pub fn row(&self) -> RowId {
        self.row
    }

    /// Returns the column index of the cell under edit.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the cell's value at the time the session began.
    pub fn original_value(&self) -> &Value {
        &self.original
    }
}
