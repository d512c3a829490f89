//! Edit-session errors

use super::CellError;
use crate::model::RowId;

/// Errors from the cell edit-session lifecycle.
///
/// At most one edit session may be open at a time; the session must be
/// committed before another can begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// A session is already open for another cell.
    #[error("an edit is already in progress on row {row}, column {column}")]
    InProgress {
        /// Row targeted by the open session.
        row: RowId,
        /// Column targeted by the open session.
        column: usize,
    },

    /// `commit_edit` was called with no open session.
    #[error("no edit session is open")]
    NoSession,

    /// The targeted cell does not exist.
    #[error(transparent)]
    Cell(#[from] CellError),
}
