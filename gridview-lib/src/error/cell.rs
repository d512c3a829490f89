//! Cell addressing errors

use crate::model::RowId;

/// Error type for operations that address a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CellError {
    /// No row with the given id exists in the store.
    #[error("row {id} not found")]
    RowNotFound {
        /// The id that failed to resolve.
        id: RowId,
    },

    /// The column index is outside the derived column range.
    #[error("column index {index} out of range ({count} columns)")]
    ColumnOutOfRange {
        /// The requested column index.
        index: usize,
        /// The number of derived columns.
        count: usize,
    },
}
