//! The computed view handed to the render callback.

use crate::model::RowId;
use crate::model::Value;

pub use super::page::PageButton;

/// Sort marker for a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortIndicator {
    /// Not the current sort criterion.
    #[default]
    None,
    /// Criterion column, ascending.
    Ascending,
    /// Criterion column, descending.
    Descending,
}

/// One column as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    /// The field key the column reads from.
    pub key: String,
    /// Header label.
    pub label: String,
    /// 0-based column position.
    pub index: usize,
    /// `false` when the column is hidden. Hidden columns still appear here
    /// (with their cells) so renderers can offer an unhide control.
    pub visible: bool,
    /// Sort marker for the header.
    pub sort: SortIndicator,
}

/// One row of the current page as the renderer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// Stable row identity, usable as an edit target.
    pub id: RowId,
    /// All cell values in column order, including hidden columns.
    pub cells: Vec<Value>,
}

/// A complete snapshot of what should be on screen.
///
/// Produced by [`TableSession`](super::TableSession) after every
/// state-affecting operation and passed to the render callback. The snapshot
/// owns its data; it stays valid after further session mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    /// All columns in derivation order, with visibility and sort markers.
    pub columns: Vec<ColumnView>,
    /// The rows of the current page of the working set.
    pub rows: Vec<RowView>,
    /// The page-number window.
    pub pages: Vec<PageButton>,
    /// The current 1-based page number.
    pub current_page: usize,
    /// Total pages in the working set.
    pub total_pages: usize,
    /// The active search term, if a filter is applied.
    pub filter: Option<String>,
    /// `true` when a filter is active and matched nothing; renderers must
    /// show a "no results" indicator instead of a silently empty table.
    pub no_results: bool,
    /// Labels of currently hidden columns, for the unhide controls.
    pub hidden_labels: Vec<String>,
}
