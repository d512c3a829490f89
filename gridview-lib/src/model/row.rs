//! Row records and their stable identity

use super::Value;

/// Stable identity of a row: its position in the backing collection at load
/// time.
///
/// Sorting and filtering reorder views of the dataset but never change a
/// row's id, so an id captured before a sort still names the same record
/// after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(usize);

impl RowId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the load-time position this id was assigned from.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One fixed-shape data record displayed as a table line.
///
/// Cells are stored positionally, aligned with the derived
/// [`Columns`](super::Columns): `cells()[i]` is the value for the column
/// with index `i`, whether or not that column is currently visible.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: RowId,
    cells: Vec<Value>,
}

impl Row {
    pub(crate) fn new(id: RowId, cells: Vec<Value>) -> Self {
        Self { id, cells }
    }

    /// Returns the row's stable identity.
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Returns all cell values in column order.
    pub fn cells(&self) -> &[Value] {
        &self.cells
    }

    /// Returns the cell value at the given column index.
    pub fn cell(&self, column: usize) -> Option<&Value> {
        self.cells.get(column)
    }

    /// Returns the cell at the given column index as display text.
    ///
    /// Out-of-range indices and null cells both render as the empty string.
    pub fn cell_text(&self, column: usize) -> String {
        self.cells
            .get(column)
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    pub(crate) fn set_cell(&mut self, column: usize, value: Value) {
        if let Some(cell) = self.cells.get_mut(column) {
            *cell = value;
        }
    }
}
