//! Canonical row storage

use crate::error::CellError;
use crate::error::DatasetError;
use crate::model::Columns;
use crate::model::RawRecord;
use crate::model::Row;
use crate::model::RowId;
use crate::model::Value;
use crate::table::sort::NumericInference;
use crate::table::sort::SortSpec;

/// Holds the canonical ordered collection of rows.
///
/// The store's order *is* the canonical order: sorting is applied
/// destructively to it, and there is no separate "natural order" retained
/// after the first sort. Row identity ([`RowId`]) is assigned from the
/// load-time position and survives every reorder.
///
/// # Example
///
/// ```
/// use gridview_lib::model::Columns;
/// use gridview_lib::store::RowStore;
///
/// let records: Vec<gridview_lib::model::RawRecord> = serde_json::from_str(
///     r#"[{"name": "A", "storeRanking": 5}, {"name": "B", "storeRanking": 2}]"#,
/// )
/// .unwrap();
/// let columns = Columns::derive_from(&records[0]).unwrap();
/// let store = RowStore::from_records(&records, &columns).unwrap();
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.all()[0].cell_text(0), "A");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RowStore {
    rows: Vec<Row>,
}

impl RowStore {
    /// Builds the store from raw records, validating them against the
    /// derived columns.
    ///
    /// Fails with [`DatasetError::Empty`] when there are no records, with
    /// [`DatasetError::ShapeMismatch`] when a record's keys differ from the
    /// first record's, and with [`DatasetError::NonScalar`] when a field
    /// holds an array or object.
    pub fn from_records(records: &[RawRecord], columns: &Columns) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        let mut rows = Vec::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            rows.push(build_row(position, record, columns)?);
        }
        Ok(Self { rows })
    }

    /// Returns all rows in the canonical, currently-sorted order.
    pub fn all(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a row by its stable id.
    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Overwrites a single cell in place.
    ///
    /// No type coercion is enforced: the cell becomes whatever the caller
    /// passes, typically a string from a text edit even where the column was
    /// numeric.
    pub fn set_cell_value(
        &mut self,
        id: RowId,
        column: usize,
        value: Value,
    ) -> Result<(), CellError> {
        let count = self.rows.first().map(|r| r.cells().len()).unwrap_or(0);
        if column >= count {
            return Err(CellError::ColumnOutOfRange {
                index: column,
                count,
            });
        }
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or(CellError::RowNotFound { id })?;
        row.set_cell(column, value);
        Ok(())
    }

    /// Re-sorts the canonical order in place.
    pub fn sort(&mut self, spec: SortSpec, inference: NumericInference) {
        crate::table::sort::sort_rows(&mut self.rows, spec, inference);
    }
}

/// Validates one record against the derived columns and converts it to a row.
fn build_row(position: usize, record: &RawRecord, columns: &Columns) -> Result<Row, DatasetError> {
    if record.len() != columns.len() {
        return Err(DatasetError::ShapeMismatch { row: position });
    }
    let mut cells = Vec::with_capacity(columns.len());
    for (column, (key, json)) in columns.iter().zip(record.iter()) {
        if column.key() != key.as_str() {
            return Err(DatasetError::ShapeMismatch { row: position });
        }
        let value = Value::from_json(json.clone()).ok_or_else(|| DatasetError::NonScalar {
            row: position,
            key: key.clone(),
        })?;
        cells.push(value);
    }
    Ok(Row::new(RowId::new(position), cells))
}
