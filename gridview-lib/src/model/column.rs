//! Column definitions derived from the dataset

use crate::error::DatasetError;
use crate::model::RawRecord;

/// A single column: a named, indexed field shared by all rows.
///
/// `index` is the column's 0-based position as derived from the first row's
/// keys and never changes. Visibility is a presentation toggle only; hidden
/// columns keep their data and stay sortable and searchable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    key: String,
    label: String,
    index: usize,
    visible: bool,
}

impl Column {
    fn new(key: &str, index: usize) -> Self {
        Self {
            key: key.to_string(),
            label: display_label(key),
            index,
            visible: true,
        }
    }

    /// Returns the field key this column reads from.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the human-readable header label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the column's 0-based position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if the column is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Derives a header label from a camelCase field key.
///
/// The key is split before each uppercase letter, the first character is
/// capitalized, and the segments are joined with single spaces:
/// `storeRanking` becomes "Store Ranking".
fn display_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                label.push(' ');
            }
            label.push(ch);
        }
    }
    label
}

/// The column registry: all columns in derivation order plus their
/// visibility state.
///
/// Columns are derived once, from the first row of the dataset. Every other
/// row is expected to share exactly the same keys in the same order; the
/// [`RowStore`](crate::store::RowStore) enforces that at load time.
///
/// # Example
///
/// ```
/// use gridview_lib::model::Columns;
///
/// let first = serde_json::from_str(r#"{"name": "A", "storeRanking": 5}"#).unwrap();
/// let columns = Columns::derive_from(&first).unwrap();
///
/// assert_eq!(columns.len(), 2);
/// assert_eq!(columns.get(1).unwrap().label(), "Store Ranking");
/// ```
#[derive(Debug, Clone)]
pub struct Columns {
    columns: Vec<Column>,
}

impl Columns {
    /// Derives column definitions from the first row's field set.
    ///
    /// Fails with [`DatasetError::Empty`] if the row has no fields, since no
    /// columns can be derived from it.
    pub fn derive_from(first: &RawRecord) -> Result<Self, DatasetError> {
        if first.is_empty() {
            return Err(DatasetError::Empty);
        }
        let columns = first
            .keys()
            .enumerate()
            .map(|(index, key)| Column::new(key, index))
            .collect();
        Ok(Self { columns })
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the column at the given index.
    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Iterates over all columns in derivation order.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Hides the column at the given index.
    ///
    /// A no-op if the column is already hidden or the index is out of range.
    pub fn hide(&mut self, index: usize) {
        if let Some(column) = self.columns.get_mut(index) {
            column.visible = false;
        }
    }

    /// Shows the column at the given index again.
    ///
    /// A no-op if the column is already visible or the index is out of range.
    pub fn unhide(&mut self, index: usize) {
        if let Some(column) = self.columns.get_mut(index) {
            column.visible = true;
        }
    }

    /// Returns the indices of all currently visible columns, in order.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.columns
            .iter()
            .filter(|c| c.visible)
            .map(|c| c.index)
            .collect()
    }

    /// Returns the labels of all currently hidden columns, in order.
    pub fn hidden_labels(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| !c.visible)
            .map(|c| c.label.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> RawRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("name"), "Name");
        assert_eq!(display_label("storeRanking"), "Store Ranking");
        assert_eq!(display_label("activeDailyUsers"), "Active Daily Users");
    }

    #[test]
    fn test_derive_preserves_key_order() {
        let first = record(r#"{"name": "A", "storeRanking": 5, "location": "CA"}"#);
        let columns = Columns::derive_from(&first).unwrap();

        assert_eq!(columns.len(), 3);
        let keys: Vec<&str> = columns.iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec!["name", "storeRanking", "location"]);
        let indices: Vec<usize> = columns.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_derive_from_empty_record() {
        let first = record("{}");
        assert!(matches!(
            Columns::derive_from(&first),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn test_hide_unhide_idempotent() {
        let first = record(r#"{"name": "A", "storeRanking": 5}"#);
        let mut columns = Columns::derive_from(&first).unwrap();

        columns.hide(1);
        columns.hide(1);
        assert_eq!(columns.visible_indices(), vec![0]);
        assert_eq!(columns.hidden_labels(), vec!["Store Ranking"]);

        columns.unhide(1);
        columns.unhide(1);
        assert_eq!(columns.visible_indices(), vec![0, 1]);
        assert!(columns.hidden_labels().is_empty());

        // Out-of-range indices are ignored
        columns.hide(9);
        assert_eq!(columns.visible_indices(), vec![0, 1]);
    }
}
