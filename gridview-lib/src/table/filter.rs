//! Free-text filtering over the row collection.

use crate::model::Row;
use crate::model::RowId;
use crate::model::Value;

/// Returns `true` if any cell of the row contains the needle.
///
/// Matching is a case-insensitive substring test over the textual form of
/// every cell, visible or hidden; filtering is content-based, not
/// visibility-based. `needle` must already be lowercased.
pub fn row_matches(row: &Row, needle: &str) -> bool {
    row.cells()
        .iter()
        .any(|cell| cell.to_string().to_lowercase().contains(needle))
}

/// Computes the subset of rows matching a search term.
///
/// The result preserves the input ordering; filtering never sorts. An empty
/// term matches every row (callers treat an empty trimmed term as "clear
/// filter" before reaching this point).
pub fn apply(rows: &[Row], term: &str) -> Vec<Row> {
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| row_matches(row, &needle))
        .cloned()
        .collect()
}

/// The active filter: the submitted term and its matched subset.
///
/// While active, the matched subset is the working set for sorting and
/// pagination. The subset keeps its own order, so re-sorting under a filter
/// reorders only the matches; the canonical order is untouched until the
/// filter is cleared.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    active: bool,
    term: String,
    matched: Vec<Row>,
}

impl FilterState {
    /// Creates the inactive (cleared) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a filter is applied.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the submitted search term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Returns the matched rows in their current order.
    pub fn matched(&self) -> &[Row] {
        &self.matched
    }

    /// Returns the matched rows for in-place reordering.
    pub fn matched_mut(&mut self) -> &mut [Row] {
        &mut self.matched
    }

    /// Returns `true` if a filter is active and matched nothing.
    ///
    /// This is the "no results" indicator state, recovered locally and
    /// surfaced to the user rather than raised as an error.
    pub fn is_empty_result(&self) -> bool {
        self.active && self.matched.is_empty()
    }

    /// Applies a new term against the given (canonical) row order.
    pub fn activate(&mut self, rows: &[Row], term: &str) {
        self.matched = apply(rows, term);
        self.term = term.to_string();
        self.active = true;
    }

    /// Restores the unfiltered state.
    pub fn clear(&mut self) {
        self.active = false;
        self.term.clear();
        self.matched.clear();
    }

    /// Mirrors a committed cell edit into the matched subset.
    ///
    /// The matched rows are working copies of the canonical rows; an edit
    /// landing in the store must land here too so the filtered view shows
    /// it. The subset is deliberately not re-filtered: an edit that makes a
    /// row stop matching the term keeps the row on screen until the next
    /// search.
    pub fn set_cell(&mut self, id: RowId, column: usize, value: Value) {
        if let Some(row) = self.matched.iter_mut().find(|row| row.id() == id) {
            row.set_cell(column, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Columns;
    use crate::model::RawRecord;
    use crate::store::RowStore;

    fn rows(json: &str) -> Vec<Row> {
        let records: Vec<RawRecord> = serde_json::from_str(json).unwrap();
        let columns = Columns::derive_from(&records[0]).unwrap();
        RowStore::from_records(&records, &columns)
            .unwrap()
            .all()
            .to_vec()
    }

    fn stores() -> Vec<Row> {
        rows(
            r#"[{"name": "Appstore", "storeRanking": 1},
                {"name": "Playstore", "storeRanking": 2},
                {"name": "Amazon", "storeRanking": 3}]"#,
        )
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let rows = stores();
        let matched = apply(&rows, "app");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].cell_text(0), "Appstore");

        let matched = apply(&rows, "STORE");
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_matches_any_cell() {
        let rows = stores();
        // "2" only appears in the storeRanking column
        let matched = apply(&rows, "2");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].cell_text(0), "Playstore");
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let rows = stores();
        let matched = apply(&rows, "store");
        let positions: Vec<usize> = matched.iter().map(|r| r.id().index()).collect();
        assert_eq!(positions, vec![0, 1]);
        for row in &matched {
            assert!(rows.iter().any(|r| r.id() == row.id()));
        }
    }

    #[test]
    fn test_no_matches_is_empty_result() {
        let mut state = FilterState::new();
        state.activate(&stores(), "zzz");
        assert!(state.is_active());
        assert!(state.is_empty_result());
    }

    #[test]
    fn test_clear_restores_inactive_state() {
        let mut state = FilterState::new();
        state.activate(&stores(), "app");
        state.clear();
        assert!(!state.is_active());
        assert!(!state.is_empty_result());
        assert!(state.matched().is_empty());
    }

    #[test]
    fn test_set_cell_updates_matched_copy() {
        let mut state = FilterState::new();
        let rows = stores();
        state.activate(&rows, "appstore");
        let id = state.matched()[0].id();

        state.set_cell(id, 0, Value::from("Renamed"));
        assert_eq!(state.matched()[0].cell_text(0), "Renamed");
    }
}
