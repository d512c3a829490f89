//! Table configuration.

use crate::table::sort::NumericInference;

/// Tunable parameters for a [`TableSession`](crate::TableSession).
///
/// # Example
///
/// ```
/// use gridview_lib::TableConfig;
///
/// // Defaults: 10 rows per page, a 5-slot page window, initial sort on
/// // column 1 ascending.
/// let config = TableConfig::default();
///
/// let custom = TableConfig::default()
///     .page_size(25)
///     .window_size(7)
///     .initial_sort_column(0);
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Number of rows per page.
    pub page_size: usize,
    /// Number of slots in the page-number window.
    pub window_size: usize,
    /// Column the dataset is initially sorted by (ascending). Clamped into
    /// the derived column range at session creation.
    pub initial_sort_column: usize,
    /// How the sort comparator decides between numeric and textual
    /// comparison.
    pub numeric_inference: NumericInference,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            window_size: 5,
            initial_sort_column: 1,
            numeric_inference: NumericInference::default(),
        }
    }
}

impl TableConfig {
    /// Sets the number of rows per page.
    pub fn page_size(mut self, n: usize) -> Self {
        self.page_size = n;
        self
    }

    /// Sets the number of slots in the page-number window.
    pub fn window_size(mut self, n: usize) -> Self {
        self.window_size = n;
        self
    }

    /// Sets the column the dataset is initially sorted by.
    pub fn initial_sort_column(mut self, column: usize) -> Self {
        self.initial_sort_column = column;
        self
    }

    /// Sets the numeric-vs-text comparison policy.
    pub fn numeric_inference(mut self, inference: NumericInference) -> Self {
        self.numeric_inference = inference;
        self
    }
}
