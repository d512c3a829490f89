//! The table-state controller.

use crate::config::TableConfig;
use crate::error::CellError;
use crate::error::DatasetError;
use crate::error::EditError;
use crate::model::Columns;
use crate::model::RawRecord;
use crate::model::Row;
use crate::model::RowId;
use crate::model::Value;
use crate::store::RowStore;
use crate::table::edit::EditSession;
use crate::table::filter::FilterState;
use crate::table::page;
use crate::table::sort;
use crate::table::sort::SortSpec;
use crate::table::view::ColumnView;
use crate::table::view::RowView;
use crate::table::view::SortIndicator;
use crate::table::view::TableView;

/// The render callback: consumes a computed view after every state-affecting
/// operation.
pub type RenderFn = Box<dyn FnMut(&TableView)>;

/// Single-owner controller for the whole table state.
///
/// Owns the canonical rows, the derived columns, and all mutable view state
/// (sort criterion, filter, current page, hidden columns, edit session).
/// Every user command executes to completion, recomputes the derived view,
/// and hands it to the render callback; nothing else mutates the state, so
/// no locking is needed.
///
/// # Example
///
/// ```
/// use gridview_lib::TableConfig;
/// use gridview_lib::TableSession;
///
/// let records = serde_json::from_str(
///     r#"[{"name": "Appstore", "storeRanking": 2},
///         {"name": "Playstore", "storeRanking": 1}]"#,
/// )
/// .unwrap();
///
/// let mut session =
///     TableSession::new(records, TableConfig::default(), Box::new(|_view| {})).unwrap();
///
/// // Initial order is by the configured sort column (storeRanking, ascending)
/// assert_eq!(session.view().rows[0].cells[0].to_string(), "Playstore");
///
/// session.submit_search("app");
/// assert_eq!(session.view().rows.len(), 1);
/// ```
pub struct TableSession {
    columns: Columns,
    store: RowStore,
    config: TableConfig,
    sort: SortSpec,
    filter: FilterState,
    current_page: usize,
    edit: Option<EditSession>,
    render: RenderFn,
}

impl TableSession {
    /// Builds the session from fetched records and renders the initial view.
    ///
    /// Columns are derived from the first record, every record is validated
    /// against that shape, and the initial sort order is applied to the
    /// canonical collection before the first render.
    pub fn new(
        records: Vec<RawRecord>,
        config: TableConfig,
        render: RenderFn,
    ) -> Result<Self, DatasetError> {
        let first = records.first().ok_or(DatasetError::Empty)?;
        let columns = Columns::derive_from(first)?;
        let store = RowStore::from_records(&records, &columns)?;

        // The configured initial criterion, clamped into the derived range
        // so the criterion-is-valid invariant holds from the first render.
        let criterion = config.initial_sort_column.min(columns.len() - 1);
        let mut session = Self {
            columns,
            store,
            config,
            sort: SortSpec::ascending(criterion),
            filter: FilterState::new(),
            current_page: 1,
            edit: None,
            render,
        };
        session.store.sort(session.sort, session.config.numeric_inference);
        session.emit();
        Ok(session)
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    /// Returns the derived columns and their visibility state.
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Returns the active sort criterion.
    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Returns the current 1-based page number.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the active search term, if a filter is applied.
    pub fn filter_term(&self) -> Option<&str> {
        self.filter.is_active().then(|| self.filter.term())
    }

    /// Returns the open edit session, if any.
    pub fn editing(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Returns the size of the working set (filtered subset while a filter
    /// is active, the full collection otherwise).
    pub fn working_len(&self) -> usize {
        self.working_set().len()
    }

    /// Recomputes the current view without rendering.
    pub fn view(&self) -> TableView {
        self.build_view()
    }

    // =========================================================================
    // User commands
    // =========================================================================

    /// Sorts by the given column, applying the header-click toggle rule.
    ///
    /// Clicking the active criterion flips the direction; clicking another
    /// column switches to it ascending. The working set is reordered
    /// destructively and the current page resets to 1. Out-of-range column
    /// indices are ignored.
    pub fn sort_by_column(&mut self, column: usize) {
        if column >= self.columns.len() {
            return;
        }
        self.sort.toggle(column);
        log::debug!(
            "sorting by column {} ({})",
            self.sort.column,
            if self.sort.ascending { "asc" } else { "desc" }
        );
        let inference = self.config.numeric_inference;
        if self.filter.is_active() {
            sort::sort_rows(self.filter.matched_mut(), self.sort, inference);
        } else {
            self.store.sort(self.sort, inference);
        }
        self.current_page = 1;
        self.emit();
    }

    /// Applies a free-text filter over the full collection.
    ///
    /// A term that is empty after trimming clears the filter instead. The
    /// matched subset preserves the canonical order and the current page
    /// resets to 1; zero matches become the view's no-results state.
    pub fn submit_search(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            self.clear_search();
            return;
        }
        self.filter.activate(self.store.all(), term);
        log::debug!(
            "filter \"{}\" matched {} of {} rows",
            term,
            self.filter.matched().len(),
            self.store.len()
        );
        self.current_page = 1;
        self.emit();
    }

    /// Clears the filter, restoring the full collection as the working set.
    ///
    /// The current page is left as-is; it simply addresses the full
    /// collection again.
    pub fn clear_search(&mut self) {
        self.filter.clear();
        self.emit();
    }

    /// Moves to the given 1-based page.
    ///
    /// A page past the end of the working set renders as "no rows"; callers
    /// are expected to offer only numbers from the page window.
    pub fn change_page(&mut self, number: usize) {
        self.current_page = number.max(1);
        self.emit();
    }

    /// Hides a column. Its data stays loaded, sortable, and searchable.
    pub fn hide_column(&mut self, column: usize) {
        self.columns.hide(column);
        self.emit();
    }

    /// Shows a hidden column again.
    pub fn unhide_column(&mut self, column: usize) {
        self.columns.unhide(column);
        self.emit();
    }

    /// Opens an edit session on one cell.
    ///
    /// Only one session may be open at a time; a second `begin_edit` before
    /// the first commit is rejected. Opening a session does not re-render;
    /// the editor itself is the shell's concern.
    pub fn begin_edit(&mut self, id: RowId, column: usize) -> Result<(), EditError> {
        if let Some(open) = &self.edit {
            return Err(EditError::InProgress {
                row: open.row(),
                column: open.column(),
            });
        }
        if column >= self.columns.len() {
            return Err(CellError::ColumnOutOfRange {
                index: column,
                count: self.columns.len(),
            }
            .into());
        }
        let row = self.store.get(id).ok_or(CellError::RowNotFound { id })?;
        let original = row.cell(column).cloned().unwrap_or_default();
        self.edit = Some(EditSession::new(id, column, original));
        Ok(())
    }

    /// Commits the open edit session, writing the new value verbatim.
    ///
    /// The value lands in the canonical row (and the filtered working copy,
    /// if a filter is active), the session is destroyed, and the view is
    /// re-rendered.
    pub fn commit_edit(&mut self, value: Value) -> Result<(), EditError> {
        let open = self.edit.take().ok_or(EditError::NoSession)?;
        self.store
            .set_cell_value(open.row(), open.column(), value.clone())
            .map_err(EditError::from)?;
        self.filter.set_cell(open.row(), open.column(), value);
        self.emit();
        Ok(())
    }

    // =========================================================================
    // View computation
    // =========================================================================

    fn working_set(&self) -> &[Row] {
        if self.filter.is_active() {
            self.filter.matched()
        } else {
            self.store.all()
        }
    }

    fn build_view(&self) -> TableView {
        let working = self.working_set();
        let total_pages = page::total_pages(working.len(), self.config.page_size);
        let rows = page::page(working, self.current_page, self.config.page_size)
            .iter()
            .map(|row| RowView {
                id: row.id(),
                cells: row.cells().to_vec(),
            })
            .collect();
        let pages = page::window(self.current_page, total_pages, self.config.window_size);

        let columns = self
            .columns
            .iter()
            .map(|column| ColumnView {
                key: column.key().to_string(),
                label: column.label().to_string(),
                index: column.index(),
                visible: column.is_visible(),
                sort: if column.index() == self.sort.column {
                    if self.sort.ascending {
                        SortIndicator::Ascending
                    } else {
                        SortIndicator::Descending
                    }
                } else {
                    SortIndicator::None
                },
            })
            .collect();

        TableView {
            columns,
            rows,
            pages,
            current_page: self.current_page,
            total_pages,
            filter: self.filter_term().map(str::to_string),
            no_results: self.filter.is_empty_result(),
            hidden_labels: self.columns.hidden_labels(),
        }
    }

    fn emit(&mut self) {
        let view = self.build_view();
        (self.render)(&view);
    }
}

impl std::fmt::Debug for TableSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableSession")
            .field("columns", &self.columns.len())
            .field("rows", &self.store.len())
            .field("sort", &self.sort)
            .field("filtered", &self.filter.is_active())
            .field("current_page", &self.current_page)
            .field("editing", &self.edit.is_some())
            .finish()
    }
}
