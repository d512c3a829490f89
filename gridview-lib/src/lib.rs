//! gridview core library
//!
//! The in-memory engine behind a sortable, filterable, paginated, editable
//! data table. Rows are fetched once from a backend endpoint as a JSON
//! array; everything after that (sorting by column, free-text search,
//! pagination, column visibility, and single-cell edits) is computed here
//! and pushed to a render callback. How the view is drawn is entirely the
//! caller's concern.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod table;

pub use client::DataClient;
pub use config::TableConfig;
pub use table::TableSession;
pub use table::TableView;
