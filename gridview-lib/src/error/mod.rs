//! Error types

mod api;
mod cell;
mod dataset;
mod edit;

pub use api::*;
pub use cell::*;
pub use dataset::*;
pub use edit::*;

/// Top-level error type aggregating all error domains.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error while fetching data from the backend.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Fatal data-shape error at load time.
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// Edit-session lifecycle error.
    #[error(transparent)]
    Edit(#[from] EditError),

    /// Invalid cell target.
    #[error(transparent)]
    Cell(#[from] CellError),
}
