//! Dataset load errors

/// Fatal data-shape errors detected while loading the dataset.
///
/// All of these abort initialization: a malformed dataset is never partially
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// The fetched data contained no records, so no columns can be derived.
    #[error("dataset is empty: no columns can be derived")]
    Empty,

    /// A record's key set differs from the first record's.
    #[error("row {row} does not share the column shape of row 0")]
    ShapeMismatch {
        /// Load-time position of the offending record.
        row: usize,
    },

    /// A record carried a non-scalar (array or object) field value.
    #[error("row {row} field '{key}' is not a scalar value")]
    NonScalar {
        /// Load-time position of the offending record.
        row: usize,
        /// The field key holding the non-scalar value.
        key: String,
    },
}
