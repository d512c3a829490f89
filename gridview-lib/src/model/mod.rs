//! Typed models

mod column;
mod row;
mod value;

pub use column::*;
pub use row::*;
pub use value::*;

/// A raw row record as fetched from the data source: one JSON object with
/// its keys in document order.
///
/// Document order matters: column derivation reads the first record's keys
/// in the order they appear on the wire.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;
