//! Value enum for dynamic cell values

use serde::Deserialize;
use serde::Serialize;

/// A dynamic value that can hold any scalar cell type.
///
/// This enum represents all values a table cell can carry. It's used in
/// [`Row`](super::Row) to store cell values dynamically, in the order the
/// columns were derived.
///
/// # Type Mapping
///
/// | JSON | Rust Variant |
/// |------|--------------|
/// | null | `Null` |
/// | true/false | `Bool` |
/// | integral number | `Int` |
/// | fractional number | `Float` |
/// | string | `String` |
///
/// Arrays and objects are not representable; a dataset containing them is
/// rejected at load time.
///
/// # Example
///
/// ```
/// use gridview_lib::model::Value;
///
/// let name = Value::from("Appstore");
/// let ranking = Value::from(5i64);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }

    /// Converts a raw JSON value to a cell value.
    ///
    /// Returns `None` for arrays and objects, which have no scalar
    /// representation in a table cell.
    pub fn from_json(json: serde_json::Value) -> Option<Value> {
        match json {
            serde_json::Value::Null => Some(Value::Null),
            serde_json::Value::Bool(b) => Some(Value::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Value::Int(i))
                } else {
                    n.as_f64().map(Value::Float)
                }
            }
            serde_json::Value::String(s) => Some(Value::String(s)),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }

    /// Parses this value as a number, the way the sort comparator sees it.
    ///
    /// Numbers parse as themselves; strings parse if their trimmed text is a
    /// valid floating point literal. Booleans and nulls never parse.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            Value::Bool(_) | Value::Null => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(Value::from_json(serde_json::json!(null)), Some(Value::Null));
        assert_eq!(Value::from_json(serde_json::json!(5)), Some(Value::Int(5)));
        assert_eq!(
            Value::from_json(serde_json::json!(2.5)),
            Some(Value::Float(2.5))
        );
        assert_eq!(
            Value::from_json(serde_json::json!("CA")),
            Some(Value::String("CA".to_string()))
        );
    }

    #[test]
    fn test_from_json_rejects_composites() {
        assert_eq!(Value::from_json(serde_json::json!([1, 2])), None);
        assert_eq!(Value::from_json(serde_json::json!({"a": 1})), None);
    }

    #[test]
    fn test_to_number() {
        assert_eq!(Value::Int(5).to_number(), Some(5.0));
        assert_eq!(Value::from("42").to_number(), Some(42.0));
        assert_eq!(Value::from(" 7 ").to_number(), Some(7.0));
        assert_eq!(Value::from("0").to_number(), Some(0.0));
        assert_eq!(Value::from("Appstore").to_number(), None);
        assert_eq!(Value::Null.to_number(), None);
        assert_eq!(Value::Bool(true).to_number(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("Appstore").to_string(), "Appstore");
        assert_eq!(Value::Int(1_000_000).to_string(), "1000000");
        assert_eq!(Value::Null.to_string(), "");
    }
}
