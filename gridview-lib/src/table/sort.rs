//! Row ordering by column criterion.

use std::cmp::Ordering;

use crate::model::Row;
use crate::model::Value;

/// The active sort criterion: a column index and a direction.
///
/// The column index is always a valid index into the columns as derived at
/// load time; hiding a column does not remove it from sortability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// 0-based index of the criterion column.
    pub column: usize,
    /// `true` for ascending (A-Z, 0-9) order.
    pub ascending: bool,
}

impl SortSpec {
    /// Creates an ascending sort on the given column.
    pub fn ascending(column: usize) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    /// Applies the header-click toggle rule.
    ///
    /// Clicking the currently-active criterion column flips the direction;
    /// clicking a different column switches to it, ascending.
    pub fn toggle(&mut self, column: usize) {
        if self.column == column {
            self.ascending = !self.ascending;
        } else {
            self.column = column;
            self.ascending = true;
        }
    }
}

/// How the comparator decides between numeric and textual comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericInference {
    /// Decide once per column: compare numerically iff every cell in the
    /// criterion column parses as a number.
    #[default]
    PerColumn,
    /// Decide per pairwise comparison: compare numerically iff both operands
    /// parse as non-zero numbers. Cells that parse to zero or fail to parse
    /// compare as text, so a mixed column orders its numeric pairs
    /// numerically and everything else lexicographically.
    PerComparison,
}

/// Stably sorts rows by the criterion column, in place.
///
/// Numeric cells compare numerically, textual cells compare
/// case-insensitively (uppercase-normalized); which of the two applies is
/// governed by `inference`. Descending order is the exact reverse of
/// ascending for distinct keys, and equal keys keep their prior relative
/// order either way.
pub fn sort_rows(rows: &mut [Row], spec: SortSpec, inference: NumericInference) {
    let column = spec.column;
    match inference {
        NumericInference::PerColumn => {
            let numeric = !rows.is_empty()
                && rows
                    .iter()
                    .all(|row| row.cell(column).and_then(Value::to_number).is_some());
            rows.sort_by(|a, b| {
                let ordering = if numeric {
                    compare_numeric(a, b, column)
                } else {
                    compare_text(a, b, column)
                };
                direct(ordering, spec.ascending)
            });
        }
        NumericInference::PerComparison => {
            rows.sort_by(|a, b| {
                let left = a.cell(column).and_then(Value::to_number);
                let right = b.cell(column).and_then(Value::to_number);
                let ordering = match (left, right) {
                    (Some(x), Some(y)) if x != 0.0 && y != 0.0 => {
                        x.partial_cmp(&y).unwrap_or(Ordering::Equal)
                    }
                    _ => compare_text(a, b, column),
                };
                direct(ordering, spec.ascending)
            });
        }
    }
}

fn direct(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

fn compare_numeric(a: &Row, b: &Row, column: usize) -> Ordering {
    let x = a.cell(column).and_then(Value::to_number).unwrap_or(0.0);
    let y = b.cell(column).and_then(Value::to_number).unwrap_or(0.0);
    x.partial_cmp(&y).unwrap_or(Ordering::Equal)
}

fn compare_text(a: &Row, b: &Row, column: usize) -> Ordering {
    a.cell_text(column)
        .to_uppercase()
        .cmp(&b.cell_text(column).to_uppercase())
}
