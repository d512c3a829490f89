//! Pagination: fixed-size page slices and the page-number window.

use crate::model::Row;

/// One page-number control in the pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    /// The 1-based page number this control navigates to.
    pub number: usize,
    /// `true` if this is the page currently shown.
    pub current: bool,
}

/// Returns the number of pages the working set spans.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// Returns the slice of rows on the given 1-based page.
///
/// A page number past the end of the data yields an empty slice; callers
/// treat that as "no rows", not as an error.
pub fn page(rows: &[Row], number: usize, page_size: usize) -> &[Row] {
    if number == 0 {
        return &[];
    }
    let start = (number - 1) * page_size;
    if start >= rows.len() {
        return &[];
    }
    let end = (start + page_size).min(rows.len());
    &rows[start..end]
}

/// Computes the sliding window of page-number controls.
///
/// The window starts two slots left of the current page; slots that would
/// fall below page 1 are omitted rather than clamped, so fewer than `size`
/// numbers show near the start. The window is clamped above at `total`, so
/// it never offers a page past the data.
pub fn window(current: usize, total: usize, size: usize) -> Vec<PageButton> {
    let mut buttons = Vec::with_capacity(size);
    let first = current as i64 - 2;
    for offset in 0..size as i64 {
        let number = first + offset;
        if number < 1 {
            continue;
        }
        let number = number as usize;
        if number > total {
            break;
        }
        buttons.push(PageButton {
            number,
            current: number == current,
        });
    }
    buttons
}
