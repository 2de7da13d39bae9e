//! Per-column row filters
//!
//! Filters are case-insensitive substring matches against what the user
//! sees: the cell's computed display value, falling back to the raw input
//! when nothing has been computed yet. Filters on all columns must match
//! for a row to stay visible; empty filter strings are inert.

use gridbook_core::Sheet;

/// Indices of the rows that survive the given per-column filters.
///
/// `filters[c]` applies to column `c`. A non-empty filter aimed at a
/// column beyond the grid matches nothing, hiding every row.
pub fn visible_rows(sheet: &Sheet, filters: &[String]) -> Vec<usize> {
    let active: Vec<(usize, String)> = filters
        .iter()
        .enumerate()
        .filter(|(_, f)| !f.is_empty())
        .map(|(col, f)| (col, f.to_lowercase()))
        .collect();

    (0..sheet.grid().row_count())
        .filter(|&row| {
            active.iter().all(|(col, needle)| {
                sheet
                    .cell(row, *col)
                    .map(|cell| {
                        let shown = if cell.computed.is_empty() {
                            &cell.input
                        } else {
                            &cell.computed
                        };
                        shown.to_lowercase().contains(needle)
                    })
                    .unwrap_or(false)
            })
        })
        .collect()
}
