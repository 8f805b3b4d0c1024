//! Merged header resolution
//!
//! Spreadsheet exports write the label of a merged range into its leftmost
//! cell only; the cells it visually spans come out empty. Scanning a header
//! row leftward from a column recovers the label that applies to it.

use crate::grid::CellSource;

/// Nearest non-empty (trimmed) value at or to the left of `col` in `row`
///
/// Returns `""` if `row` does not exist or every cell from `col` down to
/// column 0 is empty. Never looks to the right of `col`.
///
/// ```
/// use rota_core::{resolve_header, Grid};
///
/// let grid = Grid::from_rows(vec![vec!["Morning", "", "", "Evening", ""]]);
/// assert_eq!(resolve_header(&grid, 0, 2), "Morning");
/// assert_eq!(resolve_header(&grid, 0, 4), "Evening");
/// assert_eq!(resolve_header(&grid, 1, 0), "");
/// ```
pub fn resolve_header<G: CellSource + ?Sized>(grid: &G, row: usize, col: usize) -> &str {
    if row >= grid.row_count() {
        return "";
    }

    // Cells past the end of the row are empty, start at the last one stored.
    let len = grid.row_len(row);
    if len == 0 {
        return "";
    }
    let start = col.min(len - 1);

    (0..=start)
        .rev()
        .map(|c| grid.trimmed(row, c))
        .find(|value| !value.is_empty())
        .unwrap_or("")
}
