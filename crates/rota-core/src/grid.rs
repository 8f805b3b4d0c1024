//! Grid type and the read-only cell interface used by the searcher

use crate::address::CellAddress;

/// Read-only access to a ragged grid of text cells
///
/// Anything that can answer these three questions can be searched, which
/// lets callers pass a plain `Vec<Vec<String>>` as easily as a [`Grid`].
pub trait CellSource {
    /// Number of rows
    fn row_count(&self) -> usize;

    /// Number of cells in `row` (0 for rows that do not exist)
    fn row_len(&self, row: usize) -> usize;

    /// Raw cell text, or `None` if the coordinate is outside the grid
    fn cell(&self, row: usize, col: usize) -> Option<&str>;

    /// Trimmed cell text; absent cells read as the empty string
    fn trimmed(&self, row: usize, col: usize) -> &str {
        self.cell(row, col).map(str::trim).unwrap_or("")
    }

    /// Trimmed cell text at an address
    fn trimmed_at(&self, addr: CellAddress) -> &str {
        self.trimmed(addr.row, addr.col)
    }
}

impl CellSource for [Vec<String>] {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn row_len(&self, row: usize) -> usize {
        self.get(row).map_or(0, Vec::len)
    }

    fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.get(row)?.get(col).map(String::as_str)
    }
}

impl CellSource for Vec<Vec<String>> {
    fn row_count(&self) -> usize {
        self.as_slice().row_count()
    }

    fn row_len(&self, row: usize) -> usize {
        self.as_slice().row_len(row)
    }

    fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.as_slice().cell(row, col)
    }
}

/// An immutable snapshot of a sheet: ordered rows of string cells
///
/// Rows may differ in length, as produced by parsing irregular CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from anything that yields rows of string-like cells
    pub fn from_rows<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        rows.into_iter()
            .map(|row| row.into_iter().map(Into::into).collect::<Vec<String>>())
            .collect()
    }

    /// All rows
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// A single row
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Length of the widest row
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Total number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// True when the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate every stored cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (CellAddress, &str)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, value)| (CellAddress::new(r, c), value.as_str()))
        })
    }

    /// Take back the rows
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

impl CellSource for Grid {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_len(&self, row: usize) -> usize {
        self.rows.row_len(row)
    }

    fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.cell(row, col)
    }
}

impl From<Vec<Vec<String>>> for Grid {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

impl FromIterator<Vec<String>> for Grid {
    fn from_iter<T: IntoIterator<Item = Vec<String>>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
