//! Grid search
//!
//! Walks every cell of a grid in row-major order and, for each cell whose
//! text contains the search token, reconstructs a schedule line from the
//! cells around it, the two header rows, and two sheet-wide values.
//!
//! Result order is traversal order; callers number matches from it.

use crate::address::CellAddress;
use crate::grid::CellSource;
use crate::header::resolve_header;
use crate::layout::{Offset, SheetLayout};
use crate::record::{Components, MatchRecord};

/// Sheet-wide values read once per search (fields I and J)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalValues {
    pub title: String,
    pub period: String,
}

/// Search `grid` for `token` using the standard sheet layout
///
/// An empty or whitespace-only token returns no matches without visiting
/// the grid.
pub fn search<G: CellSource + ?Sized>(grid: &G, token: &str) -> Vec<MatchRecord> {
    Searcher::new(grid).search(token)
}

/// Case-insensitive containment test of a cell against a lowercased needle
pub fn matches(cell: &str, needle: &str) -> bool {
    cell.trim().to_lowercase().contains(needle)
}

/// Searches one grid with a given layout
#[derive(Debug)]
pub struct Searcher<'g, G: ?Sized> {
    grid: &'g G,
    layout: SheetLayout,
}

impl<'g, G: CellSource + ?Sized> Searcher<'g, G> {
    /// Searcher using [`SheetLayout::STANDARD`]
    pub fn new(grid: &'g G) -> Self {
        Self {
            grid,
            layout: SheetLayout::STANDARD,
        }
    }

    /// Replace the layout
    pub fn with_layout(mut self, layout: SheetLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// Read the sheet-wide title and period
    pub fn globals(&self) -> GlobalValues {
        GlobalValues {
            title: self.grid.trimmed_at(self.layout.title).to_string(),
            period: self.grid.trimmed_at(self.layout.period).to_string(),
        }
    }

    /// All matches for `token`, in row-major order
    pub fn search(&self, token: &str) -> Vec<MatchRecord> {
        let token = token.trim();
        if token.is_empty() {
            return Vec::new();
        }
        let needle = token.to_lowercase();

        let globals = self.globals();
        let mut results = Vec::new();
        let rows = self.grid.row_count();

        for r in 0..rows {
            for c in 0..self.grid.row_len(r) {
                let cell = self.grid.cell(r, c).unwrap_or("");
                if matches(cell, &needle) {
                    results.push(self.build_record(CellAddress::new(r, c), &globals));
                }
            }
        }

        tracing::debug!(
            "Searched {} rows for {:?}: {} match(es)",
            rows,
            token,
            results.len()
        );

        results
    }

    /// The record a match at `addr` would produce, or `None` if no cell is stored there
    pub fn record_at(&self, addr: CellAddress) -> Option<MatchRecord> {
        self.grid.cell(addr.row, addr.col)?;
        Some(self.build_record(addr, &self.globals()))
    }

    fn build_record(&self, at: CellAddress, globals: &GlobalValues) -> MatchRecord {
        let layout = &self.layout;
        let raw = self.grid.trimmed_at(at).to_string();

        let components = Components {
            a: raw.clone(),
            b: resolve_header(self.grid, layout.header_row, at.col).to_string(),
            c: resolve_header(self.grid, layout.group_header_row, at.col).to_string(),
            d: self.relative(at, layout.below),
            e: self.relative(at, layout.right),
            f: self.relative(at, layout.two_below),
            g: self.relative(at, layout.two_below_right),
            h: self.relative(at, layout.three_below),
            i: globals.title.clone(),
            j: globals.period.clone(),
        };

        MatchRecord::new(at, raw, components)
    }

    /// Trimmed text at `at + offset`; anything outside the grid reads as empty
    fn relative(&self, at: CellAddress, offset: Offset) -> String {
        at.offset(offset.rows, offset.cols)
            .map(|target| self.grid.trimmed_at(target))
            .unwrap_or("")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::record::Field;
    use pretty_assertions::assert_eq;

    /// Title/period rows, two header rows, then a small schedule block.
    fn schedule() -> Grid {
        Grid::from_rows(vec![
            vec!["Rota", " Station North "],
            vec![""],
            vec!["Period", "2024-01"],
            vec![""],
            vec!["", "Morning", "", "Evening", ""],
            vec!["", "Counter", "Gate", "Counter", "Gate"],
            vec!["Mon", "123456789", "Lan", "987654321", "Minh"],
            vec!["", "07:00", "", "15:00", ""],
            vec!["", "11:00", "break", "19:00", "break"],
            vec!["", "OT", "", "", ""],
        ])
    }

    #[test]
    fn test_single_match_components() {
        let results = search(&schedule(), "123456789");
        assert_eq!(results.len(), 1);

        let record = &results[0];
        assert_eq!(record.coordinates, CellAddress::new(6, 1));
        assert_eq!(record.raw, "123456789");
        assert_eq!(record.components.get(Field::A), "123456789");
        assert_eq!(record.components.b, "Counter");
        assert_eq!(record.components.c, "Morning");
        assert_eq!(record.components.d, "07:00");
        assert_eq!(record.components.e, "Lan");
        assert_eq!(record.components.f, "11:00");
        assert_eq!(record.components.g, "break");
        assert_eq!(record.components.h, "OT");
        assert_eq!(record.components.i, "Station North");
        assert_eq!(record.components.j, "2024-01");
        assert_eq!(
            record.formatted,
            "Station North - 2024-01 - 07:00 - Counter (Morning) - Lan - 11:00 - break - OT"
        );
    }

    #[test]
    fn test_merged_group_header() {
        let results = search(&schedule(), "987654321");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].components.c, "Evening");
        assert_eq!(results[0].components.b, "Counter");
        assert_eq!(results[0].components.h, "");
    }

    #[test]
    fn test_empty_token() {
        assert!(search(&schedule(), "").is_empty());
        assert!(search(&schedule(), "   \t").is_empty());
    }

    #[test]
    fn test_substring_case_insensitive() {
        let grid = Grid::from_rows(vec![vec!["x", "ABC123XYZ"]]);
        let results = search(&grid, "123");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].raw, "ABC123XYZ");

        let results = search(&grid, " abc ");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].coordinates, CellAddress::new(0, 1));
    }

    #[test]
    fn test_row_major_order() {
        let grid = Grid::from_rows(vec![vec!["", "k1", "k2"], vec!["k3"], vec!["a", "b", "k4"]]);
        let coords: Vec<String> = search(&grid, "k")
            .iter()
            .map(|r| r.coordinates.to_string())
            .collect();
        assert_eq!(coords, vec!["B1", "C1", "A2", "C3"]);
    }

    #[test]
    fn test_match_at_bottom_right_edge() {
        let grid = Grid::from_rows(vec![vec!["", "T"], vec![""], vec!["", "P"], vec!["", "", "555"]]);
        let results = search(&grid, "555");
        assert_eq!(results.len(), 1);

        let c = &results[0].components;
        assert_eq!((c.d.as_str(), c.e.as_str()), ("", ""));
        assert_eq!((c.f.as_str(), c.g.as_str(), c.h.as_str()), ("", "", ""));
        assert_eq!((c.b.as_str(), c.c.as_str()), ("", ""));
        assert_eq!(results[0].formatted, "T - P -  -  () -  -  -  - ");
    }

    #[test]
    fn test_custom_layout() {
        let grid = Grid::from_rows(vec![
            vec!["Title", "", "Group"],
            vec!["", "", "Sub"],
            vec!["", "", "42"],
            vec!["", "left", "up"],
        ]);
        let layout = SheetLayout {
            title: CellAddress::new(0, 0),
            period: CellAddress::new(9, 9),
            header_row: 1,
            group_header_row: 0,
            below: Offset::new(1, 0),
            right: Offset::new(1, -1),
            two_below: Offset::new(-1, 0),
            two_below_right: Offset::new(-5, 0),
            three_below: Offset::new(0, -3),
        };
        let results = Searcher::new(&grid).with_layout(layout).search("42");
        let c = &results[0].components;
        assert_eq!(c.i, "Title");
        assert_eq!(c.j, "");
        assert_eq!(c.b, "Sub");
        assert_eq!(c.c, "Group");
        assert_eq!(c.d, "up");
        assert_eq!(c.e, "left");
        assert_eq!(c.f, "Sub");
        assert_eq!(c.g, "");
        assert_eq!(c.h, "");
    }

    #[test]
    fn test_record_at() {
        let grid = schedule();
        let searcher = Searcher::new(&grid);
        let record = searcher.record_at(CellAddress::new(6, 3)).unwrap();
        assert_eq!(record.components.c, "Evening");
        assert_eq!(record.components.d, "15:00");
        assert!(searcher.record_at(CellAddress::new(1, 4)).is_none());
        assert!(searcher.record_at(CellAddress::new(40, 0)).is_none());
    }

    #[test]
    fn test_searches_nested_vec() {
        let rows = vec![vec!["".to_string(), "abc".to_string()]];
        assert_eq!(search(&rows, "B").len(), 1);
    }
}
