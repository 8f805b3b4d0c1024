//! Sheet layout
//!
//! The schedule sheet has no declared schema; the positions that the search
//! reads from are collected here so they can be audited or swapped.

use crate::address::CellAddress;

/// A signed row/column offset from a matched cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub rows: isize,
    pub cols: isize,
}

impl Offset {
    pub const fn new(rows: isize, cols: isize) -> Self {
        Self { rows, cols }
    }
}

/// Where each component of a match record comes from
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetLayout {
    /// Sheet title, read once per search (I)
    pub title: CellAddress,
    /// Sheet period or date, read once per search (J)
    pub period: CellAddress,
    /// Absolute row holding the lower header level (B)
    pub header_row: usize,
    /// Absolute row holding the upper, usually merged, header level (C)
    pub group_header_row: usize,
    /// D
    pub below: Offset,
    /// E
    pub right: Offset,
    /// F
    pub two_below: Offset,
    /// G
    pub two_below_right: Offset,
    /// H
    pub three_below: Offset,
}

impl SheetLayout {
    /// Layout of the standard schedule sheet: title in B1, period in B3,
    /// headers on sheet rows 5 and 6.
    pub const STANDARD: SheetLayout = SheetLayout {
        title: CellAddress::new(0, 1),
        period: CellAddress::new(2, 1),
        header_row: 5,
        group_header_row: 4,
        below: Offset::new(1, 0),
        right: Offset::new(0, 1),
        two_below: Offset::new(2, 0),
        two_below_right: Offset::new(2, 1),
        three_below: Offset::new(3, 0),
    };
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}
