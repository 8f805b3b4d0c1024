//! # rota-core
//!
//! Search a schedule sheet for a code and rebuild a readable schedule line
//! for every cell that contains it.
//!
//! This crate provides:
//! - [`Grid`] and the [`CellSource`] trait - read-only ragged text grids
//! - [`CellAddress`] - zero-based coordinates with A1 display
//! - [`resolve_header`] - merged header lookup (nearest non-empty cell to the left)
//! - [`search`] and [`Searcher`] - the grid search producing [`MatchRecord`]s
//! - [`SheetLayout`] - the fixed positions the search reads from
//!
//! ## Example
//!
//! ```rust
//! use rota_core::{search, Grid};
//!
//! let grid = Grid::from_rows(vec![
//!     vec!["", "Rota"],
//!     vec![""],
//!     vec!["", "2024-01"],
//!     vec![""],
//!     vec!["", "Morning", ""],
//!     vec!["", "Counter", "Gate"],
//!     vec!["Mon", "123456789", "Lan"],
//!     vec!["", "07:00"],
//! ]);
//!
//! let results = search(&grid, "123456789");
//! assert_eq!(results.len(), 1);
//! assert_eq!(
//!     results[0].formatted,
//!     "Rota - 2024-01 - 07:00 - Counter (Morning) - Lan -  -  - "
//! );
//! ```

pub mod address;
pub mod error;
pub mod grid;
pub mod header;
pub mod layout;
pub mod record;
pub mod search;

// Re-exports for convenience
pub use address::CellAddress;
pub use error::{Error, Result};
pub use grid::{CellSource, Grid};
pub use header::resolve_header;
pub use layout::{Offset, SheetLayout};
pub use record::{Components, Field, MatchRecord};
pub use search::{matches, search, GlobalValues, Searcher};
