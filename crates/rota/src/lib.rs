//! # rota
//!
//! Look up a staff code in a rota sheet and get back one readable schedule
//! line per occurrence.
//!
//! The sheet is loaded from a CSV file or a published CSV export into an
//! owned [`Snapshot`]; searching reconstructs each line from the cells around
//! the match, two (possibly merged) header rows and the sheet title and
//! period.
//!
//! ## Example
//!
//! ```rust
//! use rota::prelude::*;
//!
//! let csv = ",Station rota\n,\n,2024-01\n,\n,Morning,\n,Counter,Gate\nMon,123456789,Lan\n,07:00,\n";
//! let grid = CsvReader::read_str(csv, &CsvReadOptions::default()).unwrap();
//!
//! let code = validate_code("123456789").unwrap().unwrap();
//! let results = search(&grid, code);
//! assert_eq!(results.len(), 1);
//! assert_eq!(
//!     results[0].formatted,
//!     "Station rota - 2024-01 - 07:00 - Counter (Morning) - Lan -  -  - "
//! );
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod snapshot;
pub mod token;

pub use config::{layout_to_json, load_layout, parse_layout};
pub use error::{Error, Result};
pub use snapshot::{GridSource, Snapshot};
pub use token::{validate_code, TokenError, CODE_LENGTH};

// Re-export core types
pub use rota_core::{
    matches, resolve_header, search, CellAddress, CellSource, Components, Field, GlobalValues,
    Grid, MatchRecord, Offset, Searcher, SheetLayout,
};

// Re-export I/O types
pub use rota_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter, LineTerminator,
};

#[cfg(feature = "remote")]
pub use rota_csv::remote::{fetch_grid, SheetExport};
