//! Prelude module - common imports for rota users
//!
//! ```rust
//! use rota::prelude::*;
//! ```

pub use crate::{
    // Core types
    search,
    CellAddress,
    CellSource,
    Components,
    Field,
    Grid,
    MatchRecord,
    Searcher,
    SheetLayout,

    // I/O types
    CsvReadOptions,
    CsvReader,
    CsvWriter,

    // Snapshot and validation
    validate_code,
    GridSource,
    Snapshot,

    // Error types
    Error,
    Result,
};
