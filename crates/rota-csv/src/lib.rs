//! # rota-csv
//!
//! Grid source for rota: CSV text, files and published sheet exports into a
//! [`rota_core::Grid`], plus a CSV writer for search results.

mod error;
mod options;
mod reader;
#[cfg(feature = "remote")]
pub mod remote;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
