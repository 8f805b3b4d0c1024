//! Error types for rota-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rota-core
///
/// Searching never fails; these are raised only when parsing addresses
/// supplied by a caller (for example from a command line).
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),
}
