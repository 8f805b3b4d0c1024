//! Error types for rota

use thiserror::Error;

use crate::token::TokenError;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the rota facade
#[derive(Debug, Error)]
pub enum Error {
    /// Core error (address parsing)
    #[error(transparent)]
    Core(#[from] rota_core::Error),

    /// Loading the sheet failed
    #[error(transparent)]
    Csv(#[from] rota_csv::CsvError),

    /// Search code rejected
    #[error("Invalid code: {0}")]
    Token(#[from] TokenError),

    /// Layout file could not be parsed
    #[error("Invalid layout: {0}")]
    Layout(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A search was attempted before any sheet was loaded
    #[error("No sheet loaded")]
    NotLoaded,

    /// The source kind needs a cargo feature that is disabled
    #[error("Unsupported source: {0}")]
    UnsupportedSource(String),
}
