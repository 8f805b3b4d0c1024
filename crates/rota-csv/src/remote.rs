//! Fetching published sheets over HTTP

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use crate::reader::CsvReader;
use rota_core::Grid;

/// A Google Sheets tab addressed by spreadsheet id and tab gid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetExport {
    pub sheet_id: String,
    pub gid: String,
}

impl SheetExport {
    pub fn new(sheet_id: impl Into<String>, gid: impl Into<String>) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            gid: gid.into(),
        }
    }

    /// The CSV export URL for this tab
    pub fn csv_url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid={}",
            self.sheet_id, self.gid
        )
    }
}

/// Download CSV text from `url` and parse it into a grid
pub fn fetch_grid(url: &str, options: &CsvReadOptions) -> CsvResult<Grid> {
    tracing::info!("Fetching sheet from {url}");

    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(CsvError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        });
    }

    let text = response.text()?;
    CsvReader::read_str(&text, options)
}
