//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use rota_core::Grid;

/// Reads CSV text into a [`Grid`]
///
/// Every record becomes one row and every field one cell. Records may have
/// different lengths.
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a grid
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Grid> {
        let path = path.as_ref();
        tracing::debug!("Reading CSV from {}", path.display());
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV text already held in memory
    pub fn read_str(text: &str, options: &CsvReadOptions) -> CsvResult<Grid> {
        Self::read(text.as_bytes(), options)
    }

    /// Read CSV from a reader into a grid
    ///
    /// Blank lines are kept as single-cell rows so that row indices match
    /// the sheet. Invalid UTF-8 is replaced rather than rejected.
    pub fn read<R: Read>(mut reader: R, options: &CsvReadOptions) -> CsvResult<Grid> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;
        let input = mark_blank_lines(&input, options.quote);

        let trim = if options.trim_fields {
            csv::Trim::Fields
        } else {
            csv::Trim::None
        };

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .trim(trim)
            .from_reader(input.as_slice());

        let mut rows = Vec::new();
        for result in csv_reader.byte_records() {
            let record = result?;
            rows.push(
                record
                    .iter()
                    .map(|field| String::from_utf8_lossy(field).into_owned())
                    .collect::<Vec<_>>(),
            );
        }

        let grid = Grid::from(rows);
        tracing::debug!(
            "Read {} rows (widest {} cells)",
            grid.rows().len(),
            grid.max_row_len()
        );
        Ok(grid)
    }
}

/// Write an empty quoted field on every blank line outside a quoted field
///
/// The csv parser skips empty lines; `""` makes each one a record with a
/// single empty cell instead.
fn mark_blank_lines(input: &[u8], quote: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut in_quotes = false;
    let mut line_start = true;

    for (i, &byte) in input.iter().enumerate() {
        let line_end = byte == b'\n' || (byte == b'\r' && input.get(i + 1) == Some(&b'\n'));
        if line_start && !in_quotes && line_end {
            out.push(quote);
            out.push(quote);
        }
        if byte == quote {
            in_quotes = !in_quotes;
        }
        line_start = byte == b'\n';
        out.push(byte);
    }

    out
}
