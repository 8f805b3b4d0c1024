//! CSV writer for search results

use std::io::Write;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use rota_core::{Field, MatchRecord};

/// Writes match records as CSV, one row per match
pub struct CsvWriter;

impl CsvWriter {
    /// Header row: position, A..J, then the formatted line
    pub fn header() -> Vec<String> {
        let mut header = vec!["cell".to_string(), "row".to_string(), "col".to_string()];
        header.extend(Field::ALL.iter().map(Field::to_string));
        header.push("formatted".to_string());
        header
    }

    /// Write matches to a writer
    pub fn write_matches<W: Write>(
        writer: W,
        matches: &[MatchRecord],
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .from_writer(writer);

        if options.write_header {
            csv_writer.write_record(Self::header())?;
        }

        for record in matches {
            let mut row = vec![
                record.coordinates.to_string(),
                record.coordinates.row.to_string(),
                record.coordinates.col.to_string(),
            ];
            row.extend(record.components.iter().map(|(_, value)| value.to_string()));
            row.push(record.formatted.clone());
            csv_writer.write_record(&row)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CsvReadOptions;
    use crate::reader::CsvReader;
    use pretty_assertions::assert_eq;
    use rota_core::{search, Grid};

    #[test]
    fn test_write_matches() {
        let grid = Grid::from_rows(vec![vec!["", "Title, with comma"], vec!["111", "x"]]);
        let matches = search(&grid, "111");

        let mut out = Vec::new();
        CsvWriter::write_matches(&mut out, &matches, &CsvWriteOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let written = CsvReader::read_str(&text, &CsvReadOptions::default()).unwrap();
        assert_eq!(written.rows().len(), 2);
        assert_eq!(written.rows()[0], CsvWriter::header());
        assert_eq!(written.rows()[1][0], "A2");
        assert_eq!(written.rows()[1][3], "111");
        assert_eq!(written.rows()[1][7], "x");
        assert_eq!(written.rows()[1][11], "Title, with comma");
        assert_eq!(written.rows()[1][13], matches[0].formatted);
    }

    #[test]
    fn test_no_header() {
        let options = CsvWriteOptions {
            write_header: false,
            ..Default::default()
        };
        let mut out = Vec::new();
        CsvWriter::write_matches(&mut out, &[], &options).unwrap();
        assert!(out.is_empty());
    }
}
