//! Reading schedule sheets from disk

use pretty_assertions::assert_eq;
use rota_core::{search, CellSource};
use rota_csv::{CsvError, CsvReadOptions, CsvReader};
use std::io::Write;

const ROTA_CSV: &str = "\
,Station rota
,
,2024-01
,
,Morning,,Evening,
,Counter,Gate,Counter,Gate
Mon,123456789,Lan,987654321,Minh
,07:00,,15:00,
,11:00,break,19:00,break
,OT,,,
";

#[test]
fn test_reads_file_and_searches() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ROTA_CSV.as_bytes()).unwrap();

    let grid = CsvReader::read_file(file.path(), &CsvReadOptions::default()).unwrap();
    assert_eq!(grid.row_count(), 10);
    assert_eq!(grid.row_len(4), 5);

    let results = search(&grid, "987654321");
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].formatted,
        "Station rota - 2024-01 - 15:00 - Counter (Evening) - Minh - 19:00 - break - "
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CsvReader::read_file(dir.path().join("nope.csv"), &CsvReadOptions::default())
        .unwrap_err();
    assert!(matches!(err, CsvError::Io(_)));
}
