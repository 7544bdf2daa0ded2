use std::fs;

use tempfile::TempDir;

use super::*;
use crate::table::test_fixtures::sample_csv;

#[test]
fn reads_headers_and_rows() {
    let table = read_csv(sample_csv().as_bytes()).unwrap();
    assert_eq!(table.headers[0], "Author, Year");
    assert_eq!(table.rows.len(), 4);
    assert_eq!(table.rows[0][0], "Smith, 2020");
}

#[test]
fn trims_fields_but_not_headers() {
    let csv = "Author, Year,Total Score\n  Smith, 2020 ,  9 \n";
    let table = read_csv(csv.as_bytes()).unwrap();
    // Unquoted comma splits the header; only field text is trimmed.
    assert_eq!(table.headers, vec!["Author", " Year", "Total Score"]);
    assert_eq!(table.rows[0], vec!["Smith", "2020", "9"]);
}

#[test]
fn ragged_rows_are_csv_errors() {
    let csv = "a,b,c\n1,2\n";
    assert!(matches!(read_csv(csv.as_bytes()), Err(NosPlotError::Csv(_))));
}

#[test]
fn read_table_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("studies.csv");
    fs::write(&path, sample_csv()).unwrap();
    let table = read_table(&path).unwrap();
    assert_eq!(table.rows.len(), 4);
}

#[test]
fn extension_match_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("studies.CSV");
    fs::write(&path, sample_csv()).unwrap();
    assert!(read_table(&path).is_ok());
}

#[test]
fn unknown_extension_is_unsupported() {
    let err = read_table(Path::new("studies.txt")).unwrap_err();
    assert!(matches!(err, NosPlotError::UnsupportedInput { ref extension } if extension == ".txt"));
}

#[test]
fn spreadsheet_extensions_are_dispatched_to_workbook_reader() {
    let dir = TempDir::new().unwrap();
    for ext in SPREADSHEET_EXTENSIONS {
        let err = read_table(&dir.path().join(format!("absent.{ext}"))).unwrap_err();
        assert!(matches!(err, NosPlotError::FileRead { .. }), "{ext}: {err}");
    }
    let err = read_table(&dir.path().join("absent.XLSX")).unwrap_err();
    assert!(matches!(err, NosPlotError::FileRead { .. }));
}

#[test]
fn corrupt_workbook_is_spreadsheet_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("studies.xlsx");
    fs::write(&path, sample_csv()).unwrap();
    assert!(matches!(read_table(&path), Err(NosPlotError::Spreadsheet(_))));
    assert!(matches!(read_workbook(Vec::new()), Err(NosPlotError::Spreadsheet(_))));
}

#[test]
fn integral_float_cells_drop_fraction() {
    assert_eq!(cell_text(&Data::Float(2.0)), "2");
    assert_eq!(cell_text(&Data::Float(0.0)), "0");
    assert_eq!(cell_text(&Data::Float(1.5)), "1.5");
    assert_eq!(cell_text(&Data::Int(3)), "3");
}

#[test]
fn text_cells_are_trimmed_and_blanks_empty() {
    assert_eq!(cell_text(&Data::String("  Smith, 2020 ".to_string())), "Smith, 2020");
    assert_eq!(cell_text(&Data::Empty), "");
    assert_eq!(cell_text(&Data::Bool(true)), "true");
}

#[test]
fn missing_file_is_file_read_error() {
    let dir = TempDir::new().unwrap();
    let err = read_table(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, NosPlotError::FileRead { .. }));
}
