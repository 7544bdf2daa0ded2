//! CSV and spreadsheet input readers.

use std::fs::{self, File};
use std::io::{Cursor, Read};
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use tracing::debug;

use crate::error::{NosPlotError, Result};

use super::RawTable;

/// Workbook extensions read from their first sheet.
pub const SPREADSHEET_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

/// Read an assessment table, dispatching on the file extension.
///
/// `.csv` is parsed as CSV; workbooks are read from their first sheet.
///
/// # Errors
/// Returns `UnsupportedInput` for other extensions, `FileRead` when the file
/// cannot be opened, and `Csv` or `Spreadsheet` for malformed content.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let table = match extension.as_str() {
        "csv" => {
            let file = File::open(path).map_err(|source| NosPlotError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            read_csv(file)?
        }
        ext if SPREADSHEET_EXTENSIONS.contains(&ext) => {
            let bytes = fs::read(path).map_err(|source| NosPlotError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            read_workbook(bytes)?
        }
        _ => {
            return Err(NosPlotError::UnsupportedInput {
                extension: format!(".{extension}"),
            });
        }
    };
    debug!(path = %path.display(), format = %extension, rows = table.rows.len(), "read input table");
    Ok(table)
}

/// Parse CSV with a header row. Field whitespace is trimmed; header text is not.
///
/// # Errors
/// Returns `Csv` on malformed records.
pub fn read_csv<R: Read>(reader: R) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Fields)
        .from_reader(reader);

    let headers = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable { headers, rows })
}

/// Parse an in-memory workbook (xlsx, xls or ods, detected from content).
///
/// The first sheet's first row is the header; fully blank rows are skipped.
/// A workbook without sheets yields an empty table.
///
/// # Errors
/// Returns `Spreadsheet` when the bytes are not a readable workbook.
pub fn read_workbook(bytes: Vec<u8>) -> Result<RawTable> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        return Ok(RawTable::default());
    };
    let range = range?;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .unwrap_or_default();
    let rows = rows
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    Ok(RawTable { headers, rows })
}

/// Cell text as the CSV reader would see it: trimmed, and integral floats
/// without a fractional part.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.trim().to_string(),
        Data::Float(value) if value.is_finite() && value.fract().abs() < f64::EPSILON => {
            format!("{value:.0}")
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
