use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NosPlotError {
    #[error("Missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("Column '{column}' appears more than once in the header")]
    DuplicateColumn { column: String },

    #[error("Study '{label}' appears more than once (row {row})")]
    DuplicateStudy { label: String, row: usize },

    #[error("Column '{column}' must be numeric (row {row}: '{value}')")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Column '{column}' contains invalid star values ({min}-{max} allowed, row {row}: {value})")]
    OutOfRange {
        column: String,
        row: usize,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Theme '{name}' not available. Choose from {}", .available.join(", "))]
    UnknownTheme {
        name: String,
        available: Vec<String>,
    },

    #[error("Unsupported file format: '{extension}'. Use one of .png, .pdf, .svg, .eps")]
    UnsupportedFormat { extension: String },

    #[error("Unsupported input format: '{extension}'. Provide a CSV or spreadsheet file")]
    UnsupportedInput { extension: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode {format} output: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl NosPlotError {
    /// Short category name shown by the CLI error printer.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::MissingColumns { .. } | Self::DuplicateColumn { .. } | Self::DuplicateStudy { .. } => {
                "Schema"
            }
            Self::NonNumeric { .. } | Self::OutOfRange { .. } => "Range",
            Self::UnknownTheme { .. } => "Theme",
            Self::UnsupportedFormat { .. } | Self::UnsupportedInput { .. } => "UnsupportedFormat",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::Io(_) => "IO",
            Self::Csv(_) => "Csv",
            Self::Spreadsheet(_) => "Spreadsheet",
            Self::Encode { .. } | Self::JsonSerialize(_) => "Encode",
        }
    }

    /// Actionable hint for the user, when one exists.
    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::MissingColumns { .. } => Some(
                "Column names must match exactly, e.g. 'Author, Year', 'Total Score', 'Overall RoB'"
                    .to_string(),
            ),
            Self::DuplicateColumn { column } => {
                Some(format!("Remove or rename the second '{column}' column"))
            }
            Self::DuplicateStudy { .. } => {
                Some("Study labels address the chart rows and must be unique".to_string())
            }
            Self::NonNumeric { .. } => {
                Some("Item scores must be whole numbers of stars".to_string())
            }
            Self::OutOfRange { max, .. } => Some(format!(
                "Each item score must lie between 0 and {max} stars"
            )),
            Self::UnknownTheme { available, .. } => {
                Some(format!("Run with one of: {}", available.join(", ")))
            }
            Self::UnsupportedFormat { .. } => {
                Some("Choose an output file ending in .png, .pdf, .svg or .eps".to_string())
            }
            Self::UnsupportedInput { .. } => {
                Some("Pass a .csv, .xlsx, .xlsm, .xls or .ods file".to_string())
            }
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format against the documented keys".to_string())
            }
            Self::FileWrite { .. } => {
                Some("Check the output directory exists and is writable".to_string())
            }
            Self::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check the file path exists".to_string()),
                std::io::ErrorKind::PermissionDenied => {
                    Some("Check the file permissions".to_string())
                }
                _ => None,
            },
            Self::Spreadsheet(_) => {
                Some("Save the workbook again or export the first sheet to CSV".to_string())
            }
            Self::Io(_) | Self::Csv(_) | Self::Encode { .. } | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NosPlotError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
