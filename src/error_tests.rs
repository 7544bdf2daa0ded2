use std::path::PathBuf;

use super::*;

#[test]
fn error_display_missing_columns_names_each_column() {
    let err = NosPlotError::MissingColumns {
        columns: vec!["Total Score".to_string(), "Overall RoB".to_string()],
    };
    assert_eq!(
        err.to_string(),
        "Missing required columns: Total Score, Overall RoB"
    );
}

#[test]
fn error_display_out_of_range() {
    let err = NosPlotError::OutOfRange {
        column: "Representativeness".to_string(),
        row: 3,
        value: 7,
        min: 0,
        max: 5,
    };
    let message = err.to_string();
    assert!(message.contains("Representativeness"));
    assert!(message.contains("0-5 allowed"));
    assert!(message.contains("row 3"));
}

#[test]
fn error_display_unknown_theme_lists_choices() {
    let err = NosPlotError::UnknownTheme {
        name: "neon".to_string(),
        available: vec!["traffic_light".to_string(), "gray".to_string()],
    };
    assert_eq!(
        err.to_string(),
        "Theme 'neon' not available. Choose from traffic_light, gray"
    );
}

#[test]
fn error_display_unsupported_format() {
    let err = NosPlotError::UnsupportedFormat {
        extension: ".tiff".to_string(),
    };
    assert!(err.to_string().contains(".tiff"));
}

#[test]
fn error_display_file_read() {
    let err = NosPlotError::FileRead {
        path: PathBuf::from("studies.csv"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("studies.csv"));
}

#[test]
fn error_type_groups_variants_by_kind() {
    assert_eq!(
        NosPlotError::MissingColumns { columns: vec![] }.error_type(),
        "Schema"
    );
    assert_eq!(
        NosPlotError::DuplicateColumn {
            column: "Total Score".to_string()
        }
        .error_type(),
        "Schema"
    );
    assert_eq!(
        NosPlotError::NonNumeric {
            column: "Representativeness".to_string(),
            row: 1,
            value: "x".to_string(),
        }
        .error_type(),
        "Range"
    );
    assert_eq!(
        NosPlotError::UnknownTheme {
            name: "neon".to_string(),
            available: vec![],
        }
        .error_type(),
        "Theme"
    );
    assert_eq!(
        NosPlotError::UnsupportedFormat {
            extension: ".tiff".to_string()
        }
        .error_type(),
        "UnsupportedFormat"
    );
    assert_eq!(
        NosPlotError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
    assert_eq!(
        NosPlotError::Spreadsheet(calamine::Error::Msg("bad workbook")).error_type(),
        "Spreadsheet"
    );
}

#[test]
fn suggestion_unknown_theme_lists_choices() {
    let err = NosPlotError::UnknownTheme {
        name: "neon".to_string(),
        available: vec!["traffic_light".to_string(), "gray".to_string()],
    };
    let suggestion = err.suggestion().unwrap();
    assert!(suggestion.contains("traffic_light"));
    assert!(suggestion.contains("gray"));
}

#[test]
fn suggestion_file_read_not_found() {
    let err = NosPlotError::FileRead {
        path: PathBuf::from("missing.csv"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    let suggestion = err.suggestion().unwrap();
    assert!(suggestion.contains("file path exists"));
}

#[test]
fn suggestion_file_read_other_error_has_none() {
    let err = NosPlotError::FileRead {
        path: PathBuf::from("unknown.csv"),
        source: std::io::Error::other("unknown error"),
    };
    assert!(err.suggestion().is_none());
}

#[test]
fn suggestion_out_of_range_mentions_bound() {
    let err = NosPlotError::OutOfRange {
        column: "Comparability (Other)".to_string(),
        row: 2,
        value: 2,
        min: 0,
        max: 1,
    };
    assert!(err.suggestion().unwrap().contains("0 and 1"));
}

#[test]
fn file_write_is_io_with_hint() {
    let err = NosPlotError::FileWrite {
        path: PathBuf::from("/missing/out.png"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert_eq!(err.error_type(), "IO");
    assert!(err.to_string().contains("/missing/out.png"));
    assert!(err.suggestion().unwrap().contains("writable"));
}
