//! Assessment table loading, validation, and domain aggregation.

mod aggregate;
mod columns;
mod distribution;
mod model;
mod reader;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use aggregate::{ItemBounds, aggregate};
pub use columns::{Column, ColumnMap};
pub use distribution::TierCounts;
pub use model::{AggregatedRow, AugmentedTable, StudyRow, TotalMismatch};
pub use reader::{SPREADSHEET_EXTENSIONS, read_csv, read_table, read_workbook};

/// Untyped, row-oriented table exactly as read from the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    #[must_use]
    pub fn new<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}
