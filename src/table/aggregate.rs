//! Validation and aggregation of a raw table into typed, scored rows.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{NosPlotError, Result};

use super::columns::{Column, ColumnMap};
use super::model::{AugmentedTable, StudyRow};
use super::RawTable;

/// Permitted range for each item score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemBounds {
    /// 0-5 for every item, the historical global guard.
    #[default]
    Loose,
    /// 0-1 for every item, the per-item NOS maximum.
    Nos,
}

impl ItemBounds {
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Nos } else { Self::Loose }
    }

    #[must_use]
    pub const fn max(self) -> i64 {
        match self {
            Self::Loose => 5,
            Self::Nos => 1,
        }
    }
}

/// Validate a raw table and compute domain aggregates for every row.
///
/// Fails on missing or duplicated required columns, non-integral or
/// out-of-range item scores, a non-integral `Total Score`, or duplicate
/// study labels. Total mismatches never fail: they are returned on the
/// table and logged.
pub fn aggregate(raw: &RawTable, bounds: ItemBounds) -> Result<AugmentedTable> {
    let map = ColumnMap::from_headers(&raw.headers)?;
    debug!(rows = raw.rows.len(), "validating assessment table");

    let mut items = vec![[0_u32; 9]; raw.rows.len()];
    for (slot, column) in Column::ITEMS.into_iter().enumerate() {
        let values = parse_column(raw, &map, column)?;
        check_bounds(&values, column, bounds)?;
        for (row_items, value) in items.iter_mut().zip(values) {
            // Bounds already checked, so the value fits.
            row_items[slot] = u32::try_from(value).unwrap_or_default();
        }
    }

    let totals = parse_column(raw, &map, Column::TotalScore)?;

    let mut seen = HashSet::new();
    let mut studies = Vec::with_capacity(raw.rows.len());
    for (index, ((row, row_items), total)) in raw.rows.iter().zip(items).zip(totals).enumerate() {
        let label = map.cell(row, Column::Study);
        if !seen.insert(label) {
            return Err(NosPlotError::DuplicateStudy {
                label: label.to_string(),
                row: index + 1,
            });
        }
        studies.push(StudyRow::from_items(
            label,
            row_items,
            total,
            map.cell(row, Column::OverallRob),
        ));
    }

    let table = AugmentedTable::from_studies(studies);
    for mismatch in &table.mismatches {
        warn!(
            study = %mismatch.label,
            declared = mismatch.declared,
            computed = mismatch.computed,
            "total score mismatch"
        );
    }
    debug!(
        rows = table.len(),
        mismatches = table.mismatches.len(),
        "aggregated assessment table"
    );

    Ok(table)
}

fn parse_column(raw: &RawTable, map: &ColumnMap, column: Column) -> Result<Vec<i64>> {
    raw.rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let text = map.cell(row, column);
            parse_integer(text).ok_or_else(|| NosPlotError::NonNumeric {
                column: column.header().to_string(),
                row: index + 1,
                value: text.to_string(),
            })
        })
        .collect()
}

fn check_bounds(values: &[i64], column: Column, bounds: ItemBounds) -> Result<()> {
    let max = bounds.max();
    match values.iter().position(|v| !(0..=max).contains(v)) {
        Some(index) => Err(NosPlotError::OutOfRange {
            column: column.header().to_string(),
            row: index + 1,
            value: values[index],
            min: 0,
            max,
        }),
        None => Ok(()),
    }
}

/// Parse an integer, accepting integral decimal text such as `"2.0"`.
#[allow(clippy::cast_possible_truncation)] // Guarded by the fract/range check
fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    let value = text.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        Some(value as i64)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
