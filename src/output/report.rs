//! Validation summary produced by `check`.

use std::path::Path;

use serde::Serialize;

use crate::risk::Domain;
use crate::table::{AugmentedTable, TierCounts, TotalMismatch};

/// Tier counts for one domain, or for the Overall RoB column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierSummary {
    pub name: String,
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
}

impl TierSummary {
    fn new(name: &str, counts: TierCounts) -> Self {
        Self {
            name: name.to_string(),
            high: counts.high,
            moderate: counts.moderate,
            low: counts.low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub input: String,
    pub studies: usize,
    pub strict_item_bounds: bool,
    pub domains: Vec<TierSummary>,
    pub overall: TierSummary,
    pub mismatches: Vec<TotalMismatch>,
}

impl CheckReport {
    #[must_use]
    pub fn new(input: &Path, table: &AugmentedTable, strict_item_bounds: bool) -> Self {
        Self {
            input: input.display().to_string(),
            studies: table.len(),
            strict_item_bounds,
            domains: Domain::ALL
                .into_iter()
                .map(|d| TierSummary::new(d.name(), TierCounts::for_domain(table, d)))
                .collect(),
            overall: TierSummary::new("Overall RoB", TierCounts::for_overall(table)),
            mismatches: table.mismatches.clone(),
        }
    }

    #[must_use]
    pub fn has_mismatches(&self) -> bool {
        !self.mismatches.is_empty()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
