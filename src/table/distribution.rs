//! Per-tier study counts and percentages.

use crate::risk::{Domain, RiskLevel};

use super::AugmentedTable;

/// Number of studies falling in each risk tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
    /// Denominator for percentages; may exceed the tier sum when some
    /// labels are unrecognized.
    pub total: usize,
}

impl TierCounts {
    /// Tally each study's tier within one domain.
    #[must_use]
    pub fn for_domain(table: &AugmentedTable, domain: Domain) -> Self {
        let mut counts = Self {
            total: table.len(),
            ..Self::default()
        };
        for row in table {
            counts.add(row.risk(domain));
        }
        counts
    }

    /// Tally the study-level Overall RoB judgements.
    #[must_use]
    pub fn for_overall(table: &AugmentedTable) -> Self {
        let mut counts = Self {
            total: table.len(),
            ..Self::default()
        };
        for level in table.iter().filter_map(|row| row.study.overall_risk()) {
            counts.add(level);
        }
        counts
    }

    const fn add(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::High => self.high += 1,
            RiskLevel::Moderate => self.moderate += 1,
            RiskLevel::Low => self.low += 1,
        }
    }

    #[must_use]
    pub const fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Moderate => self.moderate,
            RiskLevel::Low => self.low,
        }
    }

    /// Share of studies in a tier, 0-100. Missing tiers and empty tables give 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Study counts are small
    pub fn percent(&self, level: RiskLevel) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(level) as f64 / self.total as f64 * 100.0
    }

    /// Percentages in stacking order (High, Moderate, Low).
    #[must_use]
    pub fn stacked_percentages(&self) -> [(RiskLevel, f64); 3] {
        RiskLevel::STACK_ORDER.map(|level| (level, self.percent(level)))
    }
}

#[cfg(test)]
#[path = "distribution_tests.rs"]
mod tests;
