//! Typed study records and the augmented table produced by aggregation.

use serde::Serialize;

use crate::risk::{Domain, RiskLevel, classify};

/// One assessed study as read from the input table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyRow {
    /// Study identifier (e.g. "Smith, 2020"); unique within a table.
    pub label: String,
    pub representativeness: u32,
    pub non_exposed_selection: u32,
    pub exposure_ascertainment: u32,
    pub outcome_absent_at_start: u32,
    pub comparability_age_gender: u32,
    pub comparability_other: u32,
    pub outcome_assessment: u32,
    pub follow_up_length: u32,
    pub follow_up_adequacy: u32,
    /// Total as declared by the assessor, not recomputed.
    pub total_score: i64,
    /// Study-level judgement, kept verbatim.
    pub overall_rob: String,
}

impl StudyRow {
    /// Build a row from item scores in [`Column::ITEMS`](super::Column::ITEMS) order.
    #[must_use]
    pub fn from_items(
        label: impl Into<String>,
        items: [u32; 9],
        total_score: i64,
        overall_rob: impl Into<String>,
    ) -> Self {
        let [
            representativeness,
            non_exposed_selection,
            exposure_ascertainment,
            outcome_absent_at_start,
            comparability_age_gender,
            comparability_other,
            outcome_assessment,
            follow_up_length,
            follow_up_adequacy,
        ] = items;

        Self {
            label: label.into(),
            representativeness,
            non_exposed_selection,
            exposure_ascertainment,
            outcome_absent_at_start,
            comparability_age_gender,
            comparability_other,
            outcome_assessment,
            follow_up_length,
            follow_up_adequacy,
            total_score,
            overall_rob: overall_rob.into(),
        }
    }

    #[must_use]
    pub const fn selection(&self) -> u32 {
        self.representativeness
            + self.non_exposed_selection
            + self.exposure_ascertainment
            + self.outcome_absent_at_start
    }

    #[must_use]
    pub const fn comparability(&self) -> u32 {
        self.comparability_age_gender + self.comparability_other
    }

    #[must_use]
    pub const fn outcome_exposure(&self) -> u32 {
        self.outcome_assessment + self.follow_up_length + self.follow_up_adequacy
    }

    /// The study-level judgement, if it names a known tier.
    #[must_use]
    pub fn overall_risk(&self) -> Option<RiskLevel> {
        RiskLevel::parse_label(&self.overall_rob)
    }
}

/// A study with its three domain aggregates and recomputed total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedRow {
    pub study: StudyRow,
    pub selection: u32,
    pub comparability: u32,
    pub outcome_exposure: u32,
    pub computed_total: u32,
}

impl AggregatedRow {
    #[must_use]
    pub fn from_study(study: StudyRow) -> Self {
        let selection = study.selection();
        let comparability = study.comparability();
        let outcome_exposure = study.outcome_exposure();
        Self {
            study,
            selection,
            comparability,
            outcome_exposure,
            computed_total: selection + comparability + outcome_exposure,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.study.label
    }

    #[must_use]
    pub const fn score(&self, domain: Domain) -> u32 {
        match domain {
            Domain::Selection => self.selection,
            Domain::Comparability => self.comparability,
            Domain::OutcomeExposure => self.outcome_exposure,
        }
    }

    /// Score divided by the domain maximum.
    #[must_use]
    pub fn normalized(&self, domain: Domain) -> f64 {
        f64::from(self.score(domain)) / f64::from(domain.max_stars())
    }

    #[must_use]
    pub const fn risk(&self, domain: Domain) -> RiskLevel {
        classify(self.score(domain), domain)
    }

    #[must_use]
    pub fn total_matches(&self) -> bool {
        i64::from(self.computed_total) == self.study.total_score
    }
}

/// Declared and recomputed totals that disagree for one study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalMismatch {
    pub label: String,
    pub declared: i64,
    pub computed: u32,
}

/// Validated studies plus the non-fatal total mismatch diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AugmentedTable {
    pub rows: Vec<AggregatedRow>,
    pub mismatches: Vec<TotalMismatch>,
}

impl AugmentedTable {
    /// Aggregate typed rows, collecting a mismatch for every disagreeing total.
    #[must_use]
    pub fn from_studies(studies: Vec<StudyRow>) -> Self {
        let rows: Vec<AggregatedRow> = studies.into_iter().map(AggregatedRow::from_study).collect();
        let mismatches = rows
            .iter()
            .filter(|row| !row.total_matches())
            .map(|row| TotalMismatch {
                label: row.study.label.clone(),
                declared: row.study.total_score,
                computed: row.computed_total,
            })
            .collect();
        Self { rows, mismatches }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AggregatedRow> {
        self.rows.iter()
    }

    /// Rows ordered ascending by declared total; ties keep input order.
    #[must_use]
    pub fn sorted_by_total(&self) -> Vec<&AggregatedRow> {
        let mut rows: Vec<&AggregatedRow> = self.rows.iter().collect();
        rows.sort_by_key(|row| row.study.total_score);
        rows
    }

    /// Rows ordered descending by the Overall RoB text; ties keep input order.
    #[must_use]
    pub fn sorted_by_overall_desc(&self) -> Vec<&AggregatedRow> {
        let mut rows: Vec<&AggregatedRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| b.study.overall_rob.cmp(&a.study.overall_rob));
        rows
    }
}

impl<'a> IntoIterator for &'a AugmentedTable {
    type Item = &'a AggregatedRow;
    type IntoIter = std::slice::Iter<'a, AggregatedRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
