//! Required input columns and the header-to-index mapping.

use crate::error::{NosPlotError, Result};
use crate::risk::Domain;

/// A required column of the assessment table, with its exact header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Study,
    Representativeness,
    NonExposedSelection,
    ExposureAscertainment,
    OutcomeAbsentAtStart,
    ComparabilityAgeGender,
    ComparabilityOther,
    OutcomeAssessment,
    FollowUpLength,
    FollowUpAdequacy,
    TotalScore,
    OverallRob,
}

impl Column {
    /// Every required column in canonical order.
    pub const ALL: [Self; 12] = [
        Self::Study,
        Self::Representativeness,
        Self::NonExposedSelection,
        Self::ExposureAscertainment,
        Self::OutcomeAbsentAtStart,
        Self::ComparabilityAgeGender,
        Self::ComparabilityOther,
        Self::OutcomeAssessment,
        Self::FollowUpLength,
        Self::FollowUpAdequacy,
        Self::TotalScore,
        Self::OverallRob,
    ];

    /// The nine star-rated item columns.
    pub const ITEMS: [Self; 9] = [
        Self::Representativeness,
        Self::NonExposedSelection,
        Self::ExposureAscertainment,
        Self::OutcomeAbsentAtStart,
        Self::ComparabilityAgeGender,
        Self::ComparabilityOther,
        Self::OutcomeAssessment,
        Self::FollowUpLength,
        Self::FollowUpAdequacy,
    ];

    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Study => "Author, Year",
            Self::Representativeness => "Representativeness",
            Self::NonExposedSelection => "Non-exposed Selection",
            Self::ExposureAscertainment => "Exposure Ascertainment",
            Self::OutcomeAbsentAtStart => "Outcome Absent at Start",
            Self::ComparabilityAgeGender => "Comparability (Age/Gender)",
            Self::ComparabilityOther => "Comparability (Other)",
            Self::OutcomeAssessment => "Outcome Assessment",
            Self::FollowUpLength => "Follow-up Length",
            Self::FollowUpAdequacy => "Follow-up Adequacy",
            Self::TotalScore => "Total Score",
            Self::OverallRob => "Overall RoB",
        }
    }

    /// The domain an item column contributes to.
    #[must_use]
    pub const fn domain(self) -> Option<Domain> {
        match self {
            Self::Representativeness
            | Self::NonExposedSelection
            | Self::ExposureAscertainment
            | Self::OutcomeAbsentAtStart => Some(Domain::Selection),
            Self::ComparabilityAgeGender | Self::ComparabilityOther => Some(Domain::Comparability),
            Self::OutcomeAssessment | Self::FollowUpLength | Self::FollowUpAdequacy => {
                Some(Domain::OutcomeExposure)
            }
            Self::Study | Self::TotalScore | Self::OverallRob => None,
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Position of every required column within a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    indices: [usize; 12],
}

impl ColumnMap {
    /// Resolve all required columns against a header row.
    ///
    /// Extra columns are ignored. Absent columns are reported together, in
    /// canonical order; a required header present twice is rejected.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let mut indices = [usize::MAX; 12];
        let mut missing = Vec::new();

        for column in Column::ALL {
            let mut positions = headers
                .iter()
                .enumerate()
                .filter(|(_, h)| AsRef::<str>::as_ref(h) == column.header())
                .map(|(i, _)| i);

            match (positions.next(), positions.next()) {
                (None, _) => missing.push(column.header().to_string()),
                (Some(_), Some(_)) => {
                    return Err(NosPlotError::DuplicateColumn {
                        column: column.header().to_string(),
                    });
                }
                (Some(index), None) => indices[column.slot()] = index,
            }
        }

        if !missing.is_empty() {
            return Err(NosPlotError::MissingColumns { columns: missing });
        }

        Ok(Self { indices })
    }

    #[must_use]
    pub const fn index(&self, column: Column) -> usize {
        self.indices[column.slot()]
    }

    /// Cell text for a column, empty when the row is short.
    #[must_use]
    pub fn cell<'a>(&self, row: &'a [String], column: Column) -> &'a str {
        row.get(self.index(column)).map_or("", String::as_str)
    }
}

#[cfg(test)]
#[path = "columns_tests.rs"]
mod tests;
