//! Star-count to risk-of-bias classification.
//!
//! The thresholds are fixed per domain and shared by every chart:
//!
//! | Domain           | High       | Moderate   | Low        |
//! |------------------|------------|------------|------------|
//! | Selection        | stars ≤ 1  | stars == 2 | stars ≥ 3  |
//! | Comparability    | stars == 0 | stars == 1 | stars == 2 |
//! | Outcome/Exposure | stars ≤ 1  | stars == 2 | stars == 3 |
//!
//! Anything else (including an unrecognized domain name) is High.

use std::fmt;

use serde::Serialize;

/// One of the three aggregated NOS judgement categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Selection,
    Comparability,
    OutcomeExposure,
}

impl Domain {
    /// Fixed axis order used by every chart.
    pub const ALL: [Self; 3] = [Self::Selection, Self::Comparability, Self::OutcomeExposure];

    /// Maximum aggregate stars under the NOS convention.
    #[must_use]
    pub const fn max_stars(self) -> u32 {
        match self {
            Self::Selection => 4,
            Self::Comparability => 2,
            Self::OutcomeExposure => 3,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Selection => "Selection",
            Self::Comparability => "Comparability",
            Self::OutcomeExposure => "Outcome/Exposure",
        }
    }

    /// Resolve a display name back to a domain.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Three-level risk-of-bias tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Stacking and legend order for percentage charts: High, Moderate, Low.
    pub const STACK_ORDER: [Self; 3] = [Self::High, Self::Moderate, Self::Low];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Ordinal used by the heatmap scale (High=0, Moderate=1, Low=2).
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::High => 0,
            Self::Moderate => 1,
            Self::Low => 2,
        }
    }

    /// Case-insensitive parse of a study-level judgement such as `"moderate"`.
    #[must_use]
    pub fn parse_label(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an aggregate star count within a domain.
#[must_use]
pub const fn classify(stars: u32, domain: Domain) -> RiskLevel {
    match domain {
        Domain::Selection => match stars {
            0 | 1 => RiskLevel::High,
            2 => RiskLevel::Moderate,
            _ => RiskLevel::Low,
        },
        Domain::Comparability => match stars {
            1 => RiskLevel::Moderate,
            2 => RiskLevel::Low,
            _ => RiskLevel::High,
        },
        Domain::OutcomeExposure => match stars {
            2 => RiskLevel::Moderate,
            3 => RiskLevel::Low,
            _ => RiskLevel::High,
        },
    }
}

/// Classify by domain display name; unrecognized names are High.
#[must_use]
pub fn classify_named(stars: u32, domain: &str) -> RiskLevel {
    Domain::from_name(domain).map_or(RiskLevel::High, |d| classify(stars, d))
}

#[cfg(test)]
#[path = "risk_tests.rs"]
mod tests;
