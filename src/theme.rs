//! Named color palettes for the three risk tiers.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::{NosPlotError, Result};
use crate::render::Color;
use crate::risk::{Domain, RiskLevel, classify};

/// Color used for judgements outside {Low, Moderate, High}.
pub const FALLBACK_COLOR: Color = Color::rgb(0x80, 0x80, 0x80);

/// Name accepted from older configurations for [`Theme::TrafficLight`].
const DEPRECATED_DEFAULT: &str = "default";

/// One of the built-in palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    TrafficLight,
    Gray,
}

impl Theme {
    pub const ALL: [Self; 2] = [Self::TrafficLight, Self::Gray];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TrafficLight => "traffic_light",
            Self::Gray => "gray",
        }
    }

    #[must_use]
    pub fn available() -> Vec<String> {
        Self::ALL.iter().map(|t| t.name().to_string()).collect()
    }

    /// Whether `name` resolves to a theme, counting the deprecated alias.
    #[must_use]
    pub fn is_known(name: &str) -> bool {
        name == DEPRECATED_DEFAULT || Self::ALL.iter().any(|t| t.name() == name)
    }

    /// Look up a theme by name.
    ///
    /// # Errors
    /// Returns `UnknownTheme` for any name outside the built-in set.
    pub fn from_name(name: &str) -> Result<Self> {
        if let Some(theme) = Self::ALL.into_iter().find(|t| t.name() == name) {
            return Ok(theme);
        }
        if name == DEPRECATED_DEFAULT {
            warn!(
                theme = name,
                replacement = Self::TrafficLight.name(),
                "deprecated theme name"
            );
            return Ok(Self::TrafficLight);
        }
        Err(NosPlotError::UnknownTheme {
            name: name.to_string(),
            available: Self::available(),
        })
    }

    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::TrafficLight => Palette {
                low: Color::rgb(0x06, 0x92, 0x3E),
                moderate: Color::rgb(0xFF, 0xD9, 0x3D),
                high: Color::rgb(0xDC, 0x25, 0x25),
            },
            Self::Gray => Palette {
                low: Color::rgb(0x7F, 0x7F, 0x7F),
                moderate: Color::rgb(0xB0, 0xB0, 0xB0),
                high: Color::rgb(0x3B, 0x3B, 0x3B),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = NosPlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Tier-to-color mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub low: Color,
    pub moderate: Color,
    pub high: Color,
}

impl Palette {
    #[must_use]
    pub const fn color(&self, level: RiskLevel) -> Color {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Moderate => self.moderate,
            RiskLevel::High => self.high,
        }
    }

    /// Color of a domain score after classification.
    #[must_use]
    pub const fn domain_color(&self, stars: u32, domain: Domain) -> Color {
        self.color(classify(stars, domain))
    }

    /// Color of a free-text judgement; unrecognized labels get [`FALLBACK_COLOR`].
    #[must_use]
    pub fn label_color(&self, label: &str) -> Color {
        RiskLevel::parse_label(label).map_or(FALLBACK_COLOR, |level| self.color(level))
    }

    /// Color for a heatmap ordinal (High=0, Moderate=1, Low=2).
    #[must_use]
    pub const fn ordinal_color(&self, ordinal: usize) -> Color {
        match ordinal {
            0 => self.high,
            1 => self.moderate,
            2 => self.low,
            _ => FALLBACK_COLOR,
        }
    }
}

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
