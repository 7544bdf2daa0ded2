//! The chart catalogue and output file naming.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Every chart the renderer can draw, in batch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Composite bubble grid plus per-domain stacked bars. The primary chart.
    TrafficLight,
    /// One polygon per study.
    Radar,
    /// One polygon per study, colored by its Overall RoB.
    ThemeRadar,
    Heatmap,
    DotProfile,
    ScoreTable,
    Donut,
    LineOrdered,
    Lollipop,
    Pie,
    StackedArea,
}

impl ChartKind {
    pub const ALL: [Self; 11] = [
        Self::TrafficLight,
        Self::Radar,
        Self::ThemeRadar,
        Self::Heatmap,
        Self::DotProfile,
        Self::ScoreTable,
        Self::Donut,
        Self::LineOrdered,
        Self::Lollipop,
        Self::Pie,
        Self::StackedArea,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TrafficLight => "traffic_light",
            Self::Radar => "radar",
            Self::ThemeRadar => "theme_radar",
            Self::Heatmap => "heatmap",
            Self::DotProfile => "dot_profile",
            Self::ScoreTable => "table",
            Self::Donut => "donut",
            Self::LineOrdered => "line_ordered",
            Self::Lollipop => "lollipop",
            Self::Pie => "pie",
            Self::StackedArea => "stacked_area",
        }
    }

    /// File-name suffix; the primary chart has none.
    #[must_use]
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            Self::TrafficLight => None,
            other => Some(other.name()),
        }
    }

    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::TrafficLight)
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.name()).collect()
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim()).ok_or_else(|| {
            format!(
                "unknown chart '{s}' (expected one of: {})",
                Self::names().join(", ")
            )
        })
    }
}

/// Destination for `kind` next to the primary output: `out.png` becomes `out_radar.png`.
#[must_use]
pub fn chart_path(primary: &Path, kind: ChartKind) -> PathBuf {
    let Some(suffix) = kind.suffix() else {
        return primary.to_path_buf();
    };
    let stem = primary
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match primary.extension() {
        Some(ext) => format!("{stem}_{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{suffix}"),
    };
    primary.with_file_name(file_name)
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
