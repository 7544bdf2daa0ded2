use serde::{Deserialize, Serialize};

/// Default output resolution for raster charts.
pub const DEFAULT_DPI: u32 = 300;
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";
pub const DEFAULT_LINE_WIDTH: f64 = 1.5;
pub const DEFAULT_BASE_FONT_SIZE: f64 = 11.0;

/// Contents of a `.nos-tlplot.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Theme used when the command line names none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    pub render: RenderConfig,

    pub validation: ValidationConfig,
}

/// Styling applied to every chart. Passed explicitly into each render call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Raster resolution; also recorded in the PNG `pHYs` chunk.
    pub dpi: u32,

    /// CSS font-family list written into SVG output.
    pub font_family: String,

    /// Stroke width in points for series lines and outlines.
    pub line_width: f64,

    /// Body text size in points. Titles and tick labels scale from it.
    pub base_font_size: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
            base_font_size: DEFAULT_BASE_FONT_SIZE,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn title_size(&self) -> f64 {
        self.base_font_size * 1.35
    }

    #[must_use]
    pub fn small_size(&self) -> f64 {
        self.base_font_size * 0.85
    }
}

/// Table validation switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Cap each item at one star instead of the loose 0-5 guard.
    pub strict_item_bounds: bool,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
