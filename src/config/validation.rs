//! Semantic checks on a parsed configuration.

use crate::error::{NosPlotError, Result};
use crate::theme::Theme;

use super::model::{Config, RenderConfig};

const DPI_RANGE: std::ops::RangeInclusive<u32> = 36..=1200;
const FONT_SIZE_RANGE: std::ops::RangeInclusive<f64> = 4.0..=72.0;

/// Validates ranges and names a TOML schema cannot express.
///
/// # Errors
/// Returns `Config` when `render.dpi`, `render.line_width` or
/// `render.base_font_size` is out of range, or `theme` names no known theme.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_render_section(&config.render)?;

    if let Some(name) = &config.theme
        && !Theme::is_known(name)
    {
        return Err(NosPlotError::Config(format!(
            "theme '{name}' is not available. Choose from {}",
            Theme::available().join(", ")
        )));
    }
    Ok(())
}

fn validate_render_section(render: &RenderConfig) -> Result<()> {
    if !DPI_RANGE.contains(&render.dpi) {
        return Err(NosPlotError::Config(format!(
            "render.dpi must be between {} and {}, got {}",
            DPI_RANGE.start(),
            DPI_RANGE.end(),
            render.dpi
        )));
    }

    if !(render.line_width.is_finite() && render.line_width > 0.0) {
        return Err(NosPlotError::Config(format!(
            "render.line_width must be positive, got {}",
            render.line_width
        )));
    }

    if !FONT_SIZE_RANGE.contains(&render.base_font_size) {
        return Err(NosPlotError::Config(format!(
            "render.base_font_size must be between {} and {}, got {}",
            FONT_SIZE_RANGE.start(),
            FONT_SIZE_RANGE.end(),
            render.base_font_size
        )));
    }

    if render.font_family.trim().is_empty() {
        return Err(NosPlotError::Config(
            "render.font_family must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
