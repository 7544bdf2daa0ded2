//! Canvas encoders, one per supported output extension.

mod eps;
mod pdf;
mod png;
mod svg;

use std::fmt;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::RenderConfig;
use crate::error::{NosPlotError, Result};

use super::canvas::Canvas;
use super::format::non_latin1_count;

pub use svg::to_svg;

/// Output format, chosen by the destination's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Pdf,
    Svg,
    Eps,
}

impl OutputFormat {
    pub const ALL: [Self; 4] = [Self::Png, Self::Pdf, Self::Svg, Self::Eps];

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pdf => "pdf",
            Self::Svg => "svg",
            Self::Eps => "eps",
        }
    }

    /// Pick the format from `path`'s extension, ignoring case.
    ///
    /// # Errors
    /// Returns `UnsupportedFormat` for any other extension, or none.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        Self::ALL
            .into_iter()
            .find(|f| f.extension() == extension)
            .ok_or_else(|| NosPlotError::UnsupportedFormat {
                extension: format!(".{extension}"),
            })
    }

    /// Encode `canvas` entirely in memory.
    ///
    /// # Errors
    /// Returns `Encode` if the rasteriser or PDF writer fails.
    pub fn encode(self, canvas: &Canvas, config: &RenderConfig) -> Result<Vec<u8>> {
        let bytes = match self {
            Self::Svg => to_svg(canvas, &config.font_family).into_bytes(),
            Self::Png => png::to_png(canvas, config)?,
            Self::Pdf => pdf::to_pdf(canvas)?,
            Self::Eps => eps::to_eps(canvas).into_bytes(),
        };
        if matches!(self, Self::Pdf | Self::Eps) {
            let replaced = replaced_chars(canvas);
            if replaced > 0 {
                warn!(
                    format = %self,
                    chart = canvas.title(),
                    replaced,
                    "characters outside Latin-1 written as '?'"
                );
            }
        }
        debug!(format = %self, bytes = bytes.len(), "encoded chart");
        Ok(bytes)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Characters the single-byte PDF and EPS fonts cannot show, title included.
fn replaced_chars(canvas: &Canvas) -> usize {
    canvas
        .texts()
        .map(|t| non_latin1_count(&t.content))
        .sum::<usize>()
        + non_latin1_count(canvas.title())
}

fn encode_error(format: &'static str, err: impl fmt::Display) -> NosPlotError {
    NosPlotError::Encode {
        format,
        message: err.to_string(),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
