//! File-level rendering: theme lookup, chart composition, encoding and the write.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::error::{NosPlotError, Result};
use crate::table::AugmentedTable;
use crate::theme::Theme;

use super::canvas::Canvas;
use super::catalog::{ChartKind, chart_path};
use super::charts::{ChartContext, build};
use super::encode::OutputFormat;

/// Renders charts with one explicit [`RenderConfig`]; holds no drawing state between calls.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[must_use]
    pub const fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Compose a chart without encoding it.
    #[must_use]
    pub fn build(&self, kind: ChartKind, table: &AugmentedTable, theme: Theme) -> Canvas {
        let ctx = ChartContext {
            table,
            palette: theme.palette(),
            config: &self.config,
        };
        let canvas = build(kind, &ctx);
        debug!(
            chart = %kind,
            width = canvas.width(),
            height = canvas.height(),
            shapes = canvas.shapes().len(),
            "composed chart"
        );
        canvas
    }

    /// Render one chart to `destination`.
    ///
    /// The theme and format are checked before anything is drawn, and the
    /// file is written only once encoding has succeeded.
    ///
    /// # Errors
    /// `UnknownTheme`, `UnsupportedFormat`, `Encode`, or `FileWrite`.
    pub fn render(
        &self,
        kind: ChartKind,
        table: &AugmentedTable,
        destination: &Path,
        theme: &str,
    ) -> Result<()> {
        let theme = Theme::from_name(theme)?;
        let format = OutputFormat::from_path(destination)?;
        self.write(kind, table, destination, theme, format)
    }

    /// Render `kinds` in order next to `primary`, naming each with [`chart_path`].
    ///
    /// Stops at the first failure; charts already written stay on disk.
    ///
    /// # Errors
    /// The first error any chart produces.
    pub fn render_batch(
        &self,
        table: &AugmentedTable,
        primary: &Path,
        theme: &str,
        kinds: &[ChartKind],
    ) -> Result<Vec<PathBuf>> {
        let theme = Theme::from_name(theme)?;
        let format = OutputFormat::from_path(primary)?;

        let mut written = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            let path = chart_path(primary, kind);
            self.write(kind, table, &path, theme, format)?;
            written.push(path);
        }
        Ok(written)
    }

    fn write(
        &self,
        kind: ChartKind,
        table: &AugmentedTable,
        path: &Path,
        theme: Theme,
        format: OutputFormat,
    ) -> Result<()> {
        let canvas = self.build(kind, table, theme);
        let bytes = format.encode(&canvas, &self.config)?;
        fs::write(path, bytes).map_err(|source| NosPlotError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        info!(chart = %kind, path = %path.display(), format = %format, "wrote chart");
        Ok(())
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
