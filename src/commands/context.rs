use std::path::Path;

use tracing::debug;

use crate::EXIT_FAILURE;
use crate::cli::{Cli, RenderArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, validate_config_semantics};
use crate::error::{NosPlotError, Result};
use crate::output::ErrorOutput;
use crate::table::{AugmentedTable, ItemBounds, aggregate, read_table};
use crate::theme::Theme;

/// Load configuration per the global flags: explicit path, discovery, or defaults.
///
/// # Errors
/// Returns an error if the config file cannot be read, parsed, or validated.
pub fn load_config(cli: &Cli) -> Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let result = match cli.config.as_deref() {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };
    if let Some(source) = &result.source {
        debug!(path = %source.display(), "loaded configuration");
    }
    Ok(result.config)
}

/// Apply `render` flags on top of the loaded config, then re-validate.
///
/// The positional theme is not folded in here; see [`theme_name`].
///
/// # Errors
/// Returns `Config` if an override leaves the config out of range.
pub fn apply_render_overrides(config: &mut Config, args: &RenderArgs) -> Result<()> {
    if let Some(dpi) = args.dpi {
        config.render.dpi = dpi;
    }
    if args.strict_bounds {
        config.validation.strict_item_bounds = true;
    }
    validate_config_semantics(config)
}

/// Theme to render with: the positional argument, then the config, then the default.
#[must_use]
pub fn theme_name(config: &Config, args: &RenderArgs) -> String {
    args.theme
        .clone()
        .or_else(|| config.theme.clone())
        .unwrap_or_else(|| Theme::default().name().to_string())
}

/// Read and validate an assessment table.
///
/// # Errors
/// Propagates read, schema, and range errors.
pub fn load_table(path: &Path, strict_bounds: bool) -> Result<AugmentedTable> {
    let raw = read_table(path)?;
    aggregate(&raw, ItemBounds::from_strict(strict_bounds))
}

/// Print `err` to stderr and map it to the failure exit code.
pub(super) fn report_error(err: &NosPlotError, cli: &Cli) -> i32 {
    ErrorOutput::new(cli.color.into()).report(err);
    EXIT_FAILURE
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
