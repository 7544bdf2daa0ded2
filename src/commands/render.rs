use std::path::PathBuf;

use crate::cli::{Cli, RenderArgs};
use crate::output::ErrorOutput;
use crate::render::{ChartKind, Renderer};
use crate::{EXIT_SUCCESS, Result};

use super::context::{apply_render_overrides, load_config, load_table, report_error, theme_name};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(written) => {
            if !cli.quiet {
                for path in &written {
                    println!("✓ {}", path.display());
                }
            }
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e, cli),
    }
}

/// Charts to draw: `--primary-only`, the `--charts` list, or the full catalogue.
#[must_use]
pub fn resolve_charts(args: &RenderArgs) -> Vec<ChartKind> {
    if args.primary_only {
        return vec![ChartKind::TrafficLight];
    }
    args.charts.as_ref().map_or_else(
        || ChartKind::ALL.to_vec(),
        |kinds| {
            let mut unique = Vec::with_capacity(kinds.len());
            for kind in kinds {
                if !unique.contains(kind) {
                    unique.push(*kind);
                }
            }
            unique
        },
    )
}

/// Validate the whole table, then write every requested chart.
///
/// # Errors
/// Config, read, schema and range errors abort before any file is written;
/// a render error stops the batch at that chart.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<Vec<PathBuf>> {
    let mut config = load_config(cli)?;
    apply_render_overrides(&mut config, args)?;

    let table = load_table(&args.input, config.validation.strict_item_bounds)?;
    if !cli.quiet && !table.mismatches.is_empty() {
        ErrorOutput::new(cli.color.into()).print_warning(
            &format!(
                "{} of {} studies declare a total that differs from their item scores",
                table.mismatches.len(),
                table.len()
            ),
            Some("Run 'nos-tlplot check' for the full list"),
        );
    }

    let theme = theme_name(&config, args);
    let renderer = Renderer::new(config.render);
    renderer.render_batch(&table, &args.output, &theme, &resolve_charts(args))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
