use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, ReportFormat};
use crate::render::ChartKind;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "nos-tlplot")]
#[command(author, version, about = "Render risk-of-bias charts from Newcastle-Ottawa Scale tables")]
#[command(long_about = "Validate a Newcastle-Ottawa Scale assessment table and render \
    traffic-light, radar, heatmap and summary charts as PNG, PDF, SVG or EPS.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Invalid input, arguments, theme, output format or I/O failure\n  \
    2 - Total score mismatches found (check --deny-mismatch)")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors and suppress the summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(long, global = true, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the traffic-light plot and every auxiliary chart
    Render(RenderArgs),

    /// Validate a table and report total score mismatches
    Check(CheckArgs),

    /// List the available color themes
    Themes,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Assessment table (.csv, .xlsx, .xlsm, .xls or .ods)
    pub input: PathBuf,

    /// Primary output file; its extension picks the format (.png, .pdf, .svg, .eps)
    pub output: PathBuf,

    /// Color theme (overrides config)
    pub theme: Option<String>,

    /// Render only these charts (comma-separated, e.g. traffic_light,radar,pie)
    #[arg(long, value_delimiter = ',', conflicts_with = "primary_only")]
    pub charts: Option<Vec<ChartKind>>,

    /// Render only the traffic-light plot
    #[arg(long)]
    pub primary_only: bool,

    /// Raster resolution for PNG output (overrides config)
    #[arg(long)]
    pub dpi: Option<u32>,

    /// Cap each item score at one star
    #[arg(long)]
    pub strict_bounds: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Assessment table (.csv, .xlsx, .xlsm, .xls or .ods)
    pub input: PathBuf,

    /// Report format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormat,

    /// Cap each item score at one star
    #[arg(long)]
    pub strict_bounds: bool,

    /// Exit with code 2 when any declared total differs from the computed one
    #[arg(long)]
    pub deny_mismatch: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
