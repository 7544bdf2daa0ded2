use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::cli::Cli;
use crate::risk::RiskLevel;
use crate::theme::Theme;

#[must_use]
pub fn run_themes(cli: &Cli) -> i32 {
    if !cli.quiet {
        print!("{}", format_themes());
    }
    EXIT_SUCCESS
}

/// One line per built-in theme with its tier colors.
#[must_use]
pub fn format_themes() -> String {
    let mut out = String::new();
    for theme in Theme::ALL {
        let palette = theme.palette();
        let marker = if theme == Theme::default() { " (default)" } else { "" };
        let _ = write!(out, "{:<14}", theme.name());
        for level in [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High] {
            let _ = write!(out, "  {level} {}", palette.color(level));
        }
        let _ = writeln!(out, "{marker}");
    }
    out
}

#[cfg(test)]
#[path = "themes_tests.rs"]
mod tests;
