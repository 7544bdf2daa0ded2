use std::io::Write;

use crate::error::Result;

use super::report::{CheckReport, TierSummary};
use super::{ColorMode, ReportFormatter, ansi};

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: mode.enabled(std::io::IsTerminal::is_terminal(&std::io::stdout())),
            verbose,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_tiers(&self, tiers: &TierSummary, output: &mut Vec<u8>) {
        writeln!(
            output,
            "   {:<18} {} {:>3}  {} {:>3}  {} {:>3}",
            tiers.name,
            self.colorize("High", ansi::RED),
            tiers.high,
            self.colorize("Moderate", ansi::YELLOW),
            tiers.moderate,
            self.colorize("Low", ansi::GREEN),
            tiers.low,
        )
        .ok();
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let mut output = Vec::new();

        writeln!(output, "{}: {} studies", report.input, report.studies).ok();
        if self.verbose > 0 {
            let bounds = if report.strict_item_bounds { "0-1" } else { "0-5" };
            writeln!(output, "   Item bounds: {bounds}").ok();
        }

        writeln!(output).ok();
        for domain in &report.domains {
            self.format_tiers(domain, &mut output);
        }
        self.format_tiers(&report.overall, &mut output);
        writeln!(output).ok();

        if report.has_mismatches() {
            let heading = format!(
                "⚠ {} total score mismatch{}",
                report.mismatches.len(),
                if report.mismatches.len() == 1 { "" } else { "es" }
            );
            writeln!(output, "{}", self.colorize(&heading, ansi::YELLOW)).ok();
            for mismatch in &report.mismatches {
                writeln!(
                    output,
                    "   {}: declared {}, computed {}",
                    mismatch.label, mismatch.declared, mismatch.computed
                )
                .ok();
            }
        } else {
            writeln!(output, "{}", self.colorize("✓ Total scores consistent", ansi::GREEN)).ok();
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
