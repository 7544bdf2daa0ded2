//! Colored error and warning messages for stderr.
//!
//! Format: `✖ Type: message`, then optional `× detail` and `help: suggestion` lines.

use std::error::Error as _;
use std::io::{IsTerminal, Write};

use crate::error::NosPlotError;

use super::{ColorMode, ansi};

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.enabled(std::io::stderr().is_terminal()),
        }
    }

    /// Auto-detect color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Print a crate error with its category, underlying cause, and hint.
    pub fn report(&self, err: &NosPlotError) {
        let mut stderr = std::io::stderr().lock();
        self.write_report(&mut stderr, err);
    }

    pub fn write_report<W: Write>(&self, w: &mut W, err: &NosPlotError) {
        let message = err.to_string();
        // Wrapped errors already print their cause inline.
        let detail = err
            .source()
            .map(ToString::to_string)
            .filter(|d| !message.contains(d.as_str()));
        let suggestion = err.suggestion();
        self.write_error(
            w,
            err.error_type(),
            &message,
            detail.as_deref(),
            suggestion.as_deref(),
        );
    }

    pub fn print_warning(&self, message: &str, detail: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail);
    }

    /// Write errors are discarded: there is nowhere left to report them.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
        self.write_detail(w, detail);

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, detail: Option<&str>) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
        self.write_detail(w, detail);
    }

    fn write_detail<W: Write>(&self, w: &mut W, detail: Option<&str>) {
        let Some(d) = detail else { return };
        if self.use_colors {
            let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
        } else {
            let _ = writeln!(w, "  × {d}");
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
