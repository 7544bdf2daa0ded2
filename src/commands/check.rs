use crate::cli::{CheckArgs, Cli};
use crate::output::{CheckReport, JsonFormatter, ReportFormat, ReportFormatter, TextFormatter};
use crate::{EXIT_MISMATCH, EXIT_SUCCESS, Result};

use super::context::{load_config, load_table, report_error};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => report_error(&e, cli),
    }
}

/// Validate the table and print a report.
///
/// # Errors
/// Config, read, schema and range errors.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli)?;
    let strict = args.strict_bounds || config.validation.strict_item_bounds;
    let table = load_table(&args.input, strict)?;
    let report = CheckReport::new(&args.input, &table, strict);

    if !cli.quiet {
        let output = match args.format {
            ReportFormat::Text => {
                TextFormatter::with_verbose(cli.color.into(), cli.verbose).format(&report)?
            }
            ReportFormat::Json => JsonFormatter.format(&report)?,
        };
        print!("{output}");
        if !output.ends_with('\n') {
            println!();
        }
    }

    if args.deny_mismatch && report.has_mismatches() {
        Ok(EXIT_MISMATCH)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
