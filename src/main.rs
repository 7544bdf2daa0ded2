use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nos_tlplot::cli::{Cli, Commands};
use nos_tlplot::commands::{run_check, run_render, run_themes};
use nos_tlplot::output::ColorMode;
use nos_tlplot::{EXIT_FAILURE, EXIT_SUCCESS};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Help and version go to stdout and are not failures.
            let code = if e.use_stderr() { EXIT_FAILURE } else { EXIT_SUCCESS };
            std::process::exit(code);
        }
    };

    init_tracing(&cli);

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Check(args) => run_check(args, &cli),
        Commands::Themes => run_themes(&cli),
    };

    std::process::exit(exit_code);
}

/// Log to stderr; `RUST_LOG` wins over `-q` and `-v`.
fn init_tracing(cli: &Cli) {
    let level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "warn,nos_tlplot=debug",
            _ => "warn,nos_tlplot=trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ColorMode::from(cli.color).enabled(std::io::stderr().is_terminal()))
        .try_init();
}
