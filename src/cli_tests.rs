use std::path::PathBuf;

use super::*;

#[test]
fn render_takes_input_output_and_optional_theme() {
    let cli = Cli::parse_from(["nos-tlplot", "render", "data.csv", "out.png", "gray"]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.input, PathBuf::from("data.csv"));
            assert_eq!(args.output, PathBuf::from("out.png"));
            assert_eq!(args.theme.as_deref(), Some("gray"));
            assert!(args.charts.is_none());
            assert!(!args.primary_only);
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn render_theme_is_optional() {
    let cli = Cli::parse_from(["nos-tlplot", "render", "data.csv", "out.svg"]);
    match cli.command {
        Commands::Render(args) => assert!(args.theme.is_none()),
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn render_rejects_extra_positionals() {
    let result = Cli::try_parse_from(["nos-tlplot", "render", "a.csv", "out.png", "gray", "extra"]);
    assert!(result.is_err());
}

#[test]
fn render_requires_output() {
    assert!(Cli::try_parse_from(["nos-tlplot", "render", "a.csv"]).is_err());
}

#[test]
fn render_chart_filter_parses_names() {
    let cli = Cli::parse_from([
        "nos-tlplot",
        "render",
        "a.csv",
        "out.png",
        "--charts",
        "radar,table,pie",
    ]);
    match cli.command {
        Commands::Render(args) => assert_eq!(
            args.charts,
            Some(vec![ChartKind::Radar, ChartKind::ScoreTable, ChartKind::Pie])
        ),
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn render_chart_filter_rejects_unknown_names() {
    let result = Cli::try_parse_from(["nos-tlplot", "render", "a.csv", "o.png", "--charts", "bar"]);
    assert!(result.is_err());
}

#[test]
fn charts_conflicts_with_primary_only() {
    let result = Cli::try_parse_from([
        "nos-tlplot",
        "render",
        "a.csv",
        "o.png",
        "--charts",
        "pie",
        "--primary-only",
    ]);
    assert!(result.is_err());
}

#[test]
fn render_overrides() {
    let cli = Cli::parse_from([
        "nos-tlplot",
        "render",
        "a.csv",
        "o.png",
        "--dpi",
        "150",
        "--strict-bounds",
    ]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.dpi, Some(150));
            assert!(args.strict_bounds);
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn check_defaults_to_text() {
    let cli = Cli::parse_from(["nos-tlplot", "check", "a.csv"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.format, ReportFormat::Text);
            assert!(!args.deny_mismatch);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn check_json_and_deny_mismatch() {
    let cli = Cli::parse_from(["nos-tlplot", "check", "a.csv", "-f", "json", "--deny-mismatch"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.format, ReportFormat::Json);
            assert!(args.deny_mismatch);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn global_flags_apply_after_subcommand() {
    let cli = Cli::parse_from(["nos-tlplot", "themes", "-vv", "--color", "never", "--no-config"]);
    assert!(matches!(cli.command, Commands::Themes));
    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.color, ColorChoice::Never));
    assert!(cli.no_config);
}

#[test]
fn config_conflicts_with_no_config() {
    let result = Cli::try_parse_from(["nos-tlplot", "--config", "a.toml", "--no-config", "themes"]);
    assert!(result.is_err());
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
}
