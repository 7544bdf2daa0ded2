use super::*;

#[test]
fn defaults_match_documented_values() {
    let config = Config::default();
    assert_eq!(config.theme, None);
    assert_eq!(config.render.dpi, 300);
    assert_eq!(config.render.font_family, "Helvetica, Arial, sans-serif");
    assert!((config.render.line_width - 1.5).abs() < f64::EPSILON);
    assert!((config.render.base_font_size - 11.0).abs() < f64::EPSILON);
    assert!(!config.validation.strict_item_bounds);
}

#[test]
fn empty_document_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config: Config = toml::from_str(
        r#"
theme = "gray"

[render]
dpi = 150
"#,
    )
    .unwrap();

    assert_eq!(config.theme.as_deref(), Some("gray"));
    assert_eq!(config.render.dpi, 150);
    assert!((config.render.line_width - 1.5).abs() < f64::EPSILON);
    assert!(!config.validation.strict_item_bounds);
}

#[test]
fn strict_bounds_parses() {
    let config: Config = toml::from_str("[validation]\nstrict_item_bounds = true\n").unwrap();
    assert!(config.validation.strict_item_bounds);
}

#[test]
fn unknown_top_level_key_is_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str("colour = \"red\"\n");
    assert!(result.is_err());
}

#[test]
fn unknown_render_key_is_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str("[render]\nfont = \"Arial\"\n");
    assert!(result.is_err());
}

#[test]
fn derived_font_sizes_scale_from_base() {
    let render = RenderConfig {
        base_font_size: 10.0,
        ..RenderConfig::default()
    };
    assert!((render.title_size() - 13.5).abs() < 1e-9);
    assert!((render.small_size() - 8.5).abs() < 1e-9);
}
