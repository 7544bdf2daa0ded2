use super::*;

fn with_render(update: impl FnOnce(&mut RenderConfig)) -> Config {
    let mut config = Config::default();
    update(&mut config.render);
    config
}

#[test]
fn default_config_is_valid() {
    assert!(validate_config_semantics(&Config::default()).is_ok());
}

#[test]
fn dpi_bounds_are_inclusive() {
    assert!(validate_config_semantics(&with_render(|r| r.dpi = 36)).is_ok());
    assert!(validate_config_semantics(&with_render(|r| r.dpi = 1200)).is_ok());
    assert!(validate_config_semantics(&with_render(|r| r.dpi = 35)).is_err());
    assert!(validate_config_semantics(&with_render(|r| r.dpi = 1201)).is_err());
}

#[test]
fn line_width_must_be_positive() {
    let err = validate_config_semantics(&with_render(|r| r.line_width = 0.0)).unwrap_err();
    assert!(err.to_string().contains("render.line_width"));
    assert!(validate_config_semantics(&with_render(|r| r.line_width = f64::NAN)).is_err());
}

#[test]
fn font_size_range_is_checked() {
    assert!(validate_config_semantics(&with_render(|r| r.base_font_size = 3.5)).is_err());
    assert!(validate_config_semantics(&with_render(|r| r.base_font_size = 72.0)).is_ok());
}

#[test]
fn blank_font_family_is_rejected() {
    assert!(validate_config_semantics(&with_render(|r| r.font_family = "  ".into())).is_err());
}

#[test]
fn known_and_deprecated_themes_pass() {
    for name in ["traffic_light", "gray", "default"] {
        let config = Config {
            theme: Some(name.to_string()),
            ..Config::default()
        };
        assert!(validate_config_semantics(&config).is_ok(), "{name}");
    }
}

#[test]
fn unknown_theme_fails() {
    let config = Config {
        theme: Some("blue".to_string()),
        ..Config::default()
    };
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("traffic_light, gray"));
}
