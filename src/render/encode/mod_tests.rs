use std::path::Path;

use super::*;

#[test]
fn format_from_extension_is_case_insensitive() {
    assert_eq!(OutputFormat::from_path(Path::new("out.png")).unwrap(), OutputFormat::Png);
    assert_eq!(OutputFormat::from_path(Path::new("out.PDF")).unwrap(), OutputFormat::Pdf);
    assert_eq!(OutputFormat::from_path(Path::new("dir/out.Svg")).unwrap(), OutputFormat::Svg);
    assert_eq!(OutputFormat::from_path(Path::new("out.eps")).unwrap(), OutputFormat::Eps);
}

#[test]
fn unsupported_extension_is_named() {
    match OutputFormat::from_path(Path::new("out.tiff")).unwrap_err() {
        NosPlotError::UnsupportedFormat { extension } => assert_eq!(extension, ".tiff"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_extension_is_unsupported() {
    assert!(matches!(
        OutputFormat::from_path(Path::new("chart")),
        Err(NosPlotError::UnsupportedFormat { .. })
    ));
}

#[test]
fn each_format_produces_its_signature() {
    let canvas = Canvas::new(40.0, 20.0);
    let config = RenderConfig {
        dpi: 72,
        ..RenderConfig::default()
    };
    let signatures: [(OutputFormat, &[u8]); 4] = [
        (OutputFormat::Png, b"\x89PNG"),
        (OutputFormat::Pdf, b"%PDF"),
        (OutputFormat::Svg, b"<svg"),
        (OutputFormat::Eps, b"%!PS-Adobe"),
    ];
    for (format, signature) in signatures {
        let bytes = format.encode(&canvas, &config).unwrap();
        assert!(bytes.starts_with(signature), "{format}");
    }
}

#[test]
fn replaced_chars_counts_text_beyond_latin1() {
    use crate::render::canvas::Text;

    let mut canvas = Canvas::new(100.0, 100.0).with_title("Łódź cohort");
    canvas.text(Text::new(0.0, 10.0, "Łukasz, 2020", 10.0));
    canvas.text(Text::new(0.0, 20.0, "Müller, 2019", 10.0));
    // Ł twice and ź once; ó and ü are Latin-1.
    assert_eq!(replaced_chars(&canvas), 3);
}
