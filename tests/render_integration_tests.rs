mod common;

use std::fs;

use predicates::prelude::*;

use common::TestFixture;

const SUFFIXES: [&str; 10] = [
    "radar",
    "theme_radar",
    "heatmap",
    "dot_profile",
    "table",
    "donut",
    "line_ordered",
    "lollipop",
    "pie",
    "stacked_area",
];

#[test]
fn render_writes_primary_and_every_auxiliary_chart() {
    let fixture = TestFixture::new();
    let input = fixture.create_sample();
    let output = fixture.join("out.svg");

    nos_tlplot!()
        .current_dir(fixture.path())
        .args(["--no-config", "render"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("out_radar.svg"));

    assert!(output.exists());
    for suffix in SUFFIXES {
        assert!(fixture.join(&format!("out_{suffix}.svg")).exists(), "missing {suffix}");
    }
}

#[test]
fn render_png_has_png_signature() {
    let fixture = TestFixture::new();
    let input = fixture.create_sample();
    let output = fixture.join("out.png");

    nos_tlplot!()
        .args(["--no-config", "render", "--primary-only", "--dpi", "72"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    assert!(!fixture.join("out_radar.png").exists());
}

#[test]
fn render_pdf_and_eps() {
    let fixture = TestFixture::new();
    let input = fixture.create_sample();

    for (ext, magic) in [("pdf", &b"%PDF-"[..]), ("eps", &b"%!PS-Adobe-3.0 EPSF-3.0"[..])] {
        nos_tlplot!()
            .args(["--no-config", "-q", "render", "--charts", "pie,table"])
            .arg(&input)
            .arg(fixture.join(&format!("out.{ext}")))
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
        // Primary chart was not requested; only the suffixed files exist.
        assert!(!fixture.join(&format!("out.{ext}")).exists());
        for chart in ["pie", "table"] {
            let bytes = fs::read(fixture.join(&format!("out_{chart}.{ext}"))).unwrap();
            assert!(bytes.starts_with(magic));
        }
    }
}

#[test]
fn svg_output_is_byte_stable_across_runs() {
    let fixture = TestFixture::new();
    let input = fixture.create_sample();
    let mut outputs = Vec::new();
    for name in ["a.svg", "b.svg"] {
        nos_tlplot!()
            .args(["--no-config", "render", "--primary-only"])
            .arg(&input)
            .arg(fixture.join(name))
            .arg("gray")
            .assert()
            .success();
        outputs.push(fs::read(fixture.join(name)).unwrap());
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn missing_input_exits_one() {
    let fixture = TestFixture::new();
    nos_tlplot!()
        .args(["--no-config", "--color", "never", "render"])
        .arg(fixture.join("missing.csv"))
        .arg(fixture.join("out.png"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✖ IO: Failed to read file"));
    assert!(fixture.files().is_empty());
}

#[test]
fn missing_arguments_exit_one() {
    nos_tlplot!().args(["render", "data.csv"]).assert().code(1);
    nos_tlplot!().arg("render").assert().code(1);
}

#[test]
fn extra_arguments_exit_one() {
    let fixture = TestFixture::new();
    let input = fixture.create_sample();
    nos_tlplot!()
        .args(["--no-config", "render"])
        .arg(&input)
        .arg(fixture.join("out.png"))
        .args(["gray", "surplus"])
        .assert()
        .code(1);
    assert_eq!(fixture.files(), vec!["data.csv"]);
}

#[test]
fn unsupported_output_format_writes_nothing() {
    let fixture = TestFixture::new();
    let input = fixture.create_sample();
    nos_tlplot!()
        .args(["--no-config", "--color", "never", "render"])
        .arg(&input)
        .arg(fixture.join("out.tiff"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✖ UnsupportedFormat"));
    assert_eq!(fixture.files(), vec!["data.csv"]);
}

#[test]
fn unknown_theme_lists_choices() {
    let fixture = TestFixture::new();
    let input = fixture.create_sample();
    nos_tlplot!()
        .args(["--no-config", "--color", "never", "render"])
        .arg(&input)
        .arg(fixture.join("out.svg"))
        .arg("neon")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Theme 'neon' not available"))
        .stderr(predicate::str::contains("traffic_light, gray"));
    assert_eq!(fixture.files(), vec!["data.csv"]);
}

#[test]
fn missing_column_aborts_batch() {
    let fixture = TestFixture::new();
    let input = fixture.create_file("bad.csv", "\"Author, Year\",Total Score\nA,1\n");
    nos_tlplot!()
        .args(["--no-config", "--color", "never", "render"])
        .arg(&input)
        .arg(fixture.join("out.svg"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✖ Schema: Missing required columns"))
        .stderr(predicate::str::contains("Representativeness"));
    assert_eq!(fixture.files(), vec!["bad.csv"]);
}

#[test]
fn mismatch_warns_but_renders() {
    let fixture = TestFixture::new();
    let input = fixture.create_table("data.csv", "\"Smith, 2020\",1,1,1,1,1,1,1,0,0,8,Low\n");
    nos_tlplot!()
        .args(["--no-config", "--color", "never", "render", "--primary-only"])
        .arg(&input)
        .arg(fixture.join("out.svg"))
        .assert()
        .success()
        .stderr(predicate::str::contains("⚠ Warning: 1 of 1 studies"));
    assert!(fixture.join("out.svg").exists());
}

#[test]
fn config_theme_applies_when_no_positional_theme() {
    let fixture = TestFixture::new();
    let input = fixture.create_sample();
    fixture.create_config("theme = \"gray\"\n");
    nos_tlplot!()
        .current_dir(fixture.path())
        .args(["render", "--primary-only"])
        .arg(&input)
        .arg(fixture.join("out.svg"))
        .assert()
        .success();
    let svg = fs::read_to_string(fixture.join("out.svg")).unwrap();
    // Gray palette High tier.
    assert!(svg.contains("#3B3B3B"));
    assert!(!svg.contains("#DC2525"));
}

#[test]
fn invalid_config_exits_one() {
    let fixture = TestFixture::new();
    let input = fixture.create_sample();
    fixture.create_config("[render]\ndpi = 5\n");
    nos_tlplot!()
        .current_dir(fixture.path())
        .args(["--color", "never", "render"])
        .arg(&input)
        .arg(fixture.join("out.svg"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✖ Config"));
}
