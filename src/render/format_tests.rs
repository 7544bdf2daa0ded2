use super::*;

#[test]
fn xml_escape_special_characters() {
    assert_eq!(xml_escape("<b>"), "&lt;b&gt;");
    assert_eq!(xml_escape("Smith & Jones"), "Smith &amp; Jones");
    assert_eq!(xml_escape("\"q\" it's"), "&quot;q&quot; it&#39;s");
    assert_eq!(xml_escape("Müller, 2020"), "Müller, 2020");
}

#[test]
fn numbers_are_trimmed() {
    assert_eq!(fmt_num(10.0), "10");
    assert_eq!(fmt_num(10.5), "10.5");
    assert_eq!(fmt_num(0.126), "0.13");
    assert_eq!(fmt_num(-0.001), "0");
    assert_eq!(fmt_num(-3.25), "-3.25");
    assert_eq!(fmt_num(f64::NAN), "0");
}

#[test]
fn text_width_grows_with_length_and_size() {
    let short = text_width("Lee", 10.0, false);
    let long = text_width("Lee, 2021", 10.0, false);
    assert!(long > short);
    assert!((text_width("Lee", 20.0, false) - 2.0 * short).abs() < 1e-9);
    assert!(text_width("Lee", 10.0, true) > short);
    assert!(text_width("", 10.0, false).abs() < f64::EPSILON);
}

#[test]
fn latin1_replaces_wide_characters() {
    assert_eq!(latin1_bytes("Müller"), vec![b'M', 0xFC, b'l', b'l', b'e', b'r']);
    assert_eq!(latin1_bytes("李"), vec![b'?']);
}

#[test]
fn non_latin1_count_matches_replacements() {
    assert_eq!(non_latin1_count("Müller"), 0);
    assert_eq!(non_latin1_count("Łukasz, 2020"), 1);
    let bytes = latin1_bytes("Łukasz, 2020");
    assert_eq!(bytes.iter().filter(|&&b| b == b'?').count(), 1);
}
