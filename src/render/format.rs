//! Text helpers shared by the encoders and chart layout.

/// Escape text for SVG character data and attribute values.
#[must_use]
pub fn xml_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Fixed two-decimal formatting with trailing zeros removed.
///
/// Every encoder writes coordinates through this so output is byte-stable.
#[must_use]
pub fn fmt_num(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Approximate advance width of `text` set in Helvetica at `size` points.
///
/// Used for anchoring text where the output format cannot measure it and
/// for sizing label columns.
#[must_use]
pub fn text_width(text: &str, size: f64, bold: bool) -> f64 {
    let em: f64 = text.chars().map(glyph_width).sum();
    let weight = if bold { 1.06 } else { 1.0 };
    em * size * weight
}

fn glyph_width(c: char) -> f64 {
    match c {
        'i' | 'j' | 'l' | '\'' | '|' => 0.22,
        ' ' | '.' | ',' | ':' | ';' | '!' | 'f' | 't' | 'I' | '/' | '(' | ')' | '[' | ']' => 0.278,
        'r' | '-' => 0.333,
        'm' | 'M' | 'W' => 0.833,
        'w' | '%' => 0.722,
        '0'..='9' => 0.556,
        c if c.is_ascii_uppercase() => 0.667,
        c if c.is_ascii_lowercase() => 0.535,
        _ => 0.6,
    }
}

/// Encode text for the single-byte Latin-1 fonts used in PDF and EPS output.
///
/// Characters outside Latin-1 become `?`; SVG and PNG output keep them.
/// Use [`non_latin1_count`] to detect the loss before encoding.
#[must_use]
pub fn latin1_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

/// Number of characters in `text` that [`latin1_bytes`] would replace.
#[must_use]
pub fn non_latin1_count(text: &str) -> usize {
    text.chars().filter(|&c| u32::from(c) > 0xFF).count()
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
