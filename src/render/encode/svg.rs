use std::fmt::Write;

use crate::render::canvas::{Canvas, Shape, Text};
use crate::render::format::{fmt_num, xml_escape};
use crate::render::style::{Color, Paint, TextAnchor};

/// Standalone SVG sized in points.
#[must_use]
pub fn to_svg(canvas: &Canvas, font_family: &str) -> String {
    document(canvas, font_family, "pt")
}

/// SVG sized in user units, one unit per pixel, for rasterising.
pub(super) fn to_raster_svg(canvas: &Canvas, font_family: &str) -> String {
    document(canvas, font_family, "")
}

fn document(canvas: &Canvas, font_family: &str, unit: &str) -> String {
    let width = fmt_num(canvas.width());
    let height = fmt_num(canvas.height());
    let mut output = String::new();

    let _ = writeln!(
        output,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}{unit}" height="{height}{unit}" viewBox="0 0 {width} {height}" font-family="{}" role="img">"#,
        xml_escape(font_family)
    );
    if !canvas.title().is_empty() {
        let _ = writeln!(output, "    <title>{}</title>", xml_escape(canvas.title()));
    }
    let _ = writeln!(
        output,
        r#"    <rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
        Color::WHITE
    );

    for shape in canvas.shapes() {
        output.push_str("    ");
        write_shape(&mut output, shape);
        output.push('\n');
    }

    output.push_str("</svg>\n");
    output
}

fn write_shape(output: &mut String, shape: &Shape) {
    match shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
            paint,
        } => {
            let _ = write!(
                output,
                r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height),
                paint_attrs(paint)
            );
        }
        Shape::Circle { cx, cy, r, paint } => {
            let _ = write!(
                output,
                r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
                fmt_num(*cx),
                fmt_num(*cy),
                fmt_num(*r),
                paint_attrs(paint)
            );
        }
        Shape::Path {
            points,
            closed,
            paint,
        } => {
            let tag = if *closed { "polygon" } else { "polyline" };
            let coords: Vec<String> = points
                .iter()
                .map(|(x, y)| format!("{},{}", fmt_num(*x), fmt_num(*y)))
                .collect();
            let _ = write!(
                output,
                r#"<{tag} points="{}"{} stroke-linejoin="round"/>"#,
                coords.join(" "),
                paint_attrs(paint)
            );
        }
        Shape::Text(text) => write_text(output, text),
    }
}

fn paint_attrs(paint: &Paint) -> String {
    let mut attrs = String::new();
    match paint.fill {
        Some(color) => {
            let _ = write!(attrs, r#" fill="{color}""#);
            if paint.fill_opacity < 1.0 {
                let _ = write!(attrs, r#" fill-opacity="{}""#, fmt_num(paint.fill_opacity));
            }
        }
        None => attrs.push_str(r#" fill="none""#),
    }
    if let Some(color) = paint.stroke {
        let _ = write!(
            attrs,
            r#" stroke="{color}" stroke-width="{}""#,
            fmt_num(paint.stroke_width)
        );
        if let Some((dash, gap)) = paint.dash {
            let _ = write!(
                attrs,
                r#" stroke-dasharray="{} {}""#,
                fmt_num(dash),
                fmt_num(gap)
            );
        }
    }
    attrs
}

fn write_text(output: &mut String, text: &Text) {
    let x = fmt_num(text.x);
    let y = fmt_num(text.y);
    let _ = write!(
        output,
        r#"<text x="{x}" y="{y}" font-size="{}" fill="{}""#,
        fmt_num(text.size),
        text.color
    );
    if text.anchor != TextAnchor::Start {
        let _ = write!(output, r#" text-anchor="{}""#, text.anchor);
    }
    if text.bold {
        output.push_str(r#" font-weight="bold""#);
    }
    if text.rotation.abs() > f64::EPSILON {
        let _ = write!(
            output,
            r#" transform="rotate({} {x} {y})""#,
            fmt_num(text.rotation)
        );
    }
    let _ = write!(output, ">{}</text>", xml_escape(&text.content));
}

#[cfg(test)]
#[path = "svg_tests.rs"]
mod tests;
