//! Encapsulated PostScript (EPSF-3.0) writer.
//!
//! PostScript has no alpha, so translucent fills are pre-blended over white.

use std::fmt::Write;

use crate::render::canvas::{Canvas, Shape, Text};
use crate::render::format::{fmt_num, latin1_bytes};
use crate::render::style::{Color, Paint, TextAnchor};

const PROLOGUE: &str = "\
/reencode { findfont dup length dict begin
  { 1 index /FID ne { def } { pop pop } ifelse } forall
  /Encoding ISOLatin1Encoding def currentdict end definefont pop } bind def
/Helvetica-L1 /Helvetica reencode
/Helvetica-Bold-L1 /Helvetica-Bold reencode
/ltext { show } bind def
/ctext { dup stringwidth pop 2 div neg 0 rmoveto show } bind def
/rtext { dup stringwidth pop neg 0 rmoveto show } bind def
";

#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Bounding box is small and positive
pub fn to_eps(canvas: &Canvas) -> String {
    let mut out = String::new();
    let width = canvas.width().ceil().max(0.0) as u32;
    let height = canvas.height().ceil().max(0.0) as u32;

    out.push_str("%!PS-Adobe-3.0 EPSF-3.0\n");
    let _ = writeln!(out, "%%BoundingBox: 0 0 {width} {height}");
    let _ = writeln!(
        out,
        "%%HiResBoundingBox: 0 0 {} {}",
        fmt_num(canvas.width()),
        fmt_num(canvas.height())
    );
    if !canvas.title().is_empty() {
        let _ = writeln!(out, "%%Title: {}", canvas.title().replace(['\r', '\n'], " "));
    }
    out.push_str("%%Creator: nos-tlplot\n%%Pages: 1\n%%EndComments\n");
    out.push_str(PROLOGUE);
    out.push_str("%%Page: 1 1\n");

    let writer = EpsWriter {
        height: canvas.height(),
    };
    let _ = writeln!(
        out,
        "1 1 1 setrgbcolor 0 0 {} {} rectfill",
        fmt_num(canvas.width()),
        fmt_num(canvas.height())
    );
    for shape in canvas.shapes() {
        writer.shape(&mut out, shape);
    }

    out.push_str("showpage\n%%EOF\n");
    out
}

struct EpsWriter {
    height: f64,
}

impl EpsWriter {
    fn point(&self, (x, y): (f64, f64)) -> String {
        format!("{} {}", fmt_num(x), fmt_num(self.height - y))
    }

    fn shape(&self, out: &mut String, shape: &Shape) {
        match shape {
            Shape::Rect {
                x,
                y,
                width,
                height,
                paint,
            } => {
                let path = format!(
                    "newpath {} moveto {} 0 rlineto 0 {} rlineto {} 0 rlineto closepath",
                    self.point((*x, *y)),
                    fmt_num(*width),
                    fmt_num(-height),
                    fmt_num(-width)
                );
                paint_path(out, &path, paint, true);
            }
            Shape::Circle { cx, cy, r, paint } => {
                let path = format!(
                    "newpath {} {} 0 360 arc closepath",
                    self.point((*cx, *cy)),
                    fmt_num(*r)
                );
                paint_path(out, &path, paint, true);
            }
            Shape::Path {
                points,
                closed,
                paint,
            } => {
                let mut path = String::from("newpath");
                for (i, point) in points.iter().enumerate() {
                    let verb = if i == 0 { "moveto" } else { "lineto" };
                    let _ = write!(path, " {} {verb}", self.point(*point));
                }
                if *closed {
                    path.push_str(" closepath");
                }
                paint_path(out, &path, paint, *closed);
            }
            Shape::Text(text) => self.text(out, text),
        }
    }

    fn text(&self, out: &mut String, text: &Text) {
        let font = if text.bold {
            "/Helvetica-Bold-L1"
        } else {
            "/Helvetica-L1"
        };
        let show = match text.anchor {
            TextAnchor::Start => "ltext",
            TextAnchor::Middle => "ctext",
            TextAnchor::End => "rtext",
        };
        let _ = writeln!(
            out,
            "gsave {} setrgbcolor {font} findfont {} scalefont setfont {} translate {} rotate 0 0 moveto ({}) {show} grestore",
            rgb(text.color),
            fmt_num(text.size),
            self.point((text.x, text.y)),
            fmt_num(-text.rotation),
            ps_string(&text.content)
        );
    }
}

fn rgb(color: Color) -> String {
    let [r, g, b] = color.unit_channels();
    format!("{} {} {}", fmt_num(r), fmt_num(g), fmt_num(b))
}

fn paint_path(out: &mut String, path: &str, paint: &Paint, fillable: bool) {
    if !paint.is_visible() {
        return;
    }
    let _ = writeln!(out, "gsave {path}");
    if let Some(color) = paint.fill.filter(|_| fillable) {
        let _ = writeln!(
            out,
            "gsave {} setrgbcolor fill grestore",
            rgb(color.over_white(paint.fill_opacity))
        );
    }
    if let Some(color) = paint.stroke {
        let dash = paint.dash.map_or_else(
            || "[] 0 setdash".to_string(),
            |(d, g)| format!("[{} {}] 0 setdash", fmt_num(d), fmt_num(g)),
        );
        let _ = writeln!(
            out,
            "{} setrgbcolor {} setlinewidth 1 setlinejoin {dash} stroke",
            rgb(color),
            fmt_num(paint.stroke_width)
        );
    }
    out.push_str("grestore\n");
}

/// Escape a PostScript string literal body; non-ASCII Latin-1 bytes become octal escapes.
fn ps_string(text: &str) -> String {
    let mut escaped = String::new();
    for byte in latin1_bytes(text) {
        match byte {
            b'(' | b')' | b'\\' => {
                escaped.push('\\');
                escaped.push(char::from(byte));
            }
            0x20..=0x7E => escaped.push(char::from(byte)),
            _ => {
                let _ = write!(escaped, "\\{byte:03o}");
            }
        }
    }
    escaped
}

#[cfg(test)]
#[path = "eps_tests.rs"]
mod tests;
