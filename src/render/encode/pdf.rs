//! Single-page PDF built from standard Type1 fonts.

use std::collections::BTreeMap;

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};

use crate::error::Result;
use crate::render::canvas::{Canvas, Shape, Text};
use crate::render::format::{latin1_bytes, text_width};
use crate::render::style::{Paint, TextAnchor};

use super::encode_error;

/// Bezier control distance for a quarter circle.
const KAPPA: f64 = 0.552_284_8;

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

#[allow(clippy::cast_possible_truncation)] // PDF reals are single precision
fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

/// Opacity rounded to whole percent, the key for a shared ExtGState.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to 0..=100
fn alpha_key(opacity: f64) -> u32 {
    (opacity.clamp(0.0, 1.0) * 100.0).round() as u32
}

fn alpha_name(key: u32) -> String {
    format!("GA{key}")
}

struct PageWriter {
    height: f64,
    ops: Vec<Operation>,
    alphas: BTreeMap<u32, String>,
}

impl PageWriter {
    fn new(height: f64) -> Self {
        Self {
            height,
            ops: Vec::new(),
            alphas: BTreeMap::new(),
        }
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.ops.push(Operation::new(operator, operands));
    }

    fn flip(&self, y: f64) -> f64 {
        self.height - y
    }

    fn move_to(&mut self, (x, y): (f64, f64)) {
        let y = self.flip(y);
        self.op("m", vec![real(x), real(y)]);
    }

    fn line_to(&mut self, (x, y): (f64, f64)) {
        let y = self.flip(y);
        self.op("l", vec![real(x), real(y)]);
    }

    fn curve_to(&mut self, c1: (f64, f64), c2: (f64, f64), end: (f64, f64)) {
        let operands: Vec<Object> = [c1, c2, end]
            .into_iter()
            .flat_map(|(x, y)| [real(x), real(self.flip(y))])
            .collect();
        self.op("c", operands);
    }

    /// Set graphics state for `paint`; returns the painting operator.
    fn apply_paint(&mut self, paint: &Paint) -> &'static str {
        if let Some(color) = paint.fill {
            let [r, g, b] = color.unit_channels();
            self.op("rg", vec![real(r), real(g), real(b)]);
            if paint.is_translucent() {
                let key = alpha_key(paint.fill_opacity);
                let name = self
                    .alphas
                    .entry(key)
                    .or_insert_with(|| alpha_name(key))
                    .clone();
                self.op("gs", vec![Object::Name(name.into_bytes())]);
            }
        }
        if let Some(color) = paint.stroke {
            let [r, g, b] = color.unit_channels();
            self.op("RG", vec![real(r), real(g), real(b)]);
            self.op("w", vec![real(paint.stroke_width)]);
            if let Some((dash, gap)) = paint.dash {
                self.op(
                    "d",
                    vec![Object::Array(vec![real(dash), real(gap)]), Object::Integer(0)],
                );
            }
        }
        match (paint.fill.is_some(), paint.stroke.is_some()) {
            (true, true) => "B",
            (true, false) => "f",
            (false, true) => "S",
            (false, false) => "n",
        }
    }

    fn shape(&mut self, shape: &Shape) {
        if let Shape::Text(text) = shape {
            self.text(text);
            return;
        }

        self.op("q", vec![]);
        match shape {
            Shape::Rect {
                x,
                y,
                width,
                height,
                paint,
            } => {
                let paint_op = self.apply_paint(paint);
                let bottom = self.flip(y + height);
                self.op("re", vec![real(*x), real(bottom), real(*width), real(*height)]);
                self.op(paint_op, vec![]);
            }
            Shape::Circle { cx, cy, r, paint } => {
                let paint_op = self.apply_paint(paint);
                self.circle(*cx, *cy, *r);
                self.op(paint_op, vec![]);
            }
            Shape::Path {
                points,
                closed,
                paint,
            } => {
                let paint_op = self.apply_paint(paint);
                if let Some((first, rest)) = points.split_first() {
                    self.move_to(*first);
                    for point in rest {
                        self.line_to(*point);
                    }
                    if *closed {
                        self.op("h", vec![]);
                    }
                }
                let paint_op = match (*closed, paint.stroke.is_some()) {
                    (true, _) => paint_op,
                    // An open path is never filled.
                    (false, true) => "S",
                    (false, false) => "n",
                };
                self.op(paint_op, vec![]);
            }
            Shape::Text(_) => {}
        }
        self.op("Q", vec![]);
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64) {
        let k = r * KAPPA;
        self.move_to((cx + r, cy));
        self.curve_to((cx + r, cy + k), (cx + k, cy + r), (cx, cy + r));
        self.curve_to((cx - k, cy + r), (cx - r, cy + k), (cx - r, cy));
        self.curve_to((cx - r, cy - k), (cx - k, cy - r), (cx, cy - r));
        self.curve_to((cx + k, cy - r), (cx + r, cy - k), (cx + r, cy));
        self.op("h", vec![]);
    }

    fn text(&mut self, text: &Text) {
        let width = text_width(&text.content, text.size, text.bold);
        let offset = match text.anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -width / 2.0,
            TextAnchor::End => -width,
        };
        // Clockwise on screen is a negative angle once y points up.
        let (sin, cos) = (-text.rotation).to_radians().sin_cos();
        let origin_x = offset.mul_add(cos, text.x);
        let origin_y = offset.mul_add(sin, self.flip(text.y));
        let font = if text.bold { BOLD_FONT } else { REGULAR_FONT };
        let [r, g, b] = text.color.unit_channels();

        self.op("BT", vec![]);
        self.op("rg", vec![real(r), real(g), real(b)]);
        self.op(
            "Tf",
            vec![Object::Name(font.as_bytes().to_vec()), real(text.size)],
        );
        self.op(
            "Tm",
            vec![
                real(cos),
                real(sin),
                real(-sin),
                real(cos),
                real(origin_x),
                real(origin_y),
            ],
        );
        self.op(
            "Tj",
            vec![Object::string_literal(latin1_bytes(&text.content))],
        );
        self.op("ET", vec![]);
    }

    fn ext_g_states(&self) -> Dictionary {
        let mut states = Dictionary::new();
        for (key, name) in &self.alphas {
            states.set(
                name.as_bytes().to_vec(),
                dictionary! {
                    "Type" => "ExtGState",
                    "ca" => real(f64::from(*key) / 100.0),
                },
            );
        }
        states
    }
}

fn font(base: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base,
        "Encoding" => "WinAnsiEncoding",
    }
}

/// Encode `canvas` as a one-page PDF with a media box equal to the canvas size.
pub fn to_pdf(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut page = PageWriter::new(canvas.height());
    for shape in canvas.shapes() {
        page.shape(shape);
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let regular_id = doc.add_object(font("Helvetica"));
    let bold_id = doc.add_object(font("Helvetica-Bold"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR_FONT => regular_id,
            BOLD_FONT => bold_id,
        },
        "ExtGState" => page.ext_g_states(),
    });

    let content = Content { operations: page.ops }
        .encode()
        .map_err(|e| encode_error("pdf", e))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, content));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            real(canvas.width()),
            real(canvas.height()),
        ],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );

    let mut info = dictionary! { "Producer" => Object::string_literal("nos-tlplot") };
    if !canvas.title().is_empty() {
        info.set("Title", Object::string_literal(latin1_bytes(canvas.title())));
    }
    let info_id = doc.add_object(info);
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).map_err(|e| encode_error("pdf", e))?;
    Ok(out)
}

#[cfg(test)]
#[path = "pdf_tests.rs"]
mod tests;
