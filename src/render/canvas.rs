//! Format-neutral drawing surface that every chart composes into.
//!
//! Coordinates are points (1/72 inch) with the origin at the top-left and
//! y growing downward. Encoders flip the axis where their format needs it.

use super::element::Element;
use super::style::{Color, Paint, TextAnchor};

/// A single text run.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: f64,
    /// Baseline position.
    pub y: f64,
    pub content: String,
    pub size: f64,
    pub anchor: TextAnchor,
    pub bold: bool,
    pub color: Color,
    /// Clockwise rotation in degrees about (`x`, `y`).
    pub rotation: f64,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>, size: f64) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            size,
            anchor: TextAnchor::Start,
            bold: false,
            color: Color::BLACK,
            rotation: 0.0,
        }
    }

    #[must_use]
    pub const fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        paint: Paint,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        paint: Paint,
    },
    /// Polyline, or polygon when `closed`.
    Path {
        points: Vec<(f64, f64)>,
        closed: bool,
        paint: Paint,
    },
    Text(Text),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    width: f64,
    height: f64,
    title: String,
    shapes: Vec<Shape>,
}

impl Canvas {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            shapes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn draw<E: Element>(&mut self, element: &E) {
        element.draw(self);
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: Paint) {
        self.push(Shape::Rect {
            x,
            y,
            width,
            height,
            paint,
        });
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, paint: Paint) {
        self.push(Shape::Circle { cx, cy, r, paint });
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), paint: Paint) {
        self.polyline(vec![from, to], paint);
    }

    pub fn polyline(&mut self, points: Vec<(f64, f64)>, paint: Paint) {
        if points.len() >= 2 {
            self.push(Shape::Path {
                points,
                closed: false,
                paint,
            });
        }
    }

    pub fn polygon(&mut self, points: Vec<(f64, f64)>, paint: Paint) {
        if points.len() >= 3 {
            self.push(Shape::Path {
                points,
                closed: true,
                paint,
            });
        }
    }

    pub fn text(&mut self, text: Text) {
        if !text.content.is_empty() {
            self.push(Shape::Text(text));
        }
    }

    /// Iterate over every text run, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Text(text) => Some(text),
            _ => None,
        })
    }
}

#[cfg(test)]
#[path = "canvas_tests.rs"]
mod tests;
