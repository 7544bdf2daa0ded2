//! Reusable chart parts: axes and legends.

use super::canvas::{Canvas, Text};
use super::format::text_width;
use super::style::{Color, Paint, TextAnchor};

/// Something that can draw itself onto a [`Canvas`].
pub trait Element {
    fn draw(&self, canvas: &mut Canvas);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Tick position and label placement.
struct TickInfo {
    start: (f64, f64),
    end: (f64, f64),
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis line with ticks at fractional positions along its length.
///
/// A horizontal axis runs right from (`x`, `y`); a vertical axis runs up.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub color: Color,
    pub tick_length: f64,
    pub font_size: f64,
    pub line_width: f64,
    pub label_rotation: f64,
}

impl Axis {
    #[must_use]
    pub const fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Horizontal, x, y, length)
    }

    #[must_use]
    pub const fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Vertical, x, y, length)
    }

    const fn new(orientation: AxisOrientation, x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation,
            x,
            y,
            length,
            labels: Vec::new(),
            color: Color::BLACK,
            tick_length: 4.0,
            font_size: 9.0,
            line_width: 0.8,
            label_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Rotate tick labels clockwise; rotated labels hang from their tick end-anchored.
    #[must_use]
    pub const fn with_label_rotation(mut self, degrees: f64) -> Self {
        self.label_rotation = degrees;
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = pos.mul_add(self.length, self.x);
                let rotated = self.label_rotation.abs() > f64::EPSILON;
                TickInfo {
                    start: (tick_x, self.y),
                    end: (tick_x, self.y + self.tick_length),
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size + 1.0,
                    anchor: if rotated {
                        TextAnchor::End
                    } else {
                        TextAnchor::Middle
                    },
                }
            }
            AxisOrientation::Vertical => {
                let tick_y = pos.mul_add(-self.length, self.y);
                TickInfo {
                    start: (self.x, tick_y),
                    end: (self.x - self.tick_length, tick_y),
                    label_x: self.x - self.tick_length - 3.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::End,
                }
            }
        }
    }
}

impl Element for Axis {
    fn draw(&self, canvas: &mut Canvas) {
        let paint = Paint::stroke(self.color, self.line_width);
        let end = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y - self.length),
        };
        canvas.line((self.x, self.y), end, paint);

        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);
            canvas.line(tick.start, tick.end, paint);
            canvas.text(
                Text::new(tick.label_x, tick.label_y, label.clone(), self.font_size)
                    .anchored(tick.anchor)
                    .with_color(self.color)
                    .rotated(self.label_rotation),
            );
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    Square,
    Circle,
    Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

impl LegendEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// Titled legend box anchored at its top-left corner.
#[derive(Debug, Clone)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub title: Option<String>,
    pub entries: Vec<LegendEntry>,
    pub marker: Marker,
    pub font_size: f64,
    pub line_width: f64,
}

impl Legend {
    #[must_use]
    pub const fn new(x: f64, y: f64, entries: Vec<LegendEntry>) -> Self {
        Self {
            x,
            y,
            title: None,
            entries,
            marker: Marker::Square,
            font_size: 9.0,
            line_width: 1.5,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub const fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    fn row_height(&self) -> f64 {
        self.font_size * 1.6
    }

    fn swatch(&self) -> f64 {
        self.font_size
    }

    /// Width the legend occupies including padding.
    #[must_use]
    pub fn width(&self) -> f64 {
        let entry_width = self
            .entries
            .iter()
            .map(|e| text_width(&e.label, self.font_size, false))
            .fold(0.0, f64::max)
            + self.swatch()
            + 6.0;
        let title_width = self
            .title
            .as_deref()
            .map_or(0.0, |t| text_width(t, self.font_size, true));
        entry_width.max(title_width) + 12.0
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Entry counts are small
    pub fn height(&self) -> f64 {
        let rows = self.entries.len() + usize::from(self.title.is_some());
        (rows as f64).mul_add(self.row_height(), 8.0)
    }

    fn draw_marker(&self, canvas: &mut Canvas, x: f64, center_y: f64, color: Color) {
        let size = self.swatch();
        match self.marker {
            Marker::Square => canvas.rect(
                x,
                center_y - size / 2.0,
                size,
                size,
                Paint::fill(color).with_stroke(Color::BLACK, 0.5),
            ),
            Marker::Circle => canvas.circle(
                x + size / 2.0,
                center_y,
                size / 2.0,
                Paint::fill(color).with_stroke(Color::BLACK, 0.5),
            ),
            Marker::Line => canvas.line(
                (x, center_y),
                (x + size, center_y),
                Paint::stroke(color, self.line_width),
            ),
        }
    }
}

impl Element for Legend {
    #[allow(clippy::cast_precision_loss)] // Entry counts are small
    fn draw(&self, canvas: &mut Canvas) {
        let row = self.row_height();
        let inner_x = self.x + 6.0;
        let mut top = self.y + 4.0;

        canvas.rect(
            self.x,
            self.y,
            self.width(),
            self.height(),
            Paint::fill(Color::WHITE).with_stroke(Color::rgb(0xCC, 0xCC, 0xCC), 0.6),
        );

        if let Some(title) = &self.title {
            canvas.text(Text::new(inner_x, top + row * 0.7, title.clone(), self.font_size).bold());
            top += row;
        }

        for (i, entry) in self.entries.iter().enumerate() {
            let center_y = (i as f64).mul_add(row, top) + row / 2.0;
            self.draw_marker(canvas, inner_x, center_y, entry.color);
            canvas.text(Text::new(
                inner_x + self.swatch() + 6.0,
                center_y + self.font_size / 3.0,
                entry.label.clone(),
                self.font_size,
            ));
        }
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
