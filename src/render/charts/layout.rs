//! Geometry and labelling helpers shared by the chart builders.

use std::f64::consts::TAU;

use crate::render::canvas::{Canvas, Text};
use crate::render::element::LegendEntry;
use crate::render::format::text_width;
use crate::render::style::{Color, TextAnchor};
use crate::risk::{Domain, RiskLevel};
use crate::table::AugmentedTable;
use crate::theme::{FALLBACK_COLOR, Palette};

pub const MARGIN: f64 = 24.0;
pub const GRID: Color = Color::rgb(0xBF, 0xBF, 0xBF);
pub const MUTED: Color = Color::rgb(0x59, 0x59, 0x59);
pub const NO_DATA: &str = "No data available";
/// Label for judgements outside the three tiers.
pub const OTHER_LABEL: &str = "Other";

/// Ten-color categorical cycle for per-study series.
const CATEGORICAL: [Color; 10] = [
    Color::rgb(0x1F, 0x77, 0xB4),
    Color::rgb(0xFF, 0x7F, 0x0E),
    Color::rgb(0x2C, 0xA0, 0x2C),
    Color::rgb(0xD6, 0x27, 0x28),
    Color::rgb(0x94, 0x67, 0xBD),
    Color::rgb(0x8C, 0x56, 0x4B),
    Color::rgb(0xE3, 0x77, 0xC2),
    Color::rgb(0x7F, 0x7F, 0x7F),
    Color::rgb(0xBC, 0xBD, 0x22),
    Color::rgb(0x17, 0xBE, 0xCF),
];

#[must_use]
pub const fn categorical(index: usize) -> Color {
    CATEGORICAL[index % CATEGORICAL.len()]
}

/// Bold centred chart title with its baseline at `y`.
pub fn title(canvas: &mut Canvas, text: &str, center_x: f64, y: f64, size: f64) {
    canvas.text(
        Text::new(center_x, y, text, size)
            .anchored(TextAnchor::Middle)
            .bold(),
    );
}

/// Placeholder drawn in place of series when the table has no rows.
pub fn no_data(canvas: &mut Canvas, center_x: f64, center_y: f64, size: f64) {
    canvas.text(
        Text::new(center_x, center_y + size / 3.0, NO_DATA, size)
            .anchored(TextAnchor::Middle)
            .with_color(MUTED),
    );
}

/// Widest of `labels` at `size`, or zero for none.
pub fn label_width<'a>(labels: impl IntoIterator<Item = &'a str>, size: f64) -> f64 {
    labels
        .into_iter()
        .map(|l| text_width(l, size, false))
        .fold(0.0, f64::max)
}

#[must_use]
pub fn percent_label(percent: f64) -> String {
    format!("{percent:.0}%")
}

/// Map `value` from `[lo, hi]` onto `[out_lo, out_hi]`.
#[must_use]
pub fn scale(value: f64, (lo, hi): (f64, f64), (out_lo, out_hi): (f64, f64)) -> f64 {
    if (hi - lo).abs() < f64::EPSILON {
        return out_lo;
    }
    (value - lo) / (hi - lo) * (out_hi - out_lo) + out_lo
}

/// Point at `radius` from the centre; `angle` is radians clockwise from 12 o'clock.
#[must_use]
pub fn polar(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
    let (sin, cos) = angle.sin_cos();
    (radius.mul_add(sin, center.0), (-radius).mul_add(cos, center.1))
}

/// Polyline approximation of an arc, at most two degrees per segment.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)] // Segment count is bounded by 180
pub fn arc(center: (f64, f64), radius: f64, start: f64, end: f64) -> Vec<(f64, f64)> {
    let sweep = end - start;
    let steps = ((sweep.abs() / TAU) * 180.0).ceil().clamp(2.0, 180.0) as usize;
    (0..=steps)
        .map(|i| polar(center, radius, sweep.mul_add(i as f64 / steps as f64, start)))
        .collect()
}

/// Closed outline of a pie wedge, or of a donut segment when `inner > 0`.
#[must_use]
pub fn wedge(center: (f64, f64), outer: f64, inner: f64, start: f64, end: f64) -> Vec<(f64, f64)> {
    let mut points = arc(center, outer, start, end);
    if inner > 0.0 {
        let mut inner_arc = arc(center, inner, start, end);
        inner_arc.reverse();
        points.extend(inner_arc);
    } else {
        points.push(center);
    }
    points
}

/// Label color readable on a tier's fill.
#[must_use]
pub const fn contrast_text(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Moderate => Color::BLACK,
        RiskLevel::Low | RiskLevel::High => Color::WHITE,
    }
}

/// Legend entries for the three tiers in stacking order.
#[must_use]
pub fn tier_entries(palette: &Palette) -> Vec<LegendEntry> {
    RiskLevel::STACK_ORDER
        .iter()
        .map(|&level| LegendEntry::new(level.label(), palette.color(level)))
        .collect()
}

/// Tier entries plus a neutral entry when some judgements are unrecognised.
#[must_use]
pub fn overall_entries(palette: &Palette, has_other: bool) -> Vec<LegendEntry> {
    let mut entries = tier_entries(palette);
    if has_other {
        entries.push(LegendEntry::new(OTHER_LABEL, FALLBACK_COLOR));
    }
    entries
}

/// Top of a domain score axis: the largest domain maximum, or a larger observed score.
#[must_use]
pub fn score_ceiling(table: &AugmentedTable) -> u32 {
    let observed = table
        .iter()
        .flat_map(|row| Domain::ALL.map(|d| row.score(d)))
        .max()
        .unwrap_or(0);
    Domain::ALL
        .into_iter()
        .map(Domain::max_stars)
        .max()
        .unwrap_or(4)
        .max(observed)
}

/// Integer tick values covering `[lo, hi]` with at most `max_intervals` gaps.
///
/// Steps are 1, 2 or 5 times a power of ten, starting at the first multiple of
/// the step not below `lo`.
#[must_use]
pub fn integer_ticks(lo: i64, hi: i64, max_intervals: u32) -> Vec<i64> {
    let (lo, hi) = (i128::from(lo.min(hi)), i128::from(lo.max(hi)));
    let span = hi - lo;
    let limit = i128::from(max_intervals.max(1));
    let mut magnitude: i128 = 1;
    let step = loop {
        if let Some(step) = [1, 2, 5]
            .into_iter()
            .map(|m| m * magnitude)
            .find(|step| span / step <= limit)
        {
            break step;
        }
        magnitude *= 10;
    };

    let mut first = lo.div_euclid(step) * step;
    if first < lo {
        first += step;
    }
    std::iter::successors(Some(first), |t| Some(t + step))
        .take_while(|t| *t <= hi)
        .filter_map(|t| i64::try_from(t).ok())
        .collect()
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
