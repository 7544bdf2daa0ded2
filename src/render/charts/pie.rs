//! Single pie of the study-level Overall RoB judgements.

use std::f64::consts::TAU;

use crate::render::canvas::{Canvas, Text};
use crate::render::element::{Legend, LegendEntry};
use crate::render::style::{Color, Paint, TextAnchor};
use crate::risk::RiskLevel;
use crate::table::TierCounts;
use crate::theme::FALLBACK_COLOR;

use super::ChartContext;
use super::layout::{GRID, MARGIN, OTHER_LABEL, contrast_text, no_data, percent_label, polar, title, wedge};

const TITLE: &str = "Overall Risk of Bias";
const RADIUS: f64 = 150.0;

/// One pie slice and its legend entry.
struct Slice {
    label: String,
    count: usize,
    color: Color,
    text: Color,
}

/// Tier slices in stacking order, then the unrecognised remainder if any.
fn slices(ctx: &ChartContext<'_>, counts: &TierCounts) -> Vec<Slice> {
    let mut slices: Vec<Slice> = RiskLevel::STACK_ORDER
        .into_iter()
        .map(|level| Slice {
            label: level.label().to_string(),
            count: counts.count(level),
            color: ctx.palette.color(level),
            text: contrast_text(level),
        })
        .collect();
    let other = counts.total - counts.high - counts.moderate - counts.low;
    if other > 0 {
        slices.push(Slice {
            label: OTHER_LABEL.to_string(),
            count: other,
            color: FALLBACK_COLOR,
            text: Color::WHITE,
        });
    }
    slices
}

#[allow(clippy::cast_precision_loss)] // Study counts are small
pub fn draw(ctx: &ChartContext<'_>) -> Canvas {
    let fs = ctx.font_size();
    let counts = TierCounts::for_overall(ctx.table);
    let slices = slices(ctx, &counts);
    let share = |count: usize| {
        if counts.total == 0 {
            0.0
        } else {
            count as f64 / counts.total as f64 * 100.0
        }
    };

    let top = MARGIN + ctx.title_size() + 20.0;
    let center = (MARGIN + RADIUS + 8.0, top + RADIUS + 8.0);
    let entries = slices
        .iter()
        .map(|s| {
            LegendEntry::new(
                format!("{} ({}, {})", s.label, s.count, percent_label(share(s.count))),
                s.color,
            )
        })
        .collect();
    let legend = Legend::new(center.0 + RADIUS + 32.0, top + 8.0, entries)
        .with_title("Overall RoB")
        .with_font_size(ctx.small_size());

    let width = legend.x + legend.width() + MARGIN;
    let height = center.1 + RADIUS + MARGIN;
    let mut canvas = Canvas::new(width, height).with_title(TITLE);
    title(&mut canvas, TITLE, width / 2.0, MARGIN + ctx.title_size(), ctx.title_size());

    if counts.total == 0 {
        canvas.circle(center.0, center.1, RADIUS, Paint::stroke(GRID, 1.0));
        no_data(&mut canvas, center.0, center.1, fs);
    } else {
        let mut start = 0.0;
        for slice in slices.iter().filter(|s| s.count > 0) {
            let percent = share(slice.count);
            let sweep = TAU * percent / 100.0;
            canvas.polygon(
                wedge(center, RADIUS, 0.0, start, start + sweep),
                Paint::fill(slice.color).with_stroke(Color::WHITE, 1.5),
            );
            let (x, y) = polar(center, RADIUS * 0.62, start + sweep / 2.0);
            canvas.text(
                Text::new(x, y + fs / 3.0, percent_label(percent), fs)
                    .anchored(TextAnchor::Middle)
                    .bold()
                    .with_color(slice.text),
            );
            start += sweep;
        }
    }

    canvas.draw(&legend);
    canvas
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
