//! One donut per domain showing the share of studies in each tier.

use std::f64::consts::TAU;

use crate::render::canvas::{Canvas, Text};
use crate::render::element::Legend;
use crate::render::style::{Color, Paint, TextAnchor};
use crate::risk::Domain;
use crate::table::TierCounts;

use super::ChartContext;
use super::layout::{
    GRID, MARGIN, MUTED, contrast_text, no_data, percent_label, polar, tier_entries, title, wedge,
};

const TITLE: &str = "Risk-of-Bias Distribution by Domain";
const OUTER: f64 = 80.0;
const INNER: f64 = 46.0;
const SPACING: f64 = 220.0;

#[allow(clippy::cast_precision_loss)] // Three donuts
pub fn draw(ctx: &ChartContext<'_>) -> Canvas {
    let fs = ctx.font_size();
    let top = MARGIN + ctx.title_size() + 24.0;
    let first_x = MARGIN + SPACING / 2.0;
    let center_y = top + fs * 1.6 + OUTER;
    let legend = Legend::new(
        SPACING.mul_add(3.0, MARGIN) + 8.0,
        top,
        tier_entries(&ctx.palette),
    )
    .with_title("RoB")
    .with_font_size(ctx.small_size());

    let width = legend.x + legend.width() + MARGIN;
    let height = center_y + OUTER + fs * 6.0 + MARGIN;
    let mut canvas = Canvas::new(width, height).with_title(TITLE);
    title(&mut canvas, TITLE, width / 2.0, MARGIN + ctx.title_size(), ctx.title_size());

    for (index, domain) in Domain::ALL.into_iter().enumerate() {
        let center = (SPACING.mul_add(index as f64, first_x), center_y);
        canvas.text(
            Text::new(center.0, top + fs, domain.name(), fs)
                .anchored(TextAnchor::Middle)
                .bold(),
        );
        let counts = TierCounts::for_domain(ctx.table, domain);
        draw_donut(&mut canvas, ctx, center, &counts);
        draw_caption(&mut canvas, ctx, center, &counts);
    }

    canvas.draw(&legend);
    canvas
}

fn draw_donut(canvas: &mut Canvas, ctx: &ChartContext<'_>, center: (f64, f64), counts: &TierCounts) {
    let fs = ctx.font_size();
    if counts.total == 0 {
        canvas.circle(center.0, center.1, OUTER, Paint::stroke(GRID, 1.0));
        canvas.circle(center.0, center.1, INNER, Paint::stroke(GRID, 1.0));
        no_data(canvas, center.0, center.1, ctx.small_size());
        return;
    }

    let mut start = 0.0;
    for (level, percent) in counts.stacked_percentages() {
        if percent <= 0.0 {
            continue;
        }
        let sweep = TAU * percent / 100.0;
        let color = ctx.palette.color(level);
        canvas.polygon(
            wedge(center, OUTER, INNER, start, start + sweep),
            Paint::fill(color).with_stroke(Color::WHITE, 1.0),
        );
        let (x, y) = polar(center, (OUTER + INNER) / 2.0, start + sweep / 2.0);
        canvas.text(
            Text::new(x, y + fs / 3.0, percent_label(percent), ctx.small_size())
                .anchored(TextAnchor::Middle)
                .bold()
                .with_color(contrast_text(level)),
        );
        start += sweep;
    }
    canvas.text(
        Text::new(center.0, center.1 + fs / 3.0, format!("n = {}", counts.total), fs)
            .anchored(TextAnchor::Middle),
    );
}

/// Every tier listed under the donut, absent ones as 0%.
#[allow(clippy::cast_precision_loss)]
fn draw_caption(canvas: &mut Canvas, ctx: &ChartContext<'_>, center: (f64, f64), counts: &TierCounts) {
    let size = ctx.small_size();
    for (row, (level, percent)) in counts.stacked_percentages().into_iter().enumerate() {
        let y = (size * 1.4).mul_add(row as f64, center.1 + OUTER + size * 2.0);
        canvas.text(
            Text::new(center.0, y, format!("{level}: {}", percent_label(percent)), size)
                .anchored(TextAnchor::Middle)
                .with_color(MUTED),
        );
    }
}

#[cfg(test)]
#[path = "donut_tests.rs"]
mod tests;
