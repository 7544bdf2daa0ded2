//! Total NOS score per study as horizontal lollipops colored by Overall RoB.

use crate::render::canvas::{Canvas, Text};
use crate::render::element::{Axis, Legend};
use crate::render::style::{Color, Paint, TextAnchor};

use super::ChartContext;
use super::layout::{
    GRID, MARGIN, integer_ticks, label_width, no_data, overall_entries, scale, title,
};

const TITLE: &str = "Total NOS Score by Study";
const ROW_HEIGHT: f64 = 28.0;
const PLOT_WIDTH: f64 = 360.0;
const HEAD_RADIUS: f64 = 6.0;
/// Upper end of the axis unless a declared total exceeds it.
const NOS_MAX: i64 = 9;
/// Gaps between labelled ticks on the score axis, at most.
const MAX_TICK_INTERVALS: u32 = 10;

/// Score range covering zero, the NOS maximum, and every declared total.
fn score_range(totals: impl Iterator<Item = i64> + Clone) -> (i64, i64) {
    let lo = totals.clone().min().unwrap_or(0).min(0);
    let hi = totals.max().unwrap_or(NOS_MAX).max(NOS_MAX);
    (lo, hi)
}

#[allow(clippy::cast_precision_loss)] // Scores and row counts are small
pub fn draw(ctx: &ChartContext<'_>) -> Canvas {
    let fs = ctx.font_size();
    let rows = ctx.table.sorted_by_total();
    let (lo, hi) = score_range(rows.iter().map(|r| r.study.total_score));
    let has_other = rows.iter().any(|r| r.study.overall_risk().is_none());

    let plot_x = MARGIN + label_width(rows.iter().map(|r| r.label()), fs) + 14.0;
    let plot_top = MARGIN + ctx.title_size() + 20.0;
    let plot_height = ROW_HEIGHT * rows.len().max(1) as f64;
    let plot_bottom = plot_top + plot_height;
    let x_of = |score: i64| scale(score as f64, (lo as f64, hi as f64), (plot_x, plot_x + PLOT_WIDTH));
    // Lowest total at the bottom.
    let y_of = |index: usize| plot_bottom - ROW_HEIGHT * (index as f64 + 0.5);

    let legend = Legend::new(plot_x + PLOT_WIDTH + 24.0, plot_top, overall_entries(&ctx.palette, has_other))
        .with_title("Overall RoB")
        .with_font_size(ctx.small_size());

    let width = legend.x + legend.width() + MARGIN;
    let height = (plot_bottom + fs * 4.0).max(plot_top + legend.height()) + MARGIN;
    let mut canvas = Canvas::new(width, height).with_title(TITLE);
    title(&mut canvas, TITLE, width / 2.0, MARGIN + ctx.title_size(), ctx.title_size());

    let ticks = integer_ticks(lo, hi, MAX_TICK_INTERVALS)
        .into_iter()
        .map(|s| ((x_of(s) - plot_x) / PLOT_WIDTH, s.to_string()))
        .collect();
    canvas.draw(
        &Axis::horizontal(plot_x, plot_bottom, PLOT_WIDTH)
            .with_font_size(ctx.small_size())
            .with_labels(ticks),
    );
    canvas.line((plot_x, plot_top), (plot_x, plot_bottom), Paint::stroke(Color::BLACK, 0.8));
    canvas.text(
        Text::new(plot_x + PLOT_WIDTH / 2.0, plot_bottom + fs * 3.0, "Total NOS Score", fs)
            .anchored(TextAnchor::Middle)
            .bold(),
    );

    if rows.is_empty() {
        no_data(&mut canvas, plot_x + PLOT_WIDTH / 2.0, (plot_top + plot_bottom) / 2.0, fs);
    }

    let base = x_of(lo.max(0));
    for (index, row) in rows.iter().enumerate() {
        let y = y_of(index);
        let color = ctx.palette.label_color(&row.study.overall_rob);
        let x = x_of(row.study.total_score);
        canvas.line((plot_x, y), (plot_x + PLOT_WIDTH, y), Paint::stroke(GRID, 0.4));
        canvas.line((base, y), (x, y), Paint::stroke(color, ctx.line_width() * 1.5));
        let head = Paint::fill(color).with_stroke(Color::BLACK, 0.6);
        canvas.circle(x, y, HEAD_RADIUS, head);
        canvas.text(
            Text::new(plot_x - 8.0, y + fs / 3.0, row.label(), fs).anchored(TextAnchor::End),
        );
    }

    canvas.draw(&legend);
    canvas
}

#[cfg(test)]
#[path = "lollipop_tests.rs"]
mod tests;
