//! Per-study raw domain scores joined across the domains.

use crate::render::canvas::{Canvas, Text};
use crate::render::element::{Axis, Legend, LegendEntry, Marker};
use crate::render::style::{Color, Paint, TextAnchor};
use crate::risk::Domain;

use super::ChartContext;
use super::layout::{MARGIN, MUTED, categorical, no_data, scale, score_ceiling, title};

const TITLE: &str = "Domain Score Profiles";
const SLOT_WIDTH: f64 = 140.0;
const PLOT_HEIGHT: f64 = 280.0;
const MARKER_RADIUS: f64 = 4.0;

#[allow(clippy::cast_precision_loss)] // Slot and row counts are small
pub fn draw(ctx: &ChartContext<'_>) -> Canvas {
    let fs = ctx.font_size();
    let plot_x = MARGIN + fs * 4.0;
    let plot_top = MARGIN + ctx.title_size() + 20.0;
    let plot_bottom = plot_top + PLOT_HEIGHT;
    let plot_width = SLOT_WIDTH * 3.0;
    let ceiling = score_ceiling(ctx.table);
    let y_of = |score: f64| scale(score, (0.0, f64::from(ceiling)), (plot_bottom, plot_top));
    let x_of = |slot: usize| SLOT_WIDTH.mul_add(slot as f64 + 0.5, plot_x);

    let entries: Vec<LegendEntry> = ctx
        .table
        .iter()
        .enumerate()
        .map(|(i, row)| LegendEntry::new(row.label(), categorical(i)))
        .collect();
    let legend = Legend::new(plot_x + plot_width + 20.0, plot_top, entries)
        .with_marker(Marker::Line)
        .with_font_size(ctx.small_size())
        .with_line_width(ctx.line_width());

    let width = legend.x + legend.width() + MARGIN;
    let height = (plot_bottom + fs * 4.0).max(plot_top + legend.height()) + MARGIN;
    let mut canvas = Canvas::new(width, height).with_title(TITLE);
    title(&mut canvas, TITLE, width / 2.0, MARGIN + ctx.title_size(), ctx.title_size());

    let ticks = (0..=ceiling)
        .map(|s| (f64::from(s) / f64::from(ceiling), s.to_string()))
        .collect();
    canvas.draw(
        &Axis::vertical(plot_x, plot_bottom, PLOT_HEIGHT)
            .with_font_size(ctx.small_size())
            .with_labels(ticks),
    );
    canvas.draw(&Axis::horizontal(plot_x, plot_bottom, plot_width).with_font_size(fs).with_labels(
        Domain::ALL
            .iter()
            .enumerate()
            .map(|(slot, d)| ((slot as f64 + 0.5) / 3.0, d.name().to_string()))
            .collect(),
    ));
    canvas.text(
        Text::new(MARGIN + fs, (plot_top + plot_bottom) / 2.0, "Stars", fs)
            .anchored(TextAnchor::Middle)
            .bold()
            .rotated(-90.0),
    );

    // Reference line at each domain's maximum.
    for (slot, domain) in Domain::ALL.into_iter().enumerate() {
        let y = y_of(f64::from(domain.max_stars()));
        let x = x_of(slot);
        canvas.line(
            (x - SLOT_WIDTH * 0.35, y),
            (x + SLOT_WIDTH * 0.35, y),
            Paint::stroke(MUTED, 1.0).dashed(4.0, 3.0),
        );
    }

    if ctx.table.is_empty() {
        no_data(&mut canvas, plot_x + plot_width / 2.0, (plot_top + plot_bottom) / 2.0, fs);
    }

    for (i, row) in ctx.table.iter().enumerate() {
        let color = categorical(i);
        let points: Vec<(f64, f64)> = Domain::ALL
            .into_iter()
            .enumerate()
            .map(|(slot, domain)| (x_of(slot), y_of(f64::from(row.score(domain)))))
            .collect();
        canvas.polyline(points.clone(), Paint::stroke(color, ctx.line_width()));
        for (x, y) in points {
            canvas.circle(
                x,
                y,
                MARKER_RADIUS,
                Paint::fill(color).with_stroke(Color::WHITE, 0.6),
            );
        }
    }

    if !legend.entries.is_empty() {
        canvas.draw(&legend);
    }
    canvas
}

#[cfg(test)]
#[path = "dot_profile_tests.rs"]
mod tests;
