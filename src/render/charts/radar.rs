//! Radar charts over the three domains, each axis normalised to 0-1.

use std::f64::consts::TAU;

use crate::render::canvas::{Canvas, Text};
use crate::render::element::{Legend, LegendEntry, Marker};
use crate::render::style::{Color, Paint, TextAnchor};
use crate::risk::Domain;
use crate::table::AggregatedRow;

use super::ChartContext;
use super::layout::{
    GRID, MARGIN, MUTED, categorical, no_data, overall_entries, polar, title,
};

const RADIUS: f64 = 150.0;
const RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Variant A: one polygon per study, categorical colors.
pub fn draw_per_study(ctx: &ChartContext<'_>) -> Canvas {
    let entries = ctx
        .table
        .iter()
        .enumerate()
        .map(|(i, row)| LegendEntry::new(row.label(), categorical(i)))
        .collect();
    draw_radar(
        ctx,
        "NOS Domain Scores Radar Chart",
        entries,
        |i, _| categorical(i),
        0.1,
    )
}

/// Variant B: polygons colored by each study's Overall RoB.
pub fn draw_by_overall_risk(ctx: &ChartContext<'_>) -> Canvas {
    let has_other = ctx
        .table
        .iter()
        .any(|row| row.study.overall_risk().is_none());
    let palette = ctx.palette;
    draw_radar(
        ctx,
        "Domain Scores by Overall Risk of Bias",
        overall_entries(&palette, has_other),
        move |_, row| palette.label_color(&row.study.overall_rob),
        0.25,
    )
}

/// Axis angle for a domain, clockwise from the top.
#[allow(clippy::cast_precision_loss)]
fn axis_angle(index: usize) -> f64 {
    TAU * index as f64 / Domain::ALL.len() as f64
}

/// Polygon vertices in axis order, closed by repeating the first.
fn polygon(center: (f64, f64), row: &AggregatedRow) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = Domain::ALL
        .into_iter()
        .enumerate()
        .map(|(i, domain)| {
            let value = row.normalized(domain).clamp(0.0, 1.0);
            polar(center, RADIUS * value, axis_angle(i))
        })
        .collect();
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

fn draw_radar(
    ctx: &ChartContext<'_>,
    chart_title: &str,
    entries: Vec<LegendEntry>,
    color_of: impl Fn(usize, &AggregatedRow) -> Color,
    fill_opacity: f64,
) -> Canvas {
    let fs = ctx.font_size();
    let center = (
        MARGIN + RADIUS + fs * 7.0,
        MARGIN + ctx.title_size() + 40.0 + RADIUS,
    );
    let legend_x = center.0 + RADIUS + fs * 7.0;
    let legend = Legend::new(legend_x, center.1 - RADIUS, entries)
        .with_marker(Marker::Square)
        .with_font_size(ctx.small_size());

    let width = legend_x + legend.width() + MARGIN;
    let height = (center.1 + RADIUS + fs * 3.0 + MARGIN)
        .max(center.1 - RADIUS + legend.height() + MARGIN);
    let mut canvas = Canvas::new(width, height).with_title(chart_title);
    let title_size = ctx.title_size();
    title(&mut canvas, chart_title, width / 2.0, MARGIN + title_size, title_size);

    draw_frame(&mut canvas, ctx, center);

    if ctx.table.is_empty() {
        no_data(&mut canvas, center.0, center.1, fs);
    }
    for (i, row) in ctx.table.iter().enumerate() {
        let color = color_of(i, row);
        canvas.polygon(
            polygon(center, row),
            Paint::fill(color)
                .with_opacity(fill_opacity)
                .with_stroke(color, ctx.line_width()),
        );
    }

    if !legend.entries.is_empty() {
        canvas.draw(&legend);
    }
    canvas
}

fn draw_frame(canvas: &mut Canvas, ctx: &ChartContext<'_>, center: (f64, f64)) {
    let fs = ctx.font_size();
    for ring in RINGS {
        let mut points: Vec<(f64, f64)> = (0..Domain::ALL.len())
            .map(|i| polar(center, RADIUS * ring, axis_angle(i)))
            .collect();
        points.push(points[0]);
        canvas.polyline(points, Paint::stroke(GRID, 0.6));
        let (x, y) = polar(center, RADIUS * ring, 0.0);
        canvas.text(
            Text::new(x + 3.0, y - 2.0, format!("{ring:.2}"), ctx.small_size() * 0.9)
                .with_color(MUTED),
        );
    }

    for (i, domain) in Domain::ALL.into_iter().enumerate() {
        let angle = axis_angle(i);
        canvas.line(center, polar(center, RADIUS, angle), Paint::stroke(GRID, 0.6));
        let (x, y) = polar(center, RADIUS + fs * 1.2, angle);
        let anchor = if (x - center.0).abs() < 1.0 {
            TextAnchor::Middle
        } else if x > center.0 {
            TextAnchor::Start
        } else {
            TextAnchor::End
        };
        canvas.text(Text::new(x, y + fs / 3.0, domain.name(), fs).anchored(anchor).bold());
    }
}

#[cfg(test)]
#[path = "radar_tests.rs"]
mod tests;
