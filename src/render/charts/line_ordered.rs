//! Domain scores per study, studies ordered by total score.

use crate::render::canvas::{Canvas, Text};
use crate::render::element::{Axis, Legend, LegendEntry, Marker};
use crate::render::style::{Color, Paint, TextAnchor};
use crate::risk::Domain;

use super::ChartContext;
use super::layout::{
    GRID, MARGIN, categorical, label_width, no_data, scale, score_ceiling, title,
};

const TITLE: &str = "Domain Scores Ordered by Total Score";
const STEP: f64 = 48.0;
const MIN_PLOT_WIDTH: f64 = 240.0;
const PLOT_HEIGHT: f64 = 260.0;
const LABEL_ROTATION: f64 = -40.0;

#[allow(clippy::cast_precision_loss)] // Study counts are small
pub fn draw(ctx: &ChartContext<'_>) -> Canvas {
    let fs = ctx.font_size();
    let rows = ctx.table.sorted_by_total();
    let ceiling = score_ceiling(ctx.table);

    let plot_x = MARGIN + fs * 4.0;
    let plot_top = MARGIN + ctx.title_size() + 20.0;
    let plot_bottom = plot_top + PLOT_HEIGHT;
    let plot_width = (STEP * rows.len() as f64).max(MIN_PLOT_WIDTH);
    // Rotated labels hang below the axis by roughly sin(40deg) of their width.
    let label_drop = label_width(rows.iter().map(|r| r.label()), ctx.small_size()) * 0.65;

    let x_of = |index: usize| {
        if rows.len() < 2 {
            plot_x + plot_width / 2.0
        } else {
            scale(index as f64, (0.0, (rows.len() - 1) as f64), (plot_x + STEP / 2.0, plot_x + plot_width - STEP / 2.0))
        }
    };
    let y_of = |score: u32| scale(f64::from(score), (0.0, f64::from(ceiling)), (plot_bottom, plot_top));

    let entries = Domain::ALL
        .into_iter()
        .enumerate()
        .map(|(i, d)| LegendEntry::new(d.name(), categorical(i)))
        .collect();
    let legend = Legend::new(plot_x + plot_width + 20.0, plot_top, entries)
        .with_title("Domain")
        .with_marker(Marker::Line)
        .with_font_size(ctx.small_size())
        .with_line_width(ctx.line_width());

    let width = legend.x + legend.width() + MARGIN;
    let height = plot_bottom + label_drop + fs * 4.0 + MARGIN;
    let mut canvas = Canvas::new(width, height).with_title(TITLE);
    title(&mut canvas, TITLE, width / 2.0, MARGIN + ctx.title_size(), ctx.title_size());

    for score in 1..=ceiling {
        let y = y_of(score);
        canvas.line((plot_x, y), (plot_x + plot_width, y), Paint::stroke(GRID, 0.6).dashed(3.0, 3.0));
    }
    canvas.draw(
        &Axis::vertical(plot_x, plot_bottom, PLOT_HEIGHT)
            .with_font_size(ctx.small_size())
            .with_labels(
                (0..=ceiling)
                    .map(|s| (f64::from(s) / f64::from(ceiling), s.to_string()))
                    .collect(),
            ),
    );
    let ticks = rows
        .iter()
        .enumerate()
        .map(|(i, row)| ((x_of(i) - plot_x) / plot_width, row.label().to_string()))
        .collect();
    canvas.draw(
        &Axis::horizontal(plot_x, plot_bottom, plot_width)
            .with_font_size(ctx.small_size())
            .with_label_rotation(LABEL_ROTATION)
            .with_labels(ticks),
    );
    canvas.text(
        Text::new(MARGIN + fs, (plot_top + plot_bottom) / 2.0, "Domain Score", fs)
            .anchored(TextAnchor::Middle)
            .bold()
            .rotated(-90.0),
    );
    canvas.text(
        Text::new(plot_x + plot_width / 2.0, height - MARGIN, "Study (ordered by total score)", fs)
            .anchored(TextAnchor::Middle)
            .bold(),
    );

    if rows.is_empty() {
        no_data(&mut canvas, plot_x + plot_width / 2.0, (plot_top + plot_bottom) / 2.0, fs);
    }

    for (series, domain) in Domain::ALL.into_iter().enumerate() {
        let color = categorical(series);
        let points: Vec<(f64, f64)> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| (x_of(i), y_of(row.score(domain))))
            .collect();
        canvas.polyline(points.clone(), Paint::stroke(color, ctx.line_width()));
        for (x, y) in points {
            canvas.circle(x, y, 3.5, Paint::fill(color).with_stroke(Color::WHITE, 0.6));
        }
    }

    canvas.draw(&legend);
    canvas
}

#[cfg(test)]
#[path = "line_ordered_tests.rs"]
mod tests;
