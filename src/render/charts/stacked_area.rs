//! Tier percentages stacked as areas across the three domains.

use crate::render::canvas::{Canvas, Text};
use crate::render::element::{Axis, Legend};
use crate::render::style::{Color, Paint, TextAnchor};
use crate::risk::Domain;
use crate::table::TierCounts;

use super::ChartContext;
use super::layout::{GRID, MARGIN, no_data, scale, tier_entries, title};

const TITLE: &str = "Risk-of-Bias Proportions Across Domains";
const PLOT_WIDTH: f64 = 420.0;
const PLOT_HEIGHT: f64 = 280.0;
const FILL_OPACITY: f64 = 0.85;

/// Cumulative band edges per domain, one `(lower, upper)` pair per tier in stacking order.
fn bands(ctx: &ChartContext<'_>) -> [[(f64, f64); 3]; 3] {
    Domain::ALL.map(|domain| {
        let mut floor = 0.0;
        TierCounts::for_domain(ctx.table, domain)
            .stacked_percentages()
            .map(|(_, percent)| {
                let band = (floor, floor + percent);
                floor += percent;
                band
            })
    })
}

#[allow(clippy::cast_precision_loss)] // Three domains
pub fn draw(ctx: &ChartContext<'_>) -> Canvas {
    let fs = ctx.font_size();
    let plot_x = MARGIN + fs * 5.0;
    let plot_top = MARGIN + ctx.title_size() + 20.0;
    let plot_bottom = plot_top + PLOT_HEIGHT;
    let x_of = |slot: usize| scale(slot as f64, (0.0, 2.0), (plot_x, plot_x + PLOT_WIDTH));
    let y_of = |percent: f64| scale(percent, (0.0, 100.0), (plot_bottom, plot_top));

    let legend = Legend::new(plot_x + PLOT_WIDTH + 20.0, plot_top, tier_entries(&ctx.palette))
        .with_title("RoB")
        .with_font_size(ctx.small_size());

    let width = legend.x + legend.width() + MARGIN;
    let height = plot_bottom + fs * 5.0 + MARGIN;
    let mut canvas = Canvas::new(width, height).with_title(TITLE);
    title(&mut canvas, TITLE, width / 2.0, MARGIN + ctx.title_size(), ctx.title_size());

    for percent in [20.0, 40.0, 60.0, 80.0, 100.0] {
        let y = y_of(percent);
        canvas.line((plot_x, y), (plot_x + PLOT_WIDTH, y), Paint::stroke(GRID, 0.5).dashed(3.0, 3.0));
    }

    if ctx.table.is_empty() {
        no_data(&mut canvas, plot_x + PLOT_WIDTH / 2.0, (plot_top + plot_bottom) / 2.0, fs);
    } else {
        let bands = bands(ctx);
        for (tier, entry) in tier_entries(&ctx.palette).iter().enumerate() {
            let upper = (0..3).map(|slot| (x_of(slot), y_of(bands[slot][tier].1)));
            let lower = (0..3).rev().map(|slot| (x_of(slot), y_of(bands[slot][tier].0)));
            let outline: Vec<(f64, f64)> = upper.chain(lower).collect();
            canvas.polygon(
                outline,
                Paint::fill(entry.color)
                    .with_opacity(FILL_OPACITY)
                    .with_stroke(Color::WHITE, 0.8),
            );
        }
    }

    canvas.draw(
        &Axis::vertical(plot_x, plot_bottom, PLOT_HEIGHT)
            .with_font_size(ctx.small_size())
            .with_labels((0..=5).map(|i| (f64::from(i) / 5.0, format!("{}", i * 20))).collect()),
    );
    canvas.draw(
        &Axis::horizontal(plot_x, plot_bottom, PLOT_WIDTH)
            .with_font_size(fs)
            .with_labels(
                Domain::ALL
                    .iter()
                    .enumerate()
                    .map(|(slot, d)| (slot as f64 / 2.0, d.name().to_string()))
                    .collect(),
            ),
    );
    canvas.text(
        Text::new(MARGIN + fs, (plot_top + plot_bottom) / 2.0, "Percentage of Studies (%)", fs)
            .anchored(TextAnchor::Middle)
            .bold()
            .rotated(-90.0),
    );
    canvas.text(
        Text::new(plot_x + PLOT_WIDTH / 2.0, plot_bottom + fs * 3.5, "NOS Domain", fs)
            .anchored(TextAnchor::Middle)
            .bold(),
    );

    canvas.draw(&legend);
    canvas
}

#[cfg(test)]
#[path = "stacked_area_tests.rs"]
mod tests;
