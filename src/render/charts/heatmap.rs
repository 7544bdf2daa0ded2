//! Study-by-domain heatmap colored on the ordinal risk scale.

use crate::render::canvas::{Canvas, Text};
use crate::render::element::{Legend, LegendEntry};
use crate::render::style::{Color, Paint, TextAnchor};
use crate::risk::{Domain, RiskLevel};

use super::ChartContext;
use super::layout::{MARGIN, label_width, no_data, title};

const TITLE: &str = "NOS Domain Risk Heatmap";
const CELL_WIDTH: f64 = 120.0;
const CELL_HEIGHT: f64 = 26.0;

#[allow(clippy::cast_precision_loss)] // Row counts are small
pub fn draw(ctx: &ChartContext<'_>) -> Canvas {
    let fs = ctx.font_size();
    let grid_x = MARGIN + label_width(ctx.table.iter().map(|r| r.label()), fs) + 12.0;
    let grid_top = MARGIN + ctx.title_size() + fs * 3.0;
    let grid_width = CELL_WIDTH * 3.0;
    let rows = ctx.table.len().max(1) as f64;

    // Scale from High (0) to Low (2), labelled by tier.
    let entries = [RiskLevel::High, RiskLevel::Moderate, RiskLevel::Low]
        .into_iter()
        .map(|level| {
            LegendEntry::new(
                format!("{} ({})", level.label(), level.ordinal()),
                ctx.palette.ordinal_color(level.ordinal()),
            )
        })
        .collect();
    let legend = Legend::new(grid_x + grid_width + 20.0, grid_top, entries)
        .with_title("Risk")
        .with_font_size(ctx.small_size());

    let width = legend.x + legend.width() + MARGIN;
    let height = CELL_HEIGHT.mul_add(rows, grid_top).max(grid_top + legend.height()) + MARGIN;
    let mut canvas = Canvas::new(width, height).with_title(TITLE);
    title(&mut canvas, TITLE, width / 2.0, MARGIN + ctx.title_size(), ctx.title_size());

    for (slot, domain) in Domain::ALL.into_iter().enumerate() {
        let x = CELL_WIDTH.mul_add(slot as f64 + 0.5, grid_x);
        canvas.text(
            Text::new(x, grid_top - fs * 0.8, domain.name(), fs)
                .anchored(TextAnchor::Middle)
                .bold(),
        );
    }

    if ctx.table.is_empty() {
        no_data(&mut canvas, grid_x + grid_width / 2.0, grid_top + CELL_HEIGHT / 2.0, fs);
    }

    for (row_index, row) in ctx.table.iter().enumerate() {
        let y = CELL_HEIGHT.mul_add(row_index as f64, grid_top);
        canvas.text(
            Text::new(grid_x - 8.0, y + CELL_HEIGHT / 2.0 + fs / 3.0, row.label(), fs)
                .anchored(TextAnchor::End),
        );
        for (slot, domain) in Domain::ALL.into_iter().enumerate() {
            let color = ctx.palette.ordinal_color(row.risk(domain).ordinal());
            canvas.rect(
                CELL_WIDTH.mul_add(slot as f64, grid_x),
                y,
                CELL_WIDTH,
                CELL_HEIGHT,
                Paint::fill(color).with_stroke(Color::WHITE, 1.0),
            );
        }
    }

    canvas.draw(&legend);
    canvas
}

#[cfg(test)]
#[path = "heatmap_tests.rs"]
mod tests;
