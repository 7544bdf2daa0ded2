//! Composite traffic-light chart: bubble grid over per-domain stacked bars.

use crate::render::canvas::{Canvas, Text};
use crate::render::element::{Axis, Legend, LegendEntry, Marker};
use crate::render::format::text_width;
use crate::render::style::{Color, Paint, TextAnchor};
use crate::risk::{Domain, RiskLevel};
use crate::table::TierCounts;

use super::ChartContext;
use super::layout::{
    GRID, MARGIN, contrast_text, label_width, no_data, percent_label, tier_entries, title,
};

const TITLE: &str = "NOS Traffic-Light Plot";
const BAR_TITLE: &str = "Distribution of Risk-of-Bias Judgments by Domain";
const SLOT_WIDTH: f64 = 150.0;
const ROW_HEIGHT: f64 = 28.0;
const BAR_HEIGHT: f64 = 24.0;
const BAR_GAP: f64 = 12.0;
const MIN_MARKER: f64 = 3.0;

/// Vertical and horizontal anchors of both panels.
struct Layout {
    plot_x: f64,
    plot_width: f64,
    grid_top: f64,
    grid_height: f64,
    bars_top: f64,
    axis_y: f64,
    legend_x: f64,
}

impl Layout {
    #[allow(clippy::cast_precision_loss)] // Row counts are small
    fn new(ctx: &ChartContext<'_>) -> Self {
        let fs = ctx.font_size();
        let labels = label_width(ctx.table.iter().map(|r| r.label()), fs)
            .max(text_width("Study", fs, true));
        let plot_x = MARGIN + fs * 2.0 + labels + 12.0;
        let plot_width = SLOT_WIDTH * 3.0;
        let grid_top = MARGIN + ctx.title_size() + 16.0;
        let grid_height = ctx.table.len().max(1) as f64 * ROW_HEIGHT;
        let domain_labels = grid_top + grid_height + fs * 2.0;
        let bars_top = domain_labels + ctx.title_size() * 2.5;
        let bars_height = 3.0f64.mul_add(BAR_HEIGHT, 2.0 * BAR_GAP);
        Self {
            plot_x,
            plot_width,
            grid_top,
            grid_height,
            bars_top,
            axis_y: bars_top + bars_height + 6.0,
            legend_x: plot_x + plot_width + 24.0,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn slot_center(&self, slot: usize) -> f64 {
        SLOT_WIDTH.mul_add(slot as f64 + 0.5, self.plot_x)
    }

    #[allow(clippy::cast_precision_loss)]
    fn row_center(&self, row: usize) -> f64 {
        ROW_HEIGHT.mul_add(row as f64 + 0.5, self.grid_top)
    }

    #[allow(clippy::cast_precision_loss)]
    fn bar_top(&self, index: usize) -> f64 {
        (BAR_HEIGHT + BAR_GAP).mul_add(index as f64, self.bars_top)
    }
}

pub fn draw(ctx: &ChartContext<'_>) -> Canvas {
    let layout = Layout::new(ctx);
    let risk_legend = risk_legend(ctx, &layout);
    let tier_legend = tier_legend(ctx, &layout);

    let width = layout.legend_x + risk_legend.width().max(tier_legend.width()) + MARGIN;
    let height = layout.axis_y + ctx.font_size() * 4.0 + MARGIN;
    let mut canvas = Canvas::new(width, height).with_title(TITLE);

    let center_x = layout.plot_x + layout.plot_width / 2.0;
    title(&mut canvas, TITLE, center_x, MARGIN + ctx.title_size(), ctx.title_size());
    draw_grid(&mut canvas, ctx, &layout);
    draw_bubbles(&mut canvas, ctx, &layout);
    canvas.draw(&risk_legend);

    title(
        &mut canvas,
        BAR_TITLE,
        center_x,
        layout.bars_top - ctx.title_size(),
        ctx.title_size(),
    );
    draw_bars(&mut canvas, ctx, &layout);
    draw_bar_axes(&mut canvas, ctx, &layout);
    canvas.draw(&tier_legend);
    canvas
}

fn draw_grid(canvas: &mut Canvas, ctx: &ChartContext<'_>, layout: &Layout) {
    let fs = ctx.font_size();
    let bottom = layout.grid_top + layout.grid_height;

    for (slot, domain) in Domain::ALL.into_iter().enumerate() {
        let x = layout.slot_center(slot);
        canvas.line(
            (x, layout.grid_top),
            (x, bottom),
            Paint::stroke(GRID, 0.6).dashed(3.0, 3.0),
        );
        canvas.text(
            Text::new(x, bottom + fs * 1.5, domain.name(), fs)
                .anchored(TextAnchor::Middle)
                .bold(),
        );
    }
    canvas.rect(
        layout.plot_x,
        layout.grid_top,
        layout.plot_width,
        layout.grid_height,
        Paint::stroke(Color::BLACK, 0.8),
    );
    canvas.text(
        Text::new(MARGIN + fs, layout.grid_top + layout.grid_height / 2.0, "Study", fs)
            .anchored(TextAnchor::Middle)
            .bold()
            .rotated(-90.0),
    );
}

fn draw_bubbles(canvas: &mut Canvas, ctx: &ChartContext<'_>, layout: &Layout) {
    if ctx.table.is_empty() {
        no_data(
            canvas,
            layout.plot_x + layout.plot_width / 2.0,
            layout.row_center(0),
            ctx.font_size(),
        );
        return;
    }

    let max_radius = ROW_HEIGHT * 0.42;
    for (row_index, row) in ctx.table.iter().enumerate() {
        let y = layout.row_center(row_index);
        canvas.text(
            Text::new(
                layout.plot_x - 8.0,
                y + ctx.font_size() / 3.0,
                row.label(),
                ctx.font_size(),
            )
            .anchored(TextAnchor::End),
        );

        for (slot, domain) in Domain::ALL.into_iter().enumerate() {
            let x = layout.slot_center(slot);
            let color = ctx.palette.domain_color(row.score(domain), domain);
            let ratio = row.normalized(domain).min(1.0);
            if ratio <= 0.0 {
                canvas.circle(x, y, MIN_MARKER, Paint::stroke(color, 1.0));
            } else {
                let radius = (max_radius * ratio.sqrt()).max(MIN_MARKER);
                canvas.circle(
                    x,
                    y,
                    radius,
                    Paint::fill(color).with_stroke(Color::BLACK, 0.6),
                );
            }
        }
    }
}

fn draw_bars(canvas: &mut Canvas, ctx: &ChartContext<'_>, layout: &Layout) {
    let fs = ctx.font_size();
    for (index, domain) in Domain::ALL.into_iter().enumerate() {
        let top = layout.bar_top(index);
        let center_y = top + BAR_HEIGHT / 2.0;
        canvas.text(
            Text::new(layout.plot_x - 8.0, center_y + fs / 3.0, domain.name(), fs)
                .anchored(TextAnchor::End),
        );

        let mut x = layout.plot_x;
        for (level, percent) in TierCounts::for_domain(ctx.table, domain).stacked_percentages() {
            let width = layout.plot_width * percent / 100.0;
            if width <= 0.0 {
                continue;
            }
            let color = ctx.palette.color(level);
            canvas.rect(
                x,
                top,
                width,
                BAR_HEIGHT,
                Paint::fill(color).with_stroke(Color::WHITE, 0.8),
            );
            canvas.text(
                Text::new(x + width / 2.0, center_y + fs / 3.0, percent_label(percent), fs)
                    .anchored(TextAnchor::Middle)
                    .bold()
                    .with_color(contrast_text(level)),
            );
            x += width;
        }
    }
}

fn draw_bar_axes(canvas: &mut Canvas, ctx: &ChartContext<'_>, layout: &Layout) {
    let fs = ctx.font_size();
    let ticks = (0..=5)
        .map(|i| (f64::from(i) / 5.0, (i * 20).to_string()))
        .collect();
    canvas.draw(
        &Axis::horizontal(layout.plot_x, layout.axis_y, layout.plot_width)
            .with_font_size(ctx.small_size())
            .with_labels(ticks),
    );
    canvas.text(
        Text::new(
            layout.plot_x + layout.plot_width / 2.0,
            fs.mul_add(3.2, layout.axis_y),
            "Percentage of Studies (%)",
            fs,
        )
        .anchored(TextAnchor::Middle)
        .bold(),
    );
    let bars_middle = (layout.bars_top + layout.axis_y) / 2.0;
    canvas.text(
        Text::new(MARGIN + fs, bars_middle, "NOS Domain", fs)
            .anchored(TextAnchor::Middle)
            .bold()
            .rotated(-90.0),
    );
}

fn risk_legend(ctx: &ChartContext<'_>, layout: &Layout) -> Legend {
    let entries = [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High]
        .into_iter()
        .map(|level| LegendEntry::new(format!("{level} Risk"), ctx.palette.color(level)))
        .collect();
    Legend::new(layout.legend_x, layout.grid_top, entries)
        .with_title("Domain Risk")
        .with_marker(Marker::Circle)
        .with_font_size(ctx.font_size())
}

fn tier_legend(ctx: &ChartContext<'_>, layout: &Layout) -> Legend {
    Legend::new(layout.legend_x, layout.bars_top, tier_entries(&ctx.palette))
        .with_title("RoB")
        .with_font_size(ctx.font_size())
}

#[cfg(test)]
#[path = "traffic_light_tests.rs"]
mod tests;
