//! Chart builders. Each one turns an augmented table into a [`Canvas`].

mod dot_profile;
mod donut;
mod heatmap;
mod layout;
mod line_ordered;
mod lollipop;
mod pie;
mod radar;
mod score_table;
mod stacked_area;
mod traffic_light;

use crate::config::RenderConfig;
use crate::table::AugmentedTable;
use crate::theme::Palette;

use super::canvas::Canvas;
use super::catalog::ChartKind;

/// Inputs shared by every chart builder.
#[derive(Debug, Clone, Copy)]
pub struct ChartContext<'a> {
    pub table: &'a AugmentedTable,
    pub palette: Palette,
    pub config: &'a RenderConfig,
}

impl ChartContext<'_> {
    const fn font_size(&self) -> f64 {
        self.config.base_font_size
    }

    fn title_size(&self) -> f64 {
        self.config.title_size()
    }

    fn small_size(&self) -> f64 {
        self.config.small_size()
    }

    const fn line_width(&self) -> f64 {
        self.config.line_width
    }
}

/// Compose `kind` for `ctx`. Pure: no I/O, no shared state.
#[must_use]
pub fn build(kind: ChartKind, ctx: &ChartContext<'_>) -> Canvas {
    match kind {
        ChartKind::TrafficLight => traffic_light::draw(ctx),
        ChartKind::Radar => radar::draw_per_study(ctx),
        ChartKind::ThemeRadar => radar::draw_by_overall_risk(ctx),
        ChartKind::Heatmap => heatmap::draw(ctx),
        ChartKind::DotProfile => dot_profile::draw(ctx),
        ChartKind::ScoreTable => score_table::draw(ctx),
        ChartKind::Donut => donut::draw(ctx),
        ChartKind::LineOrdered => line_ordered::draw(ctx),
        ChartKind::Lollipop => lollipop::draw(ctx),
        ChartKind::Pie => pie::draw(ctx),
        ChartKind::StackedArea => stacked_area::draw(ctx),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
