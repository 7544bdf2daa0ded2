use super::*;
use crate::config::RenderConfig;
use crate::render::canvas::Shape;
use crate::table::test_fixtures::sample_table;
use crate::table::{AugmentedTable, StudyRow};
use crate::theme::Theme;

fn render(table: &AugmentedTable) -> Canvas {
    let config = RenderConfig::default();
    draw(&ChartContext {
        table,
        palette: Theme::TrafficLight.palette(),
        config: &config,
    })
}

fn segments(canvas: &Canvas) -> usize {
    canvas
        .shapes()
        .iter()
        .filter(|s| matches!(s, Shape::Path { closed: true, .. }))
        .count()
}

#[test]
fn sample_has_every_tier_in_every_domain() {
    assert_eq!(segments(&render(&sample_table())), 9);
}

#[test]
fn missing_tiers_are_captioned_as_zero() {
    let table = AugmentedTable::from_studies(vec![StudyRow::from_items("A", [1; 9], 9, "Low")]);
    let canvas = render(&table);
    assert_eq!(segments(&canvas), 3);
    let captions: Vec<&str> = canvas
        .texts()
        .map(|t| t.content.as_str())
        .filter(|c| c.starts_with("High:") || c.starts_with("Moderate:"))
        .collect();
    assert_eq!(captions, ["High: 0%", "Moderate: 0%"].repeat(3));
}

#[test]
fn segments_follow_tier_order() {
    let palette = Theme::TrafficLight.palette();
    let canvas = render(&sample_table());
    let fills: Vec<Color> = canvas
        .shapes()
        .iter()
        .filter_map(|s| match s {
            Shape::Path {
                closed: true,
                paint,
                ..
            } => paint.fill,
            _ => None,
        })
        .collect();
    assert_eq!(&fills[..3], &[palette.high, palette.moderate, palette.low]);
}

#[test]
fn empty_table_draws_outline_rings() {
    let canvas = render(&AugmentedTable::default());
    assert_eq!(segments(&canvas), 0);
    assert_eq!(
        canvas.texts().filter(|t| t.content == "No data available").count(),
        3
    );
}
