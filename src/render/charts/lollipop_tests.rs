use super::*;
use crate::config::RenderConfig;
use crate::render::canvas::Shape;
use crate::table::test_fixtures::sample_table;
use crate::table::{AugmentedTable, StudyRow};
use crate::theme::{FALLBACK_COLOR, Theme};

fn render(table: &AugmentedTable) -> Canvas {
    let config = RenderConfig::default();
    draw(&ChartContext {
        table,
        palette: Theme::TrafficLight.palette(),
        config: &config,
    })
}

fn heads(canvas: &Canvas) -> Vec<(f64, f64, Color)> {
    canvas
        .shapes()
        .iter()
        .filter_map(|s| match s {
            Shape::Circle { cx, cy, r, paint } if (*r - HEAD_RADIUS).abs() < f64::EPSILON => {
                paint.fill.map(|fill| (*cx, *cy, fill))
            }
            _ => None,
        })
        .collect()
}

#[test]
fn range_always_spans_zero_to_nine() {
    assert_eq!(score_range([3, 5].into_iter()), (0, 9));
    assert_eq!(score_range([-1, 11].into_iter()), (-1, 11));
    assert_eq!(score_range(std::iter::empty()), (0, 9));
}

#[test]
fn heads_colored_by_overall_judgement() {
    let palette = Theme::TrafficLight.palette();
    let canvas = render(&sample_table());
    let colors: Vec<Color> = heads(&canvas).into_iter().map(|(_, _, c)| c).collect();
    // Ascending totals: Lee, Jones, Garcia, Smith.
    assert_eq!(
        colors,
        vec![palette.high, palette.moderate, palette.moderate, palette.low]
    );
}

#[test]
fn lowest_total_sits_at_bottom() {
    let canvas = render(&sample_table());
    let heads = heads(&canvas);
    assert!(heads[0].1 > heads[3].1);
    assert!(heads[0].0 < heads[3].0);
}

#[test]
fn unrecognised_judgement_uses_fallback_and_legend_entry() {
    let table = AugmentedTable::from_studies(vec![StudyRow::from_items("A", [1; 9], 9, "Unclear")]);
    let canvas = render(&table);
    assert_eq!(heads(&canvas)[0].2, FALLBACK_COLOR);
    assert!(canvas.texts().any(|t| t.content == "Other"));
}

#[test]
fn empty_table_shows_placeholder() {
    let canvas = render(&AugmentedTable::default());
    assert!(heads(&canvas).is_empty());
    assert!(canvas.texts().any(|t| t.content == "No data available"));
}

#[test]
fn extreme_declared_totals_keep_axis_bounded() {
    let table = AugmentedTable::from_studies(vec![
        StudyRow::from_items("Huge", [1; 9], i64::MAX, "Low"),
        StudyRow::from_items("Negative", [1; 9], i64::MIN, "High"),
    ]);
    let canvas = render(&table);
    assert_eq!(heads(&canvas).len(), 2);
    assert!(canvas.shapes().len() < 100);
}

#[test]
fn large_total_labels_round_steps() {
    let table = AugmentedTable::from_studies(vec![StudyRow::from_items(
        "Typo",
        [1; 9],
        2_000_000,
        "Low",
    )]);
    let canvas = render(&table);
    let labels: Vec<&str> = canvas.texts().map(|t| t.content.as_str()).collect();
    assert!(labels.contains(&"0"));
    assert!(labels.contains(&"200000"));
    assert!(labels.contains(&"2000000"));
    assert!(!labels.contains(&"1"));
}
