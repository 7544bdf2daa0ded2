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

fn paths(canvas: &Canvas) -> Vec<(&[(f64, f64)], Paint)> {
    canvas
        .shapes()
        .iter()
        .filter_map(|s| match s {
            Shape::Path { points, paint, .. } => Some((points.as_slice(), *paint)),
            _ => None,
        })
        .collect()
}

#[test]
fn three_dashed_reference_lines() {
    let canvas = render(&sample_table());
    let dashed = paths(&canvas)
        .into_iter()
        .filter(|(_, p)| p.dash.is_some())
        .count();
    assert_eq!(dashed, 3);
}

#[test]
fn one_three_point_profile_per_study() {
    let canvas = render(&sample_table());
    let profiles: Vec<_> = paths(&canvas)
        .into_iter()
        .filter(|(points, p)| points.len() == 3 && p.dash.is_none())
        .collect();
    assert_eq!(profiles.len(), 4);
    // Profiles run left to right in fixed domain order
    let (points, _) = profiles[0];
    assert!(points[0].0 < points[1].0 && points[1].0 < points[2].0);
}

#[test]
fn full_marks_touch_reference_lines() {
    let canvas = render(&sample_table());
    let all = paths(&canvas);
    let references: Vec<f64> = all
        .iter()
        .filter(|(_, p)| p.dash.is_some())
        .map(|(points, _)| points[0].1)
        .collect();
    let smith = all
        .iter()
        .find(|(points, p)| points.len() == 3 && p.dash.is_none())
        .unwrap()
        .0;
    for (vertex, reference) in smith.iter().zip(references) {
        assert!((vertex.1 - reference).abs() < 1e-9);
    }
}

#[test]
fn ceiling_grows_for_loose_scores() {
    let table = AugmentedTable::from_studies(vec![StudyRow::from_items(
        "Loose",
        [5, 5, 0, 0, 0, 0, 0, 0, 0],
        10,
        "Low",
    )]);
    assert_eq!(score_ceiling(&table), 10);
}
