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

fn first_column(canvas: &Canvas) -> Vec<String> {
    canvas
        .texts()
        .filter(|t| t.anchor == TextAnchor::Start && !t.bold)
        .map(|t| t.content.clone())
        .collect()
}

#[test]
fn rows_sorted_descending_by_overall_text() {
    let canvas = render(&sample_table());
    // "Moderate" > "Low" > "High"; the two Moderate rows keep input order
    assert_eq!(
        first_column(&canvas),
        vec!["Jones, 2019", "Garcia, 2018", "Smith, 2020", "Lee, 2021"]
    );
}

#[test]
fn header_row_is_bold() {
    let canvas = render(&sample_table());
    let bold: Vec<&str> = canvas
        .texts()
        .filter(|t| t.bold)
        .map(|t| t.content.as_str())
        .collect();
    assert!(bold.contains(&"Outcome/Exposure"));
    assert!(bold.contains(&"Overall RoB"));
}

#[test]
fn row_background_follows_overall_judgement() {
    let palette = Theme::TrafficLight.palette();
    let table = AugmentedTable::from_studies(vec![
        StudyRow::from_items("A", [1; 9], 9, "high"),
        StudyRow::from_items("B", [1; 9], 9, "n/a"),
    ]);
    let canvas = render(&table);
    let fills: Vec<Color> = canvas
        .shapes()
        .iter()
        .filter_map(|s| match s {
            Shape::Rect { paint, .. } if paint.fill_opacity < 1.0 => paint.fill,
            _ => None,
        })
        .collect();
    // Six cells per row; "n/a" sorts above "high"
    assert_eq!(fills.len(), 12);
    assert!(fills[..6].iter().all(|c| *c == FALLBACK_COLOR));
    assert!(fills[6..].iter().all(|c| *c == palette.high));
}

#[test]
fn declared_total_is_shown() {
    let table = AugmentedTable::from_studies(vec![StudyRow::from_items("A", [1; 9], 8, "Low")]);
    let canvas = render(&table);
    assert!(canvas.texts().any(|t| t.content == "8"));
}

#[test]
fn empty_table_shows_placeholder_row() {
    let canvas = render(&AugmentedTable::default());
    assert!(canvas.texts().any(|t| t.content == "No data available"));
}
