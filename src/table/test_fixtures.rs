//! Shared test fixtures for table and chart tests.

use super::{AugmentedTable, RawTable, StudyRow};
use super::columns::Column;

/// Canonical header row.
pub fn headers() -> Vec<String> {
    Column::ALL.iter().map(|c| c.header().to_string()).collect()
}

/// One CSV-style row: label, nine items, declared total, overall judgement.
pub fn row(label: &str, items: [u32; 9], total: i64, overall: &str) -> Vec<String> {
    let mut cells = vec![label.to_string()];
    cells.extend(items.iter().map(ToString::to_string));
    cells.push(total.to_string());
    cells.push(overall.to_string());
    cells
}

/// Four studies covering every tier in every domain; totals all consistent.
pub fn sample_raw() -> RawTable {
    RawTable {
        headers: headers(),
        rows: vec![
            row("Smith, 2020", [1, 1, 1, 1, 1, 1, 1, 1, 1], 9, "Low"),
            row("Jones, 2019", [1, 1, 0, 0, 1, 0, 1, 1, 0], 5, "Moderate"),
            row("Lee, 2021", [1, 0, 0, 0, 0, 0, 0, 1, 0], 2, "High"),
            row("Garcia, 2018", [1, 1, 1, 0, 1, 1, 1, 0, 0], 6, "Moderate"),
        ],
    }
}

pub fn sample_table() -> AugmentedTable {
    let studies = sample_raw()
        .rows
        .iter()
        .map(|cells| {
            let items: Vec<u32> = cells[1..10].iter().map(|c| c.parse().unwrap()).collect();
            StudyRow::from_items(
                cells[0].clone(),
                items.try_into().unwrap(),
                cells[10].parse().unwrap(),
                cells[11].clone(),
            )
        })
        .collect();
    AugmentedTable::from_studies(studies)
}

/// Sample table as CSV text.
pub fn sample_csv() -> String {
    let raw = sample_raw();
    let mut out = String::new();
    let quote = |cell: &str| {
        if cell.contains(',') {
            format!("\"{cell}\"")
        } else {
            cell.to_string()
        }
    };
    let header: Vec<String> = raw.headers.iter().map(|h| quote(h.as_str())).collect();
    out.push_str(&header.join(","));
    out.push('\n');
    for cells in &raw.rows {
        let line: Vec<String> = cells.iter().map(|c| quote(c.as_str())).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}
