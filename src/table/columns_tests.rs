use super::*;

fn canonical_headers() -> Vec<String> {
    Column::ALL.iter().map(|c| c.header().to_string()).collect()
}

#[test]
fn maps_canonical_order() {
    let map = ColumnMap::from_headers(&canonical_headers()).unwrap();
    for (i, column) in Column::ALL.iter().enumerate() {
        assert_eq!(map.index(*column), i);
    }
}

#[test]
fn column_order_is_not_significant() {
    let mut headers = canonical_headers();
    headers.reverse();
    let map = ColumnMap::from_headers(&headers).unwrap();
    assert_eq!(map.index(Column::Study), 11);
    assert_eq!(map.index(Column::OverallRob), 0);
}

#[test]
fn extra_columns_are_ignored() {
    let mut headers = vec!["Notes".to_string()];
    headers.extend(canonical_headers());
    let map = ColumnMap::from_headers(&headers).unwrap();
    assert_eq!(map.index(Column::Study), 1);
}

#[test]
fn missing_total_score_is_named() {
    let headers: Vec<String> = canonical_headers()
        .into_iter()
        .filter(|h| h != "Total Score")
        .collect();
    let err = ColumnMap::from_headers(&headers).unwrap_err();
    match err {
        NosPlotError::MissingColumns { columns } => assert_eq!(columns, vec!["Total Score"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn all_missing_columns_reported_in_canonical_order() {
    let headers = vec!["Author, Year", "Overall RoB"];
    let err = ColumnMap::from_headers(&headers).unwrap_err();
    let NosPlotError::MissingColumns { columns } = err else {
        panic!("expected missing columns");
    };
    assert_eq!(columns.len(), 10);
    assert_eq!(columns[0], "Representativeness");
    assert_eq!(columns[9], "Total Score");
}

#[test]
fn header_names_must_match_exactly() {
    let headers: Vec<String> = canonical_headers()
        .into_iter()
        .map(|h| if h == "Overall RoB" { "Overall ROB".to_string() } else { h })
        .collect();
    assert!(matches!(
        ColumnMap::from_headers(&headers),
        Err(NosPlotError::MissingColumns { .. })
    ));
}

#[test]
fn duplicate_required_header_is_rejected() {
    let mut headers = canonical_headers();
    headers.push("Total Score".to_string());
    let err = ColumnMap::from_headers(&headers).unwrap_err();
    assert!(matches!(err, NosPlotError::DuplicateColumn { column } if column == "Total Score"));
}

#[test]
fn short_rows_yield_empty_cells() {
    let map = ColumnMap::from_headers(&canonical_headers()).unwrap();
    let row = vec!["Smith, 2020".to_string()];
    assert_eq!(map.cell(&row, Column::Study), "Smith, 2020");
    assert_eq!(map.cell(&row, Column::TotalScore), "");
}

#[test]
fn item_columns_map_to_domains() {
    assert_eq!(Column::Representativeness.domain(), Some(Domain::Selection));
    assert_eq!(Column::ComparabilityOther.domain(), Some(Domain::Comparability));
    assert_eq!(Column::FollowUpAdequacy.domain(), Some(Domain::OutcomeExposure));
    assert_eq!(Column::TotalScore.domain(), None);
}
