use crate::error::statistics::StatisticsError;
use crate::statistics::{ChartSeries, UsageSummary, chart_config, parse_rows};

const ROWS_JSON: &str = r#"[
    ["2023-07-17", 3, 3, 3],
    ["2023-07-18", 5, 6, 6],
    ["2023-07-19", 4, 8, 9]
]"#;

/// **VALUE**: Verifies the embedded row format parses into ordered rows.
#[test]
fn given_embedded_rows_when_parsed_then_order_and_values_kept() {
    let rows = parse_rows(ROWS_JSON).unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].date(), "2023-07-18");
    assert_eq!(rows[1].daily(), 5);
    assert_eq!(rows[2].total(), 9);
}

#[test]
fn given_malformed_rows_when_parsed_then_parse_error() {
    let result = parse_rows(r#"[["2023-07-17", 3, 3]]"#);

    assert!(matches!(result, Err(StatisticsError::Parse { .. })));
}

#[test]
fn given_rows_when_split_into_series_then_columns_line_up() {
    let rows = parse_rows(ROWS_JSON).unwrap();

    let series = ChartSeries::from_rows(&rows);

    assert_eq!(series.labels, vec!["2023-07-17", "2023-07-18", "2023-07-19"]);
    assert_eq!(series.daily, vec![3, 5, 4]);
    assert_eq!(series.monthly, vec![3, 6, 8]);
    assert_eq!(series.total, vec![3, 6, 9]);
}

/// **VALUE**: Verifies the chart configuration handed to the charting library.
///
/// **WHY THIS MATTERS**: The dashboard passes this straight through; a wrong
/// dataset order swaps the legend colours and misleads readers.
#[test]
fn given_rows_when_chart_configured_then_three_line_datasets_in_order() {
    let rows = parse_rows(ROWS_JSON).unwrap();

    let config = chart_config(&rows);

    assert_eq!(config["type"], "line");
    assert_eq!(config["data"]["labels"][0], "2023-07-17");
    let labels: Vec<_> = config["data"]["datasets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|dataset| dataset["label"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(labels, vec!["daily", "monthly", "total"]);
    assert_eq!(config["data"]["datasets"][2]["data"][2], 9);
    assert_eq!(config["data"]["datasets"][0]["borderWidth"], 1);
    assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], true);
    assert_eq!(config["options"]["elements"]["point"]["radius"], 2);
    assert_eq!(config["defaults"]["color"], "#FFF");
}

#[test]
fn given_no_rows_when_chart_configured_then_empty_series() {
    let config = chart_config(&[]);

    assert_eq!(config["data"]["labels"].as_array().unwrap().len(), 0);
    assert_eq!(config["data"]["datasets"].as_array().unwrap().len(), 3);
}

#[test]
fn given_rows_when_summarized_then_latest_row_used() {
    let rows = parse_rows(ROWS_JSON).unwrap();

    let summary = UsageSummary::from_rows(&rows);

    assert_eq!(
        summary,
        UsageSummary {
            daily_users: 4,
            monthly_users: 8,
            total_users: 9
        }
    );
    assert_eq!(summary.headline(), "Used by 9 students");
}

#[test]
fn given_no_rows_when_summarized_then_zero_users() {
    assert_eq!(UsageSummary::from_rows(&[]).headline(), "Used by 0 students");
}
