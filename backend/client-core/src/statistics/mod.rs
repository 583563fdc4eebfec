//! Usage statistics for the dashboard chart.
//!
//! The server embeds one row per day as `[date, daily, monthly, total]`.
//! These helpers split the rows into chart series and build the line-chart
//! configuration the dashboard hands to its charting library.

use crate::error::statistics::StatisticsError;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

const CHART_BACKGROUND_COLOR: &str = "rgba(255, 255, 255, 0.2)";
const CHART_BORDER_COLOR: &str = "rgba(255, 255, 255, 0.2)";
const CHART_TEXT_COLOR: &str = "#FFF";
const DATASET_BORDER_WIDTH: u32 = 1;
const POINT_RADIUS: u32 = 2;

/// One day of usage: distinct users that day, in the trailing 30 days,
/// and ever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRow(pub String, pub u64, pub u64, pub u64);

impl ChartRow {
    pub fn date(&self) -> &str {
        &self.0
    }

    pub fn daily(&self) -> u64 {
        self.1
    }

    pub fn monthly(&self) -> u64 {
        self.2
    }

    pub fn total(&self) -> u64 {
        self.3
    }
}

/// Parse the rows the server embeds in the statistics page.
pub fn parse_rows(json_text: &str) -> Result<Vec<ChartRow>, StatisticsError> {
    let rows: Vec<ChartRow> = serde_json::from_str(json_text)?;
    debug!("Parsed {} chart rows", rows.len());
    Ok(rows)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub daily: Vec<u64>,
    pub monthly: Vec<u64>,
    pub total: Vec<u64>,
}

impl ChartSeries {
    pub fn from_rows(rows: &[ChartRow]) -> Self {
        let mut series = Self::default();
        for row in rows {
            series.labels.push(row.date().to_string());
            series.daily.push(row.daily());
            series.monthly.push(row.monthly());
            series.total.push(row.total());
        }
        series
    }
}

/// Line-chart configuration: three datasets over the row dates.
pub fn chart_config(rows: &[ChartRow]) -> Value {
    let series = ChartSeries::from_rows(rows);

    json!({
        "defaults": {
            "backgroundColor": CHART_BACKGROUND_COLOR,
            "borderColor": CHART_BORDER_COLOR,
            "color": CHART_TEXT_COLOR,
        },
        "type": "line",
        "data": {
            "labels": series.labels,
            "datasets": [
                dataset("daily", &series.daily),
                dataset("monthly", &series.monthly),
                dataset("total", &series.total),
            ],
        },
        "options": {
            "scales": { "y": { "beginAtZero": true } },
            "elements": { "point": { "radius": POINT_RADIUS } },
        },
    })
}

fn dataset(label: &str, data: &[u64]) -> Value {
    json!({
        "label": label,
        "data": data,
        "borderWidth": DATASET_BORDER_WIDTH,
    })
}

/// Headline numbers for the home and statistics pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UsageSummary {
    pub daily_users: u64,
    pub monthly_users: u64,
    pub total_users: u64,
}

impl UsageSummary {
    /// Numbers from the most recent row; zeros when there is no data yet.
    pub fn from_rows(rows: &[ChartRow]) -> Self {
        rows.last()
            .map(|row| Self {
                daily_users: row.daily(),
                monthly_users: row.monthly(),
                total_users: row.total(),
            })
            .unwrap_or_default()
    }

    pub fn headline(&self) -> String {
        format!("Used by {} students", self.total_users)
    }
}
