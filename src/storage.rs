use crate::errors::LoadError;
use crate::models::{Growth, ToolRecord};
use serde::Deserialize;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RawRecord {
    tool_name: String,
    category: String,
    visits_jan: String,
    visits_feb: String,
    visits_mar: String,
    visits_apr: String,
    visits_may: String,
    visits_jun: String,
    half_year_delta: String,
    half_year_growth: String,
    #[serde(default)]
    introduction: String,
    #[serde(default)]
    tags: String,
}

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("DASHBOARD_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/tool_traffic.csv")
}

pub async fn load_table(path: &Path) -> Result<Vec<ToolRecord>, LoadError> {
    let bytes = fs::read(path).await?;
    parse_table(&bytes)
}

/// Parses the source spreadsheet. A missing required column fails the whole
/// load; unparseable cells coerce to zero and never fail a row. Stored
/// delta/growth columns are superseded by recomputation from the monthly
/// figures.
pub fn parse_table(bytes: &[u8]) -> Result<Vec<ToolRecord>, LoadError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut records = Vec::new();
    let mut unnamed = 0usize;
    let mut restated = 0usize;

    for row in reader.deserialize::<RawRecord>() {
        let raw = row?;
        if raw.tool_name.trim().is_empty() {
            unnamed += 1;
            continue;
        }

        let monthly_visits = [
            coerce_visits(&raw.visits_jan),
            coerce_visits(&raw.visits_feb),
            coerce_visits(&raw.visits_mar),
            coerce_visits(&raw.visits_apr),
            coerce_visits(&raw.visits_may),
            coerce_visits(&raw.visits_jun),
        ];
        let record = ToolRecord::new(
            raw.tool_name,
            raw.category,
            monthly_visits,
            raw.introduction,
            raw.tags,
        );

        if Growth::parse(&raw.half_year_growth) != record.half_year_growth
            || coerce_number(&raw.half_year_delta) != record.half_year_delta
        {
            restated += 1;
        }
        records.push(record);
    }

    if unnamed > 0 {
        debug!("skipped {unnamed} rows without a tool name");
    }
    if restated > 0 {
        debug!("stored growth fields disagreed with recomputed values for {restated} rows");
    }

    Ok(records)
}

// Visit counts are non-negative; junk, blanks and negatives all coerce to 0.
fn coerce_visits(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

fn coerce_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Input column order, reused verbatim by the per-track export files.
pub const TABLE_HEADER: [&str; 12] = [
    "tool_name",
    "category",
    "visits_jan",
    "visits_feb",
    "visits_mar",
    "visits_apr",
    "visits_may",
    "visits_jun",
    "half_year_delta",
    "half_year_growth",
    "introduction",
    "tags",
];
