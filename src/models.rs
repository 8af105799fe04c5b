use serde::{Serialize, Serializer};

use crate::metrics;

pub const MONTH_COUNT: usize = 6;
pub const DATA_YEAR: i32 = 2025;

/// A half-year growth percentage, or the marker for a missing baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Growth {
    Pct(f64),
    NotApplicable,
}

impl Growth {
    /// Normalizes the percentage strings found in source spreadsheets:
    /// `"N/A"`, `"12.3%"` and bare numbers all occur in the same column.
    /// Anything unparseable coerces to 0 rather than failing the row.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("n/a") {
            return Self::NotApplicable;
        }
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        match number.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Pct(value),
            _ => Self::Pct(0.0),
        }
    }

    pub fn as_pct(self) -> Option<f64> {
        match self {
            Self::Pct(value) => Some(value),
            Self::NotApplicable => None,
        }
    }

    /// Spreadsheet cell form: `"12.3%"` or the literal `"N/A"`.
    pub fn export_field(self) -> String {
        match self {
            Self::Pct(value) => format!("{value:.1}%"),
            Self::NotApplicable => "N/A".to_string(),
        }
    }
}

impl Serialize for Growth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Pct(value) => serializer.serialize_f64(*value),
            Self::NotApplicable => serializer.serialize_none(),
        }
    }
}

/// One AI tool's traffic history over the fixed six-month window.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolRecord {
    pub name: String,
    pub category: String,
    pub monthly_visits: [f64; MONTH_COUNT],
    pub half_year_delta: f64,
    pub half_year_growth: Growth,
    pub introduction: String,
    pub tags: String,
}

impl ToolRecord {
    pub fn new(
        name: String,
        category: String,
        monthly_visits: [f64; MONTH_COUNT],
        introduction: String,
        tags: String,
    ) -> Self {
        Self {
            half_year_delta: metrics::half_year_delta(&monthly_visits),
            half_year_growth: metrics::half_year_growth(&monthly_visits),
            name,
            category,
            monthly_visits,
            introduction,
            tags,
        }
    }
}

/// Per-track aggregate, recomputed fresh from the loaded table.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRollup {
    pub category: String,
    pub tool_count: usize,
    pub monthly_totals: [f64; MONTH_COUNT],
    pub half_year_delta_total: f64,
    pub avg_growth: Growth,
    pub mom_growth: [f64; MONTH_COUNT - 1],
    pub total_visits: f64,
}

#[derive(Debug, Serialize)]
pub struct TrackOverviewRow {
    pub category: String,
    pub tool_count: usize,
    pub latest_month_total: f64,
    pub half_year_delta_total: f64,
    pub avg_growth: Growth,
    pub total_visits: f64,
}

#[derive(Debug, Serialize)]
pub struct HeatmapRow {
    pub category: String,
    pub total_visits: f64,
    pub mom_growth: [f64; MONTH_COUNT - 1],
}

#[derive(Debug, Serialize)]
pub struct Heatmap {
    pub months: Vec<String>,
    pub rows: Vec<HeatmapRow>,
}

#[derive(Debug, Serialize)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub tool_count: usize,
    pub latest_month_total: f64,
    pub half_year_delta_total: f64,
    pub avg_growth: Growth,
    pub months: Vec<String>,
    pub tracks: Vec<TrackOverviewRow>,
    pub heatmap: Heatmap,
    pub growth_histogram: Vec<HistogramBin>,
}

#[derive(Debug, Serialize)]
pub struct TopToolRow {
    pub name: String,
    pub latest_month: f64,
    pub half_year_delta: f64,
    pub half_year_growth: Growth,
}

#[derive(Debug, Serialize)]
pub struct TrendSeries {
    pub name: String,
    pub visits: [f64; MONTH_COUNT],
}

#[derive(Debug, Serialize)]
pub struct TrackDetailResponse {
    pub category: String,
    pub tool_count: usize,
    pub months: Vec<String>,
    pub monthly_totals: [f64; MONTH_COUNT],
    pub half_year_delta_total: f64,
    pub avg_growth: Growth,
    pub mom_growth: [f64; MONTH_COUNT - 1],
    pub top_tools: Vec<TopToolRow>,
    pub trend: Vec<TrendSeries>,
    pub growth_histogram: Vec<HistogramBin>,
}
