use std::cmp::Ordering;

use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use chrono::NaiveDate;

use crate::errors::AppError;
use crate::models::{
    DATA_YEAR, Heatmap, HeatmapRow, HistogramBin, MONTH_COUNT, OverviewResponse, ToolRecord,
    TopToolRow, TrackDetailResponse, TrackOverviewRow, TrendSeries,
};
use crate::rollup::{average_growth, heatmap_order, rollup_categories};
use crate::state::AppState;
use crate::ui::render_index;

const TOP_TABLE_SIZE: usize = 10;
const TREND_SERIES: usize = 5;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let labels = month_labels();
    let updated_through = labels.last().map(String::as_str).unwrap_or("");
    Html(render_index(state.table.len(), updated_through))
}

pub async fn get_overview(State(state): State<AppState>) -> Json<OverviewResponse> {
    Json(build_overview(&state.table))
}

pub async fn get_track(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TrackDetailResponse>, AppError> {
    build_track_detail(&state.table, &name)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("unknown track: {name}")))
}

pub fn build_overview(records: &[ToolRecord]) -> OverviewResponse {
    let rollups = rollup_categories(records);

    let tracks = rollups
        .iter()
        .map(|rollup| TrackOverviewRow {
            category: rollup.category.clone(),
            tool_count: rollup.tool_count,
            latest_month_total: rollup.monthly_totals[MONTH_COUNT - 1],
            half_year_delta_total: rollup.half_year_delta_total,
            avg_growth: rollup.avg_growth,
            total_visits: rollup.total_visits,
        })
        .collect();

    let heatmap = Heatmap {
        months: mom_labels(),
        rows: heatmap_order(&rollups)
            .into_iter()
            .map(|rollup| HeatmapRow {
                category: rollup.category.clone(),
                total_visits: rollup.total_visits,
                mom_growth: rollup.mom_growth,
            })
            .collect(),
    };

    OverviewResponse {
        tool_count: records.len(),
        latest_month_total: records.iter().map(|r| r.monthly_visits[MONTH_COUNT - 1]).sum(),
        half_year_delta_total: records.iter().map(|r| r.half_year_delta).sum(),
        avg_growth: average_growth(records.iter().map(|r| r.half_year_growth)),
        months: month_labels(),
        tracks,
        heatmap,
        growth_histogram: growth_histogram(records.iter()),
    }
}

pub fn build_track_detail(records: &[ToolRecord], name: &str) -> Option<TrackDetailResponse> {
    let rollup = rollup_categories(records)
        .into_iter()
        .find(|rollup| rollup.category == name)?;

    let mut members: Vec<&ToolRecord> = records
        .iter()
        .filter(|record| record.category == name)
        .collect();
    members.sort_by(|a, b| {
        b.monthly_visits[MONTH_COUNT - 1]
            .partial_cmp(&a.monthly_visits[MONTH_COUNT - 1])
            .unwrap_or(Ordering::Equal)
    });

    let top_tools = members
        .iter()
        .take(TOP_TABLE_SIZE)
        .map(|record| TopToolRow {
            name: record.name.clone(),
            latest_month: record.monthly_visits[MONTH_COUNT - 1],
            half_year_delta: record.half_year_delta,
            half_year_growth: record.half_year_growth,
        })
        .collect();

    let trend = members
        .iter()
        .take(TREND_SERIES)
        .map(|record| TrendSeries {
            name: record.name.clone(),
            visits: record.monthly_visits,
        })
        .collect();

    Some(TrackDetailResponse {
        category: rollup.category,
        tool_count: rollup.tool_count,
        months: month_labels(),
        monthly_totals: rollup.monthly_totals,
        half_year_delta_total: rollup.half_year_delta_total,
        avg_growth: rollup.avg_growth,
        mom_growth: rollup.mom_growth,
        top_tools,
        trend,
        growth_histogram: growth_histogram(members.into_iter()),
    })
}

pub fn month_labels() -> Vec<String> {
    (1..=MONTH_COUNT as u32)
        .filter_map(|month| NaiveDate::from_ymd_opt(DATA_YEAR, month, 1))
        .map(|date| date.format("%b %Y").to_string())
        .collect()
}

fn mom_labels() -> Vec<String> {
    (2..=MONTH_COUNT as u32)
        .filter_map(|month| NaiveDate::from_ymd_opt(DATA_YEAR, month, 1))
        .map(|date| date.format("%b").to_string())
        .collect()
}

const HISTOGRAM_LO: f64 = -50.0;
const HISTOGRAM_HI: f64 = 200.0;
const HISTOGRAM_BINS: usize = 25;

// Distribution of per-tool growth rates; missing baselines count as zero
// here, matching how the cards render them. Outliers land in the edge bins.
fn growth_histogram<'a, I>(records: I) -> Vec<HistogramBin>
where
    I: Iterator<Item = &'a ToolRecord>,
{
    let width = (HISTOGRAM_HI - HISTOGRAM_LO) / HISTOGRAM_BINS as f64;
    let mut bins: Vec<HistogramBin> = (0..HISTOGRAM_BINS)
        .map(|i| HistogramBin {
            lo: HISTOGRAM_LO + i as f64 * width,
            hi: HISTOGRAM_LO + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for record in records {
        let value = record.half_year_growth.as_pct().unwrap_or(0.0);
        let clamped = value.clamp(HISTOGRAM_LO, HISTOGRAM_HI);
        let index = (((clamped - HISTOGRAM_LO) / width) as usize).min(HISTOGRAM_BINS - 1);
        bins[index].count += 1;
    }
    bins
}
