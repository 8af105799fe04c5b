use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::metrics::round1;
use crate::models::{CategoryRollup, Growth, MONTH_COUNT, ToolRecord};

/// Groups the table by track and aggregates each group, highest total
/// traffic first. Grouping is an exact string match on the category label;
/// labels that differ only in spacing stay separate groups.
pub fn rollup_categories(records: &[ToolRecord]) -> Vec<CategoryRollup> {
    let mut groups: BTreeMap<&str, Vec<&ToolRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.category.as_str()).or_default().push(record);
    }

    let mut rollups: Vec<CategoryRollup> = groups
        .into_iter()
        .map(|(category, members)| {
            let mut monthly_totals = [0.0; MONTH_COUNT];
            let mut half_year_delta_total = 0.0;
            for member in &members {
                for (slot, visits) in monthly_totals.iter_mut().zip(member.monthly_visits) {
                    *slot += visits;
                }
                half_year_delta_total += member.half_year_delta;
            }

            CategoryRollup {
                category: category.to_string(),
                tool_count: members.len(),
                avg_growth: average_growth(members.iter().map(|member| member.half_year_growth)),
                mom_growth: mom_series(&monthly_totals),
                total_visits: monthly_totals.iter().sum(),
                monthly_totals,
                half_year_delta_total,
            }
        })
        .collect();

    rollups.sort_by(|a, b| {
        b.total_visits
            .partial_cmp(&a.total_visits)
            .unwrap_or(Ordering::Equal)
    });
    rollups
}

/// Mean growth with `NotApplicable` members left out of both the sum and
/// the divisor. All members missing a baseline means the average itself
/// has no baseline.
pub fn average_growth<I>(growths: I) -> Growth
where
    I: IntoIterator<Item = Growth>,
{
    let mut sum = 0.0;
    let mut counted = 0usize;
    for growth in growths {
        if let Growth::Pct(value) = growth {
            sum += value;
            counted += 1;
        }
    }
    if counted == 0 {
        Growth::NotApplicable
    } else {
        Growth::Pct(round1(sum / counted as f64))
    }
}

/// Month-over-month change across the six totals, one entry per adjacent
/// pair. Growth from a zero baseline is reported as a flat 100% unless the
/// month stayed at zero.
pub fn mom_series(totals: &[f64; MONTH_COUNT]) -> [f64; MONTH_COUNT - 1] {
    let mut series = [0.0; MONTH_COUNT - 1];
    for month in 1..MONTH_COUNT {
        let previous = totals[month - 1];
        let current = totals[month];
        series[month - 1] = if previous > 0.0 {
            round1((current - previous) / previous * 100.0)
        } else if current == 0.0 {
            0.0
        } else {
            100.0
        };
    }
    series
}

/// Reorders rollups for the heatmap: stacked plots draw rows bottom-up, so
/// ascending totals put the busiest track in the top row.
pub fn heatmap_order(rollups: &[CategoryRollup]) -> Vec<&CategoryRollup> {
    let mut rows: Vec<&CategoryRollup> = rollups.iter().collect();
    rows.sort_by(|a, b| {
        a.total_visits
            .partial_cmp(&b.total_visits)
            .unwrap_or(Ordering::Equal)
    });
    rows
}

/// Synthesizes the denormalized "track total" record written as the first
/// row of each per-track export file.
pub fn summary_row(rollup: &CategoryRollup) -> ToolRecord {
    ToolRecord {
        name: format!("{} track total", rollup.category),
        category: rollup.category.clone(),
        monthly_visits: rollup.monthly_totals,
        half_year_delta: rollup.half_year_delta_total,
        half_year_growth: span_growth(&rollup.monthly_totals),
        introduction: String::new(),
        tags: String::new(),
    }
}

/// Growth between the earliest and latest non-zero months of the series,
/// not strictly January and June. Equal or absent endpoints yield N/A.
pub fn span_growth(totals: &[f64; MONTH_COUNT]) -> Growth {
    let mut earliest = 0.0;
    let mut latest = 0.0;
    for &total in totals {
        if total > 0.0 {
            if earliest == 0.0 {
                earliest = total;
            }
            latest = total;
        }
    }
    if earliest > 0.0 && latest != earliest {
        Growth::Pct(round1((latest - earliest) / earliest * 100.0))
    } else {
        Growth::NotApplicable
    }
}
