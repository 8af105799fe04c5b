use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ExportError;
use crate::models::ToolRecord;
use crate::rollup::{rollup_categories, summary_row};
use crate::storage::TABLE_HEADER;

#[derive(Debug)]
pub struct TrackExport {
    pub category: String,
    pub tool_count: usize,
    pub path: PathBuf,
}

/// Writes one CSV per track: the synthesized "track total" row first, then
/// the member tools in source order. Columns match the input schema, so the
/// files re-parse through `storage::parse_table`.
pub fn write_track_files(
    records: &[ToolRecord],
    out_dir: &Path,
) -> Result<Vec<TrackExport>, ExportError> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();
    for rollup in rollup_categories(records) {
        let path = out_dir.join(track_file_name(&rollup.category));
        let mut writer = csv::Writer::from_path(&path)?;

        writer.write_record(TABLE_HEADER)?;
        writer.write_record(record_fields(&summary_row(&rollup)))?;
        for record in records.iter().filter(|r| r.category == rollup.category) {
            writer.write_record(record_fields(record))?;
        }
        writer.flush()?;

        written.push(TrackExport {
            category: rollup.category,
            tool_count: rollup.tool_count,
            path,
        });
    }

    Ok(written)
}

fn track_file_name(category: &str) -> String {
    let safe = category.replace(['/', '\\'], "-");
    format!("2025H1-{safe}.csv")
}

fn record_fields(record: &ToolRecord) -> Vec<String> {
    let mut fields = vec![record.name.clone(), record.category.clone()];
    fields.extend(record.monthly_visits.iter().map(|visits| format!("{visits:.0}")));
    fields.push(format!("{:.0}", record.half_year_delta));
    fields.push(record.half_year_growth.export_field());
    fields.push(record.introduction.clone());
    fields.push(record.tags.clone());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Growth, MONTH_COUNT};
    use crate::storage::parse_table;

    fn record(name: &str, category: &str, visits: [f64; MONTH_COUNT]) -> ToolRecord {
        ToolRecord::new(
            name.to_string(),
            category.to_string(),
            visits,
            String::new(),
            String::new(),
        )
    }

    fn unique_out_dir() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut dir = std::env::temp_dir();
        dir.push(format!("track_export_{}_{}", std::process::id(), nanos));
        dir
    }

    #[test]
    fn writes_summary_first_and_round_trips() {
        let table = vec![
            record("ChatMate", "AI Chatbot", [100.0, 110.0, 120.0, 130.0, 140.0, 150.0]),
            record("LateBloom", "AI Coding", [0.0, 0.0, 0.0, 0.0, 0.0, 100.0]),
            record("PairBot", "AI Coding", [50.0, 50.0, 50.0, 50.0, 50.0, 50.0]),
        ];

        let out_dir = unique_out_dir();
        let written = write_track_files(&table, &out_dir).unwrap();
        assert_eq!(written.len(), 2);

        let coding = written.iter().find(|w| w.category == "AI Coding").unwrap();
        assert_eq!(coding.tool_count, 2);
        assert!(coding.path.ends_with("2025H1-AI Coding.csv"));

        let bytes = fs::read(&coding.path).unwrap();
        let reparsed = parse_table(&bytes).unwrap();
        assert_eq!(reparsed.len(), 3);

        let summary = &reparsed[0];
        assert_eq!(summary.name, "AI Coding track total");
        assert_eq!(summary.monthly_visits, [50.0, 50.0, 50.0, 50.0, 50.0, 150.0]);
        assert_eq!(summary.half_year_delta, 100.0);
        assert_eq!(reparsed[1].name, "LateBloom");
        assert_eq!(reparsed[2].name, "PairBot");

        fs::remove_dir_all(&out_dir).unwrap();
    }

    #[test]
    fn summary_cell_uses_span_growth_rule() {
        let table = vec![record("Bursty", "AI Video", [0.0, 0.0, 200.0, 300.0, 0.0, 500.0])];
        let out_dir = unique_out_dir();
        let written = write_track_files(&table, &out_dir).unwrap();

        let content = fs::read_to_string(&written[0].path).unwrap();
        let summary_line = content.lines().nth(1).unwrap();
        assert!(summary_line.contains("150.0%"));

        fs::remove_dir_all(&out_dir).unwrap();
    }

    #[test]
    fn slashes_in_category_do_not_escape_the_directory() {
        assert_eq!(track_file_name("AI Chat/Bot"), "2025H1-AI Chat-Bot.csv");
    }

    #[test]
    fn reparsed_summary_growth_is_restated_per_row_policy() {
        // The summary cell is written with the span rule; reading the file
        // back derives the row-level rule instead. [0,...,100] stays N/A
        // either way, keeping round-trips stable for late starters.
        let table = vec![record("LateBloom", "AI Coding", [0.0, 0.0, 0.0, 0.0, 0.0, 100.0])];
        let out_dir = unique_out_dir();
        let written = write_track_files(&table, &out_dir).unwrap();

        let bytes = fs::read(&written[0].path).unwrap();
        let reparsed = parse_table(&bytes).unwrap();
        assert_eq!(reparsed[0].half_year_growth, Growth::NotApplicable);

        fs::remove_dir_all(&out_dir).unwrap();
    }
}
