use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use traffic_dashboard::export::write_track_files;
use traffic_dashboard::parse_table;

#[derive(Parser)]
#[command(name = "export-tracks")]
#[command(about = "Regenerate per-track spreadsheet exports with a summary row", long_about = None)]
struct Cli {
    /// Source table with one row per tool
    #[arg(long, default_value = "data/tool_traffic.csv")]
    input: PathBuf,
    /// Directory receiving one CSV per track
    #[arg(long, default_value = "data/2025H1")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let bytes = std::fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let table = parse_table(&bytes)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;

    let written = write_track_files(&table, &cli.out_dir)
        .with_context(|| format!("failed to export into {}", cli.out_dir.display()))?;

    for export in &written {
        println!(
            "wrote {} ({} tools + 1 summary row)",
            export.path.display(),
            export.tool_count
        );
    }
    println!("{} track files written to {}", written.len(), cli.out_dir.display());

    Ok(())
}
