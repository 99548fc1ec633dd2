//! Command implementations

use crate::cli::OutputFormat;
use crate::index;
use crate::notes::NotesDir;
use crate::subtitle::{run_batch, BatchReport};
use anyhow::{Context, Result};
use std::path::Path;

/// Normalize block subtitles across every note file.
///
/// Prints a per-file line and an aggregate summary; fails (nonzero exit)
/// when the notes directory is missing, no files match, or any file failed.
pub fn fix_subtitles(app_root: &Path, format: OutputFormat) -> Result<()> {
    let notes = NotesDir::open(app_root)?;

    if !notes.exists() {
        anyhow::bail!("Notes directory not found: {:?}", notes.notes_path());
    }

    let report = run_batch(&notes)?;

    if report.total_files == 0 {
        anyhow::bail!(
            "No note files matching '{}' in {:?}",
            notes.config().note_pattern,
            notes.notes_path()
        );
    }

    match format {
        OutputFormat::Json => print_report_json(&report)?,
        OutputFormat::Text => print_report_text(&report),
    }

    if !report.all_succeeded() {
        anyhow::bail!("{} file(s) failed to process", report.failed_files);
    }

    Ok(())
}

/// Regenerate the HTML index page for the notes directory
pub fn generate_index(app_root: &Path) -> Result<()> {
    let notes = NotesDir::open(app_root)?;

    if !notes.exists() {
        anyhow::bail!("Notes directory not found: {:?}", notes.notes_path());
    }

    let summary = index::generate(&notes)?;

    println!(
        "✓ Generated {:?} with {} note(s):",
        summary.output_path,
        summary.entries.len()
    );
    for entry in &summary.entries {
        println!("  {} ({})", entry.title, entry.file_name);
    }

    Ok(())
}

/// Serve the app root over local HTTP until interrupted
pub fn serve(app_root: &Path, port: Option<u16>, no_open: bool) -> Result<()> {
    let notes = NotesDir::open(app_root)?;

    let server_config = &notes.config().server;
    let port = port.unwrap_or(server_config.port);
    let open_browser = server_config.open_browser && !no_open;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(crate::serve::run(notes.root(), port, open_browser))
}

/// Print a batch report as human-readable text
pub fn print_report_text(report: &BatchReport) {
    println!("Found {} note file(s) to process\n", report.total_files);

    for outcome in &report.files {
        match &outcome.error {
            None => println!(
                "✓ {}: {} block(s) updated",
                outcome.file_name, outcome.blocks_updated
            ),
            Some(message) => println!("✗ {}: {}", outcome.file_name, message),
        }
    }

    println!("\nSummary");
    println!("=======");
    println!("Total files processed:    {}", report.total_files);
    println!("Successful:               {}", report.successful_files);
    println!("Failed:                   {}", report.failed_files);
    println!("Total blocks updated:     {}", report.total_blocks_updated);
}

/// Print a batch report as JSON
pub fn print_report_json(report: &BatchReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}
