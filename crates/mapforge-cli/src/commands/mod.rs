//! CLI command implementations.

pub mod choropleth;
pub mod correlate;
pub mod points;
pub mod regions;

use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use mapforge::{LayerMetadata, Mapforge, MapforgeConfig, ProgressSink, PublishedLayer, SkipReport, TaskStatus};

use crate::cli::PublishArgs;

/// Prints task status lines as they arrive.
struct TerminalProgress;

impl ProgressSink for TerminalProgress {
    fn report(&self, _key: &str, status: TaskStatus) {
        match status {
            TaskStatus::Converting { progress, detail } => {
                println!("{} {}", format!("[{progress:>3}%]").dimmed(), detail.dimmed());
            }
            TaskStatus::Done { .. } | TaskStatus::Error { .. } => {}
        }
    }
}

/// Task key for a CLI run.
pub(crate) fn task_key(file: &Path) -> String {
    file.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mapforge".to_string())
}

pub(crate) fn mapforge(config: MapforgeConfig, verbose: bool) -> Mapforge {
    let mapforge = Mapforge::with_config(config);
    if verbose {
        mapforge.with_progress(Arc::new(TerminalProgress))
    } else {
        mapforge
    }
}

pub(crate) fn ensure_exists(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }
    Ok(())
}

pub(crate) fn metadata(layer: String, publish: &PublishArgs) -> LayerMetadata {
    let mut metadata = LayerMetadata::new(layer);
    if let Some(description) = &publish.description {
        metadata = metadata.with_description(description);
    }
    if let Some(link) = &publish.source_link {
        metadata = metadata.with_source_link(link);
    }
    metadata
}

pub(crate) fn print_skips(report: &SkipReport) {
    if report.is_clean() {
        return;
    }
    println!(
        "Skipped {} of {} rows ({} unresolved, {} unparsable, {} at 0,0, {} empty region)",
        report.rows_skipped().to_string().yellow(),
        report.rows_total,
        report.unresolved_rows,
        report.unparsable_rows,
        report.zero_coordinate_rows,
        report.empty_region_rows
    );
    if !report.unresolved_regions.is_empty() {
        let sample: Vec<&str> = report
            .unresolved_regions
            .iter()
            .take(10)
            .map(String::as_str)
            .collect();
        let more = report.unresolved_regions.len().saturating_sub(sample.len());
        let suffix = if more > 0 { format!(" (+{more} more)") } else { String::new() };
        println!("  {} {}{}", "Unresolved:".yellow(), sample.join(", "), suffix);
    }
}

pub(crate) fn print_published(published: &PublishedLayer, out: &Path) {
    println!();
    println!(
        "{} {} ({})",
        "Published".green().bold(),
        published.folder.white().bold(),
        published.id.dimmed()
    );
    for key in &published.keys {
        println!("  {}", out.join(key).display());
    }
    println!("  {}", published.description);
}
