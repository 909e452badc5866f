//! Example: Build a choropleth dataset from a CSV export.
//!
//! Usage:
//!   cargo run --example choropleth -- <file_path> [value_column]
//!
//! Example:
//!   cargo run --example choropleth -- data/gdp_per_capita.csv OBS_VALUE

use std::env;
use std::path::Path;

use mapforge::Mapforge;

fn main() -> mapforge::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example choropleth -- <file_path> [value_column]");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    if !path.exists() {
        eprintln!("Error: File not found: {}", path.display());
        std::process::exit(1);
    }

    let layer = Mapforge::new().choropleth_from_path("example", path, args.get(2).map(String::as_str))?;
    let dataset = &layer.dataset;

    println!("Value column: {}", dataset.value_column);
    println!("Region column: {}", dataset.country_column);
    println!("Periods: {}", dataset.years.join(", "));
    println!("Range: {} .. {}", dataset.min_value, dataset.max_value);
    println!();

    for (region, periods) in dataset.data.iter().take(15) {
        let cells: Vec<String> = periods.iter().map(|(p, v)| format!("{p}={v}")).collect();
        println!("  {:24} {}", region, cells.join("  "));
    }
    if dataset.region_count() > 15 {
        println!("  ... {} more regions", dataset.region_count() - 15);
    }

    if !layer.report.is_clean() {
        println!();
        println!(
            "Skipped {} of {} rows; unresolved: {:?}",
            layer.report.rows_skipped(),
            layer.report.rows_total,
            layer.report.unresolved_regions
        );
    }

    Ok(())
}
