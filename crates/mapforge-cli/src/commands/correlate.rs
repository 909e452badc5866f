//! Correlate command - compare two numeric columns of one table.

use std::path::PathBuf;

use colored::Colorize;
use mapforge::correlation::{Confidence, RelationshipType};
use mapforge::inference::parse_numeric;
use mapforge::input::Parser;
use mapforge::{MapforgeConfig, MapforgeError, TabularDataset};

use super::{ensure_exists, mapforge, task_key};

pub fn run(
    config: MapforgeConfig,
    file: PathBuf,
    x: String,
    y: String,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_exists(&file)?;

    let (dataset, _) = Parser::with_config(config.parser.clone()).parse_file(&file)?;
    let xs = numeric_column(&dataset, &x)?;
    let ys = numeric_column(&dataset, &y)?;

    let mapforge = mapforge(config, verbose && !json);
    let result = mapforge.correlate(&task_key(&file), &x, &xs, &y, &ys)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let kind = result.classification.kind.to_string();
    let kind = match result.classification.kind {
        RelationshipType::None => kind.dimmed(),
        RelationshipType::Linear => kind.green().bold(),
        _ => kind.cyan().bold(),
    };
    let confidence = result.classification.confidence.as_str();
    let confidence = match result.classification.confidence {
        Confidence::High => confidence.green(),
        Confidence::Medium => confidence.yellow(),
        Confidence::Low => confidence.red(),
    };

    println!(
        "{} vs {}: {} (score {:.2}, n = {}, confidence {})",
        x.white().bold(),
        y.white().bold(),
        kind,
        result.score,
        result.metrics.n,
        confidence
    );
    println!();
    println!("{}", result.narrative);

    let fits: Vec<_> = result.regressions.iter().collect();
    if !fits.is_empty() {
        println!();
        println!("{}", "Regressions:".yellow().bold());
        for fit in fits {
            println!(
                "  {:8} R² = {:.3}  {}",
                fit.model.name(),
                fit.r_squared,
                fit.equation
            );
        }
    }

    Ok(())
}

/// Column values as floats; unparsable cells become NaN and drop their pair.
fn numeric_column(dataset: &TabularDataset, column: &str) -> Result<Vec<f64>, MapforgeError> {
    let index = dataset
        .column_index(column)
        .ok_or_else(|| MapforgeError::ColumnNotFound {
            column: column.to_string(),
            headers: dataset.headers.clone(),
        })?;
    Ok(dataset
        .column_values(index)
        .map(|cell| parse_numeric(cell).unwrap_or(f64::NAN))
        .collect())
}
