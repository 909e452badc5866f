//! Choropleth command - build and publish a region x period heatmap layer.

use std::path::PathBuf;

use colored::Colorize;
use mapforge::MapforgeConfig;
use mapforge::store::DirectoryStore;

use super::{ensure_exists, mapforge, metadata, print_published, print_skips, task_key};
use crate::cli::PublishArgs;

pub fn run(
    config: MapforgeConfig,
    file: PathBuf,
    layer: String,
    value_column: Option<String>,
    assets: Option<PathBuf>,
    publish: PublishArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_exists(&file)?;

    println!(
        "{} {}",
        "Building choropleth from".cyan().bold(),
        file.display().to_string().white()
    );

    let task = task_key(&file);
    let mapforge = mapforge(config, verbose);
    let choropleth = mapforge.choropleth_from_path(&task, &file, value_column.as_deref())?;
    let dataset = &choropleth.dataset;

    println!(
        "{} regions x {} periods from column {}",
        dataset.region_count().to_string().white().bold(),
        dataset.period_count().to_string().white().bold(),
        dataset.value_column.cyan()
    );
    println!("Range: {} .. {}", dataset.min_value, dataset.max_value);
    if verbose {
        println!("Periods: {}", dataset.years.join(", "));
    }
    print_skips(&choropleth.report);

    let mut store = DirectoryStore::new(&publish.out);
    if let Some(dir) = assets {
        store = store.with_assets(dir);
    }
    let published =
        mapforge.publish_choropleth(&task, &choropleth, &metadata(layer, &publish), &store, &store)?;

    if let Some(asset) = choropleth.boundary {
        if !published.keys.iter().any(|k| k.ends_with(asset.file_name())) {
            println!(
                "{} {} was not copied; pass --assets to include it",
                "Warning:".yellow().bold(),
                asset.file_name()
            );
        }
    }
    print_published(&published, &publish.out);

    Ok(())
}
