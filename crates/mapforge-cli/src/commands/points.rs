//! Points command - build and publish a GeoJSON point layer.

use std::path::PathBuf;

use colored::Colorize;
use mapforge::store::DirectoryStore;
use mapforge::{MapforgeConfig, PointOptions};

use super::{ensure_exists, mapforge, metadata, print_published, print_skips, task_key};
use crate::cli::PublishArgs;

pub fn run(
    config: MapforgeConfig,
    file: PathBuf,
    layer: String,
    coordinates: Option<(String, String)>,
    popup: Option<String>,
    publish: PublishArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_exists(&file)?;

    println!(
        "{} {}",
        "Building points from".cyan().bold(),
        file.display().to_string().white()
    );

    let mut options = PointOptions::new();
    if let Some((lat, lon)) = coordinates {
        options = options.with_coordinates(lat, lon);
    }
    if let Some(column) = popup {
        options = options.with_popup(column);
    }

    let task = task_key(&file);
    let mapforge = mapforge(config, verbose);
    let points = mapforge.points_from_path(&task, &file, &options)?;

    println!(
        "Built {} points using {}",
        points.collection.len().to_string().white().bold(),
        points.source.describe()
    );
    print_skips(&points.report);

    let store = DirectoryStore::new(&publish.out);
    let published = mapforge.publish_points(&task, &points, &metadata(layer, &publish), &store, &store)?;
    print_published(&published, &publish.out);

    Ok(())
}
