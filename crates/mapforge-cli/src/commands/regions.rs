//! Regions command - resolve a single token for diagnostics.

use colored::Colorize;
use mapforge::{RegionMode, RegionResolver};

pub fn run(token: String, province: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if province {
        RegionMode::IndonesiaProvince
    } else {
        RegionMode::Country
    };
    let resolver = RegionResolver::new();
    let normalized = resolver.normalize(&token, mode);

    match resolver.resolve(&token, mode) {
        Some(anchor) => {
            println!(
                "{} {} -> {}",
                "Resolved".green().bold(),
                normalized,
                anchor.key.white().bold()
            );
            println!("  centroid: {:.6}, {:.6}", anchor.centroid.lat, anchor.centroid.lon);
            if let Some(asset) = anchor.boundary {
                println!("  boundary: {}", asset.file_name());
            }
            Ok(())
        }
        None => Err(format!("'{normalized}' does not resolve to a known {mode:?} region").into()),
    }
}
