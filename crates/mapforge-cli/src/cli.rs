//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mapforge: turn CSV exports into map layers and compare them
#[derive(Parser)]
#[command(name = "mapforge")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with [correlation] and [pipeline] overrides
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build and publish a GeoJSON point layer
    Points {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Layer name, also used as the storage folder
        #[arg(short, long)]
        layer: String,

        /// Latitude column (default: auto-detect)
        #[arg(long, requires = "lon")]
        lat: Option<String>,

        /// Longitude column (default: auto-detect)
        #[arg(long, requires = "lat")]
        lon: Option<String>,

        /// Column whose value becomes the feature popup
        #[arg(long)]
        popup: Option<String>,

        #[command(flatten)]
        publish: PublishArgs,
    },

    /// Build and publish a region x period choropleth layer
    Choropleth {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Layer name, also used as the storage folder
        #[arg(short, long)]
        layer: String,

        /// Value column (default: inferred from headers)
        #[arg(long, value_name = "COL")]
        value_column: Option<String>,

        /// Directory holding shared boundary files (indonesia-provinces.geojson)
        #[arg(long)]
        assets: Option<PathBuf>,

        #[command(flatten)]
        publish: PublishArgs,
    },

    /// Correlate two numeric columns of one table
    Correlate {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// First column
        #[arg(short, long)]
        x: String,

        /// Second column
        #[arg(short, long)]
        y: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a single region token
    Regions {
        /// Country code, country name or province name
        #[arg(value_name = "TOKEN")]
        token: String,

        /// Resolve against Indonesian provinces instead of countries
        #[arg(long)]
        province: bool,
    },
}

/// Options shared by the publishing subcommands.
#[derive(clap::Args, Clone, Debug)]
pub struct PublishArgs {
    /// Output directory for layer files and catalog.json
    #[arg(short, long, default_value = "layers")]
    pub out: PathBuf,

    /// Catalog description (default: generated from the layer)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Link to the upstream data source
    #[arg(long)]
    pub source_link: Option<String>,
}
