//! Mapforge CLI - CSV-to-map-layer pipeline and correlation engine.

mod cli;
mod commands;
mod config;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = config::load(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Points {
            file,
            layer,
            lat,
            lon,
            popup,
            publish,
        } => commands::points::run(config, file, layer, lat.zip(lon), popup, publish, cli.verbose),

        Commands::Choropleth {
            file,
            layer,
            value_column,
            assets,
            publish,
        } => commands::choropleth::run(config, file, layer, value_column, assets, publish, cli.verbose),

        Commands::Correlate { file, x, y, json } => {
            commands::correlate::run(config, file, x, y, json, cli.verbose)
        }

        Commands::Regions { token, province } => commands::regions::run(token, province),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `-v`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
