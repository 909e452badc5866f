//! `--config` file loading.
//!
//! ```toml
//! [pipeline]
//! progress_interval = 500
//! delimiter = ";"
//!
//! [correlation]
//! strong = 0.75
//!
//! [columns]
//! value = ["Value", "nilai", "OBS_VALUE"]
//! ```
//!
//! Every table and field is optional; omitted ones keep the library defaults.

use std::fs;
use std::path::Path;

use mapforge::{CandidateSet, CorrelationConfig, MapforgeConfig, MapforgeError};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    pipeline: PipelineSection,
    correlation: CorrelationConfig,
    columns: CandidateSet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PipelineSection {
    progress_interval: Option<usize>,
    max_rows: Option<usize>,
    /// Single-character delimiter; auto-detected when absent.
    delimiter: Option<String>,
}

/// Build the library configuration, applying the file at `path` if given.
pub fn load(path: Option<&Path>) -> Result<MapforgeConfig, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(MapforgeConfig::default());
    };

    let text = fs::read_to_string(path).map_err(|source| MapforgeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&text)
        .map_err(|e| MapforgeError::Config(format!("{}: {e}", path.display())))?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

fn parse(text: &str) -> Result<MapforgeConfig, String> {
    let file: ConfigFile = toml::from_str(text).map_err(|e| e.to_string())?;

    let mut config = MapforgeConfig {
        correlation: file.correlation,
        inference: file.columns,
        ..MapforgeConfig::default()
    };
    if let Some(interval) = file.pipeline.progress_interval {
        config.progress_interval = interval;
    }
    config.parser.max_rows = file.pipeline.max_rows;
    config.parser.delimiter = match file.pipeline.delimiter.as_deref() {
        None => None,
        Some(d) if d.len() == 1 => Some(d.as_bytes()[0]),
        Some("\\t") => Some(b'\t'),
        Some(other) => return Err(format!("delimiter must be a single byte, got '{other}'")),
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = parse("").unwrap();
        assert_eq!(config.correlation, CorrelationConfig::default());
        assert_eq!(config.progress_interval, mapforge::DEFAULT_PROGRESS_INTERVAL);
    }

    #[test]
    fn test_partial_tables_override_defaults() {
        let config = parse(
            "[pipeline]\nprogress_interval = 50\ndelimiter = \";\"\n\n[correlation]\nstrong = 0.8\n",
        )
        .unwrap();
        assert_eq!(config.progress_interval, 50);
        assert_eq!(config.parser.delimiter, Some(b';'));
        assert_eq!(config.correlation.strong, 0.8);
        assert_eq!(config.correlation.moderate, CorrelationConfig::default().moderate);
    }

    #[test]
    fn test_column_candidates_replace_list() {
        let config = parse("[columns]\nvalue = [\"nilai\"]\n").unwrap();
        assert_eq!(config.inference.value, vec!["nilai"]);
        assert_eq!(config.inference.time, CandidateSet::default().time);
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_delimiter() {
        assert!(parse("[pipeline]\nworkers = 4\n").is_err());
        assert!(parse("[pipeline]\ndelimiter = \"::\"\n").is_err());
    }
}
