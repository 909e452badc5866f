//! CSV/TSV loader with delimiter detection.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use super::source::{SourceMetadata, TabularDataset};
use crate::error::{MapforgeError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// UTF-8 byte order mark written by spreadsheet exports.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Loads tabular files into a [`TabularDataset`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the dataset and its metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(TabularDataset, SourceMetadata)> {
        let path = path.as_ref();
        let io_err = |source| MapforgeError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(io_err)?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(strip_bom(&contents))?,
        };
        let dataset = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format,
            dataset.row_count(),
            dataset.column_count(),
        );

        Ok((dataset, metadata))
    }

    /// Parse in-memory bytes, auto-detecting the delimiter unless configured.
    pub fn parse_slice(&self, bytes: &[u8]) -> Result<TabularDataset> {
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(strip_bom(bytes))?,
        };
        self.parse_bytes(bytes, delimiter)
    }

    /// Parse bytes with a known delimiter.
    ///
    /// A header row is required; zero data rows is a valid (empty) dataset.
    fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<TabularDataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(strip_bom(bytes));

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(MapforgeError::EmptyData("No columns found".to_string()));
        }

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(TabularDataset::new(headers, rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(MapforgeError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; tab gets a small bonus
        let score = if consistent {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_semicolon_with_decimal_commas() {
        let data = b"provinsi;nilai\nACEH;\"1,5\"\nBALI;\"2,5\"";
        assert_eq!(detect_delimiter(data).unwrap(), b';');
    }

    #[test]
    fn test_parse_csv() {
        let parser = Parser::new();
        let data = b"country,year,value\nID,2020,3.5\nMY,2020,4";
        let table = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(table.headers, vec!["country", "year", "value"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("ID"));
        assert_eq!(table.get(1, 2), Some("4"));
    }

    #[test]
    fn test_parse_strips_bom() {
        let parser = Parser::new();
        let table = parser.parse_slice(b"\xEF\xBB\xBFprovinsi,value\nACEH,1\n").unwrap();
        assert_eq!(table.headers[0], "provinsi");
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let parser = Parser::new();
        let table = parser.parse_slice(b"country,value\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_empty_input_is_error() {
        let parser = Parser::new();
        assert!(matches!(parser.parse_slice(b""), Err(MapforgeError::EmptyData(_))));
    }
}
