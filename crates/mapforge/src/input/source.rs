//! Tabular dataset and source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata about a loaded tabular source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the source was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// An immutable table of string cells with a fixed, ordered header set.
///
/// Rows are stored positionally. The constructors give every row one cell per
/// header; rows pushed directly may be shorter, and the feature builders read
/// their missing cells as empty.
#[derive(Debug, Clone, Default)]
pub struct TabularDataset {
    /// Column headers, in source order.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
}

impl TabularDataset {
    /// Create a dataset, padding or truncating rows to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self { headers, rows }
    }

    /// Build a dataset from row mappings. Missing keys become empty cells.
    pub fn from_records<I, R, K, V>(headers: Vec<String>, records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let rows = records
            .into_iter()
            .map(|record| {
                let mut row = vec![String::new(); headers.len()];
                for (key, value) in record {
                    if let Some(idx) = headers.iter().position(|h| h == key.as_ref()) {
                        row[idx] = value.into();
                    }
                }
                row
            })
            .collect();

        Self { headers, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a header (case-sensitive).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Whether a header exists (case-sensitive).
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(|s| s.as_str()).unwrap_or(""))
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// A row as an ordered header -> value mapping.
    pub fn record(&self, row: usize) -> Option<IndexMap<&str, &str>> {
        let cells = self.rows.get(row)?;
        Some(
            self.headers
                .iter()
                .zip(cells)
                .map(|(h, v)| (h.as_str(), v.as_str()))
                .collect(),
        )
    }

    /// The first row, used as the sample for column inference.
    ///
    /// Empty when the dataset has no rows.
    pub fn sample_row(&self) -> IndexMap<&str, &str> {
        self.record(0).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pads_and_truncates() {
        let table = TabularDataset::new(
            vec!["a".into(), "b".into()],
            vec![vec!["1".into()], vec!["1".into(), "2".into(), "3".into()]],
        );
        assert_eq!(table.rows[0], vec!["1", ""]);
        assert_eq!(table.rows[1], vec!["1", "2"]);
    }

    #[test]
    fn test_from_records() {
        let table = TabularDataset::from_records(
            vec!["country".into(), "value".into()],
            vec![vec![("value", "3.5"), ("country", "ID")]],
        );
        assert_eq!(table.get(0, 0), Some("ID"));
        assert_eq!(table.get(0, 1), Some("3.5"));
    }

    #[test]
    fn test_sample_row_preserves_header_order() {
        let table = TabularDataset::new(
            vec!["z".into(), "a".into()],
            vec![vec!["1".into(), "2".into()]],
        );
        let sample = table.sample_row();
        let keys: Vec<&str> = sample.keys().copied().collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert!(TabularDataset::default().sample_row().is_empty());
    }
}
