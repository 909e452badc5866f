//! Row-level skip accounting.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// What was dropped while building a layer.
///
/// Skipped rows are expected input noise, not errors. The report is logged
/// once per job instead of once per row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkipReport {
    /// Rows examined.
    pub rows_total: usize,
    /// Rows that made it into the output.
    pub rows_accepted: usize,
    /// Distinct region tokens that did not resolve.
    pub unresolved_regions: BTreeSet<String>,
    /// Rows dropped for an unresolved region token.
    pub unresolved_rows: usize,
    /// Rows dropped for an unparsable or missing coordinate or value.
    pub unparsable_rows: usize,
    /// Rows dropped for the (0, 0) missing-coordinate sentinel.
    pub zero_coordinate_rows: usize,
    /// Rows dropped for an empty region cell.
    pub empty_region_rows: usize,
}

impl SkipReport {
    pub(crate) fn with_total(rows_total: usize) -> Self {
        Self {
            rows_total,
            ..Default::default()
        }
    }

    pub(crate) fn unresolved(&mut self, token: &str) {
        self.unresolved_rows += 1;
        self.unresolved_regions.insert(token.to_string());
    }

    /// Rows dropped for any reason.
    pub fn rows_skipped(&self) -> usize {
        self.rows_total - self.rows_accepted
    }

    /// True when nothing was dropped.
    pub fn is_clean(&self) -> bool {
        self.rows_skipped() == 0
    }

    /// Emit a single warning summarising the skips, if any.
    pub fn log(&self, layer: &str) {
        if self.is_clean() {
            return;
        }
        warn!(
            layer,
            skipped = self.rows_skipped(),
            total = self.rows_total,
            unparsable = self.unparsable_rows,
            zero_coordinates = self.zero_coordinate_rows,
            empty_regions = self.empty_region_rows,
            unresolved = ?self.unresolved_regions,
            "skipped rows while building layer"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_tokens_are_deduplicated() {
        let mut report = SkipReport::with_total(3);
        report.unresolved("XX");
        report.unresolved("XX");
        report.rows_accepted = 1;

        assert_eq!(report.unresolved_rows, 2);
        assert_eq!(report.unresolved_regions.len(), 1);
        assert_eq!(report.rows_skipped(), 2);
        assert!(!report.is_clean());
    }
}
