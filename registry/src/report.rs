// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Validation Report
//!
//! The accumulating failure sink. Every per-record failure lands here with
//! the path it was found at, and the run keeps going — the point of a
//! registry check is to hand the submitter the complete list of what they
//! broke, not a game of whack-a-mole.

use crate::error::ValidationError;

/// One recorded failure: the offending path plus the reason.
#[derive(Debug)]
pub struct ReportEntry {
    /// Repository-relative path of the record, e.g. `inetnum/10.1.0.0_16`.
    pub path: String,
    /// What was wrong with it.
    pub error: ValidationError,
}

/// Accumulates validation failures across a whole run.
///
/// A fresh report is valid; recording any entry flips it invalid for good.
#[derive(Debug, Default)]
pub struct ValidationReport {
    entries: Vec<ReportEntry>,
}

impl ValidationReport {
    /// Creates an empty (valid) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure against a path and logs it.
    pub fn record(&mut self, path: impl Into<String>, error: ValidationError) {
        let path = path.into();
        tracing::error!(%path, %error, "validation failure");
        self.entries.push(ReportEntry { path, error });
    }

    /// True while no failure has been recorded.
    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the report holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All recorded failures, in discovery order.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_report_is_valid() {
        let report = ValidationReport::new();
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn recording_flips_validity() {
        let mut report = ValidationReport::new();
        report.record(
            "autnum/AS1",
            ValidationError::PublicAsn {
                asn: "AS1".to_string(),
            },
        );
        assert!(!report.is_valid());
        assert_eq!(report.len(), 1);
        assert_eq!(report.entries()[0].path, "autnum/AS1");
    }
}
