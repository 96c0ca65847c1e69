// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Diff Engine
//!
//! Turns a base→head path-change list into ordered store operations, so a
//! proposed change set is validated against *the base state mutated by the
//! change set* rather than against the head tree alone.
//!
//! Precondition: the store already holds the fully loaded base snapshot.
//! Added paths decode the head-side file and insert; deleted paths remove
//! the base-side record (and report its value); modified paths replace.
//! Per-path failures accumulate in the report and application continues —
//! the same batch semantics as a full load.

use std::fs;
use std::path::Path;

use crate::error::ValidationError;
use crate::record::{Record, ResourceKind};
use crate::report::ValidationReport;
use crate::store::RegistryState;

/// What happened to a path between base and head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Deleted,
    Modified,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ChangeKind::Added => "added",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Modified => "modified",
        })
    }
}

/// One entry of a base→head change list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedPath {
    /// Repository-relative path, e.g. `inetnum/10.2.0.0_16`.
    pub path: String,
    pub kind: ChangeKind,
}

/// One successfully applied change, for announcement to the submitter.
/// For deletions the summary describes the base-side record that was
/// removed; otherwise the head-side record that went in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedChange {
    pub path: String,
    pub kind: ChangeKind,
    pub summary: String,
}

/// Applies a change list to a base-loaded store, reading head-side files
/// from `head_root`. Returns the journal of changes that went through.
pub fn apply_changes(
    state: &mut RegistryState,
    head_root: &Path,
    changes: &[ChangedPath],
    report: &mut ValidationReport,
) -> Vec<AppliedChange> {
    let mut applied = Vec::new();
    for change in changes {
        let Some((kind, key)) = ResourceKind::from_path(&change.path) else {
            report.record(
                change.path.clone(),
                ValidationError::UnknownNamespace {
                    path: change.path.clone(),
                },
            );
            continue;
        };

        let outcome = match change.kind {
            ChangeKind::Added => decode_head(head_root, &change.path, kind)
                .and_then(|record| {
                    let summary = record.summary();
                    state.insert(key, record)?;
                    Ok(summary)
                }),
            ChangeKind::Deleted => state.remove(kind, key).map(|old| old.summary()),
            ChangeKind::Modified => decode_head(head_root, &change.path, kind)
                .and_then(|record| {
                    let summary = record.summary();
                    state.replace(key, record)?;
                    Ok(summary)
                }),
        };

        match outcome {
            Ok(summary) => {
                tracing::info!(path = %change.path, kind = %change.kind, %summary, "change applied");
                applied.push(AppliedChange {
                    path: change.path.clone(),
                    kind: change.kind,
                    summary,
                });
            }
            Err(err) => report.record(change.path.clone(), err),
        }
    }
    applied
}

/// Reads and decodes the head-side file for a changed path. An unreadable
/// file on a path git claims exists is reported against the path like any
/// other broken record.
fn decode_head(
    head_root: &Path,
    path: &str,
    kind: ResourceKind,
) -> Result<Record, ValidationError> {
    let bytes = fs::read(head_root.join(path)).map_err(|e| ValidationError::Decode {
        reason: e.to_string(),
    })?;
    Record::decode(kind, &bytes)
}
