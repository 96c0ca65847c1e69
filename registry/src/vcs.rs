// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Version-Control Capability
//!
//! The engine needs exactly two things from version control: the list of
//! paths that changed between two revisions, and the ability to put either
//! revision's tree on disk. [`ChangeSource`] is that capability and nothing
//! more; the core never sees refs, objects, or remotes.
//!
//! [`GitCli`] is the production backend. It shells out to the `git` binary
//! rather than linking a git library — the checker always runs where a git
//! checkout already exists, so the binary is guaranteed present and the
//! dependency stays out of the build.

use std::path::PathBuf;
use std::process::Command;

use crate::diff::{ChangeKind, ChangedPath};
use crate::error::FatalError;

/// The narrow view of version control the diff engine needs.
pub trait ChangeSource {
    /// Lists paths that differ between `base` and `head`, with how each
    /// changed.
    fn changed_paths(&self, base: &str, head: &str) -> Result<Vec<ChangedPath>, FatalError>;

    /// Materializes `revision`'s tree onto the working directory.
    fn materialize(&self, revision: &str) -> Result<(), FatalError>;
}

/// [`ChangeSource`] backed by the `git` binary in a working directory.
#[derive(Debug)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// A git backend operating on the repository at `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Fetches `branch` of the upstream repository at `url` into
    /// `refs/remotes/upstream/<branch>`.
    pub fn fetch_upstream(&self, url: &str, branch: &str) -> Result<(), FatalError> {
        let refspec = format!("+refs/heads/{branch}:refs/remotes/upstream/{branch}");
        self.git(&["fetch", url, &refspec])?;
        Ok(())
    }

    /// Resolves a revision expression to a commit hash.
    pub fn resolve(&self, revision: &str) -> Result<String, FatalError> {
        let out = self.git(&["rev-parse", "--verify", revision])?;
        let hash = out.trim();
        if hash.is_empty() {
            return Err(FatalError::GitOutput(format!(
                "rev-parse {revision} produced no hash"
            )));
        }
        Ok(hash.to_string())
    }

    fn git(&self, args: &[&str]) -> Result<String, FatalError> {
        tracing::debug!(?args, "running git");
        let output = Command::new("git")
            .current_dir(&self.workdir)
            .args(args)
            .output()
            .map_err(|source| FatalError::GitSpawn { source })?;
        if !output.status.success() {
            return Err(FatalError::GitCommand {
                command: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ChangeSource for GitCli {
    fn changed_paths(&self, base: &str, head: &str) -> Result<Vec<ChangedPath>, FatalError> {
        // --no-renames keeps the status letters to A/D/M; a renamed record
        // must show up as a delete plus an add.
        let out = self.git(&["diff", "--name-status", "--no-renames", base, head])?;
        parse_name_status(&out)
    }

    fn materialize(&self, revision: &str) -> Result<(), FatalError> {
        self.git(&["checkout", "--force", "--quiet", revision])?;
        Ok(())
    }
}

/// Parses `git diff --name-status` output into a change list.
fn parse_name_status(out: &str) -> Result<Vec<ChangedPath>, FatalError> {
    let mut changes = Vec::new();
    for line in out.lines() {
        if line.is_empty() {
            continue;
        }
        let (status, path) = line
            .split_once('\t')
            .ok_or_else(|| FatalError::GitOutput(format!("unparseable diff line: {line}")))?;
        let kind = match status {
            "A" => ChangeKind::Added,
            "D" => ChangeKind::Deleted,
            // T is a mode/type change on a path that still exists.
            "M" | "T" => ChangeKind::Modified,
            _ => {
                return Err(FatalError::GitOutput(format!(
                    "unexpected diff status '{status}' for {path}"
                )))
            }
        };
        changes.push(ChangedPath {
            path: path.to_string(),
            kind,
        });
    }
    Ok(changes)
}
