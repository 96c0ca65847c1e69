// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # CLI Interface
//!
//! Defines the command-line argument structure for `catmunch-registry`
//! using `clap` derive. Three subcommands: `check` (the default), `merge`,
//! and `roa`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Catmunch registry checker.
///
/// Validates a checkout of the registry repository: record structure,
/// allocation overlap, route containment, and origin ASN references. Can
/// pre-check a merge request against the upstream branch and emit ROA
/// listings from the validated route set.
#[derive(Parser, Debug)]
#[command(
    name = "catmunch-registry",
    about = "Catmunch registry checker and ROA generator",
    version,
    propagate_version = true
)]
pub struct RegistryCli {
    /// Path to the registry checkout to validate.
    #[arg(long, short = 'C', global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Log output format: "pretty" or "json".
    #[arg(long, global = true, env = "CATMUNCH_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Subcommand to execute. Defaults to `check`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands for the registry checker.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full validation pass over the working directory.
    Check,
    /// Pre-check a merge request: load the upstream base snapshot, apply
    /// the proposed change set, then run the mandatory full pass.
    Merge(MergeArgs),
    /// Run the full validation pass, then write the ROA listings.
    Roa(RoaArgs),
}

/// Arguments for the `merge` subcommand.
#[derive(Parser, Debug)]
pub struct MergeArgs {
    /// URL of the upstream registry repository the merge request targets.
    ///
    /// CI pipelines pass this through the environment.
    #[arg(long, env = "CI_REPOSITORY_URL")]
    pub upstream_url: String,

    /// Upstream branch the merge request targets.
    #[arg(long, default_value = "main")]
    pub upstream_branch: String,
}

/// Arguments for the `roa` subcommand.
#[derive(Parser, Debug)]
pub struct RoaArgs {
    /// Directory to write `roa4.conf`, `roa6.conf`, and `roa.conf` into.
    /// Created if it does not exist.
    #[arg(long, short = 'o', default_value = "roa")]
    pub out: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Ensures the derive macros produce a valid CLI definition.
        RegistryCli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_defaults_to_check() {
        let cli = RegistryCli::parse_from(["catmunch-registry"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.dir, PathBuf::from("."));
    }

    #[test]
    fn merge_takes_upstream_url() {
        let cli = RegistryCli::parse_from([
            "catmunch-registry",
            "merge",
            "--upstream-url",
            "https://git.catmunch.example/registry.git",
        ]);
        match cli.command {
            Some(Commands::Merge(args)) => {
                assert_eq!(args.upstream_branch, "main");
                assert!(args.upstream_url.ends_with("registry.git"));
            }
            other => panic!("expected merge, got {:?}", other),
        }
    }
}
