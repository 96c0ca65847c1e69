// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Catmunch Registry Checker
//!
//! Entry point for the `catmunch-registry` binary. Parses CLI arguments,
//! initializes logging, and drives the validation phases:
//!
//! - `check` — the mandatory full pass over the working directory.
//! - `merge` — merge pre-check (base snapshot load, change-set application)
//!   before the mandatory full pass. Pre-check findings are reported but
//!   only the full pass decides the exit code.
//! - `roa`   — full pass, then write the ROA listings.
//!
//! Exit status is zero only when the full pass records no validation
//! failure. Infrastructure faults (unreadable tree, git errors) abort with
//! a non-zero status through the fatal error channel.

mod cli;
mod logging;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use catmunch_registry::cross::cross_validate;
use catmunch_registry::diff::apply_changes;
use catmunch_registry::report::ValidationReport;
use catmunch_registry::roa;
use catmunch_registry::store::RegistryState;
use catmunch_registry::vcs::{ChangeSource, GitCli};

use cli::{Commands, MergeArgs, RegistryCli, RoaArgs};
use logging::LogFormat;

fn main() -> Result<ExitCode> {
    let args = RegistryCli::parse();
    logging::init_logging(
        "catmunch_registry=info,catmunch_registry_cli=info",
        LogFormat::from_str_lossy(&args.log_format),
    );

    let dir = args.dir.clone();
    match args.command.unwrap_or(Commands::Check) {
        Commands::Check => run_full(&dir).map(|(_, valid)| exit_for(valid)),
        Commands::Merge(merge) => run_merge(&dir, &merge),
        Commands::Roa(roa_args) => run_roa(&dir, &roa_args),
    }
}

/// The mandatory full pass: fresh state, bulk load, cross-validation.
fn run_full(dir: &Path) -> Result<(RegistryState, bool)> {
    tracing::info!(dir = %dir.display(), "running full validation pass");
    let mut state = RegistryState::new();
    let mut report = ValidationReport::new();
    state
        .load_all(dir, &mut report)
        .context("full load of the registry tree failed")?;
    cross_validate(&state, &mut report);

    if report.is_valid() {
        tracing::info!("registry is valid");
    } else {
        tracing::error!(failures = report.len(), "registry is not valid");
    }
    Ok((state, report.is_valid()))
}

/// Merge pre-check, then the full pass.
fn run_merge(dir: &Path, args: &MergeArgs) -> Result<ExitCode> {
    let git = GitCli::new(dir);
    git.fetch_upstream(&args.upstream_url, &args.upstream_branch)
        .context("fetching the upstream branch failed")?;
    let head = git.resolve("HEAD")?;
    let base = git.resolve(&format!("refs/remotes/upstream/{}", args.upstream_branch))?;
    tracing::info!(%base, %head, "merge pre-check");

    precheck(dir, &git, &base, &head)?;

    // The pre-check leaves the head tree materialized; the full pass runs
    // over exactly what the merge request proposes.
    let (_, valid) = run_full(dir)?;
    Ok(exit_for(valid))
}

/// Loads the base snapshot, then applies the base→head change set against
/// it, validating each change. Findings are reported; they do not decide
/// the exit code — the full pass that follows does.
fn precheck(dir: &Path, source: &dyn ChangeSource, base: &str, head: &str) -> Result<()> {
    let changes = source.changed_paths(base, head)?;
    tracing::info!(changed = changes.len(), "change set computed");

    source.materialize(base)?;
    let mut state = RegistryState::new();
    let mut report = ValidationReport::new();
    state
        .load_all(dir, &mut report)
        .context("loading the base snapshot failed")?;
    if !report.is_valid() {
        tracing::warn!(
            failures = report.len(),
            "the upstream base snapshot itself has invalid records"
        );
    }

    source.materialize(head)?;
    let applied = apply_changes(&mut state, dir, &changes, &mut report);

    tracing::info!(
        applied = applied.len(),
        failures = report.len(),
        "merge pre-check complete"
    );
    Ok(())
}

/// Full pass, then ROA emission. Listings are written only after a clean
/// pass; an invalid registry produces no artifacts.
fn run_roa(dir: &Path, args: &RoaArgs) -> Result<ExitCode> {
    let (state, valid) = run_full(dir)?;
    if !valid {
        return Ok(ExitCode::FAILURE);
    }

    let out = &args.out;
    fs::create_dir_all(out)
        .with_context(|| format!("failed to create ROA directory {}", out.display()))?;

    let v4 = roa::generate_v4(&state);
    let v6 = roa::generate_v6(&state);
    let write = |name: &str, contents: &str| -> Result<()> {
        let path = out.join(name);
        fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))
    };
    write("roa4.conf", &v4)?;
    write("roa6.conf", &v6)?;
    write("roa.conf", &format!("{v4}{v6}"))?;
    tracing::info!(dir = %out.display(), "ROA listings written");
    Ok(ExitCode::SUCCESS)
}

fn exit_for(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
