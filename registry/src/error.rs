// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Error Types
//!
//! The engine distinguishes two failure tiers and refuses to mix them:
//!
//! - [`FatalError`] — infrastructure is broken (unreadable directory, git
//!   misbehaving). The run aborts immediately; there is nothing useful a
//!   validation report could say about a disk that won't read.
//! - [`ValidationError`] — a record is broken. These accumulate in a
//!   [`ValidationReport`](crate::report::ValidationReport) so one run
//!   surfaces every problem in the repository.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::trie::TrieError;

// ---------------------------------------------------------------------------
// Fatal tier
// ---------------------------------------------------------------------------

/// Infrastructure faults. Any of these aborts the entire run.
#[derive(Debug, Error)]
pub enum FatalError {
    /// Reading a directory or file that must be readable failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// The path the failed operation touched.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The `git` binary could not be spawned at all.
    #[error("failed to invoke git: {source}")]
    GitSpawn {
        #[source]
        source: io::Error,
    },

    /// A git subcommand exited non-zero.
    #[error("git {command} failed: {stderr}")]
    GitCommand {
        /// The subcommand and arguments that were run.
        command: String,
        /// Whatever git printed on stderr, trimmed.
        stderr: String,
    },

    /// Git produced output the engine cannot interpret.
    #[error("unexpected git output: {0}")]
    GitOutput(String),
}

impl FatalError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FatalError::Io {
            path: path.into(),
            source,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation tier
// ---------------------------------------------------------------------------

/// Per-record validation failures. These never abort a run; they are
/// recorded against the offending path and processing continues.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The file is not a readable, well-formed YAML document.
    #[error("cannot decode record: {reason}")]
    Decode {
        /// Parser or I/O detail, already rendered.
        reason: String,
    },

    /// A record key already exists in its collection.
    #[error("duplicate key {key}")]
    DuplicateKey { key: String },

    /// A remove or replace referenced a key that is not in the store.
    #[error("no such record: {key}")]
    NotFound { key: String },

    /// The record's declared identity does not render to its on-disk key.
    #[error("record declares '{declared}' but is stored under key '{key}'")]
    KeyMismatch { declared: String, key: String },

    /// An ASN literal does not have the form `AS<digits>` with digits that
    /// fit in 32 bits.
    #[error("invalid ASN literal: {asn}")]
    InvalidAsn { asn: String },

    /// The ASN parses but falls outside the private ranges.
    #[error("ASN {asn} is in public space")]
    PublicAsn { asn: String },

    /// An autnum record with an empty `name` field.
    #[error("autnum {key} has no name")]
    MissingName { key: String },

    /// A domain name that does not match the registry's root zone rules.
    #[error("invalid domain name: {domain}")]
    InvalidDomain { domain: String },

    /// A CIDR string that does not parse at all.
    #[error("invalid CIDR '{cidr}': {reason}")]
    InvalidCidr { cidr: String, reason: String },

    /// A CIDR that parses but is not in canonical form (host bits set, or
    /// a non-minimal textual rendering).
    #[error("non-canonical CIDR: {cidr}")]
    NonCanonicalCidr { cidr: String },

    /// A CIDR of the wrong address family for its record kind.
    #[error("{cidr} is not an {expected} prefix")]
    WrongFamily {
        cidr: String,
        /// The expected family, "IPv4" or "IPv6".
        expected: &'static str,
    },

    /// An address block that the allocation trie rejected.
    #[error(transparent)]
    Allocation(#[from] TrieError),

    /// A nameserver hostname outside the root zone.
    #[error("nameserver {server} is not under the root zone")]
    NameserverZone { server: String },

    /// A nameserver `a` field that is not an IPv4 literal.
    #[error("nameserver {server} has invalid IPv4 address '{addr}'")]
    NameserverV4 { server: String, addr: String },

    /// A nameserver `aaaa` field that is not an IPv6 literal, or is an
    /// IPv4-mapped one.
    #[error("nameserver {server} has invalid IPv6 address '{addr}'")]
    NameserverV6 { server: String, addr: String },

    /// A route announcement that no allocated block covers.
    #[error("route {cidr} is not contained in any allocated block")]
    RouteNotContained { cidr: String },

    /// A route origin referencing an ASN with no autnum record.
    #[error("route {cidr} names origin {asn}, which is not registered")]
    UnknownOrigin { cidr: String, asn: String },

    /// A changed path outside the six resource namespaces.
    #[error("not a registry resource: {path}")]
    UnknownNamespace { path: String },
}
