// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Catmunch Registry — Validation Engine
//!
//! The Catmunch network is administered through a git repository of small
//! YAML documents: one file per autonomous system, domain, address block,
//! and route announcement. This crate is the machine that decides whether
//! that repository is telling a consistent story.
//!
//! ## Architecture
//!
//! The engine is split into modules that mirror the actual phases of a
//! validation run:
//!
//! - **config** — The constants that define the Catmunch address plan.
//! - **record** — Typed record schemas and their per-kind structural checks.
//! - **trie** — Binary allocation trie enforcing non-overlapping blocks.
//! - **store** — [`RegistryState`], the keyed collections plus both tries.
//! - **cross** — Post-load invariants that span record kinds.
//! - **diff** — Incremental application of a base→head change list.
//! - **vcs** — The narrow version-control capability and its git backend.
//! - **roa** — Deterministic Route-Origin-Authorization text emission.
//! - **report** — The accumulating validation failure sink.
//! - **error** — The fatal/validation error split.
//!
//! ## Design Philosophy
//!
//! 1. Infrastructure faults abort; record faults accumulate. A single run
//!    surfaces every broken record, not just the first one.
//! 2. No global state. A [`RegistryState`] is a plain value owned by the
//!    run that created it.
//! 3. Records are immutable once validated. Modification is removal plus
//!    insertion of a freshly validated value.
//!
//! [`RegistryState`]: store::RegistryState

pub mod config;
pub mod cross;
pub mod diff;
pub mod error;
pub mod record;
pub mod report;
pub mod roa;
pub mod store;
pub mod trie;
pub mod vcs;
