// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Registry Store
//!
//! [`RegistryState`] holds everything a validation run knows: one keyed
//! collection per record kind plus the two allocation tries. It is a plain
//! value — whoever owns the run owns the state, and two runs never share.
//!
//! Collections are `BTreeMap`s so iteration order is fixed; ROA output and
//! cross-validation diagnostics come out identical across runs on identical
//! input.
//!
//! Two lifecycles are supported:
//!
//! - **full** — [`RegistryState::load_all`] resets everything and bulk-loads
//!   a directory tree.
//! - **incremental** — a fully loaded base state is patched through
//!   [`insert`](RegistryState::insert) / [`remove`](RegistryState::remove) /
//!   [`replace`](RegistryState::replace) by the diff engine.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use ipnet::IpNet;

use crate::config;
use crate::error::{FatalError, ValidationError};
use crate::record::{Autnum, Domain, Inet6num, Inetnum, Record, ResourceKind, Route, Route6};
use crate::report::ValidationReport;
use crate::trie::AllocationTrie;

/// The complete validated state of one registry snapshot.
#[derive(Debug)]
pub struct RegistryState {
    autnums: BTreeMap<String, Autnum>,
    domains: BTreeMap<String, Domain>,
    inetnums: BTreeMap<String, Inetnum>,
    inet6nums: BTreeMap<String, Inet6num>,
    routes: BTreeMap<String, Route>,
    routes6: BTreeMap<String, Route6>,
    trie_v4: AllocationTrie,
    trie_v6: AllocationTrie,
}

impl Default for RegistryState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryState {
    /// Creates an empty state with fresh tries for both families.
    pub fn new() -> Self {
        Self {
            autnums: BTreeMap::new(),
            domains: BTreeMap::new(),
            inetnums: BTreeMap::new(),
            inet6nums: BTreeMap::new(),
            routes: BTreeMap::new(),
            routes6: BTreeMap::new(),
            trie_v4: AllocationTrie::new(*config::V4_ROOT_NET),
            trie_v6: AllocationTrie::new(*config::V6_ROOT_NET),
        }
    }

    /// Drops every record and every trie mark. No state from a previous
    /// phase survives a reset.
    pub fn reset(&mut self) {
        self.autnums.clear();
        self.domains.clear();
        self.inetnums.clear();
        self.inet6nums.clear();
        self.routes.clear();
        self.routes6.clear();
        self.trie_v4.reset();
        self.trie_v6.reset();
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn autnums(&self) -> &BTreeMap<String, Autnum> {
        &self.autnums
    }

    pub fn domains(&self) -> &BTreeMap<String, Domain> {
        &self.domains
    }

    pub fn inetnums(&self) -> &BTreeMap<String, Inetnum> {
        &self.inetnums
    }

    pub fn inet6nums(&self) -> &BTreeMap<String, Inet6num> {
        &self.inet6nums
    }

    pub fn routes(&self) -> &BTreeMap<String, Route> {
        &self.routes
    }

    pub fn routes6(&self) -> &BTreeMap<String, Route6> {
        &self.routes6
    }

    /// The IPv4 allocation trie.
    pub fn trie_v4(&self) -> &AllocationTrie {
        &self.trie_v4
    }

    /// The IPv6 allocation trie.
    pub fn trie_v6(&self) -> &AllocationTrie {
        &self.trie_v6
    }

    /// True if the collection for `kind` holds `key`.
    pub fn contains_key(&self, kind: ResourceKind, key: &str) -> bool {
        match kind {
            ResourceKind::Autnum => self.autnums.contains_key(key),
            ResourceKind::Domain => self.domains.contains_key(key),
            ResourceKind::Inetnum => self.inetnums.contains_key(key),
            ResourceKind::Inet6num => self.inet6nums.contains_key(key),
            ResourceKind::Route => self.routes.contains_key(key),
            ResourceKind::Route6 => self.routes6.contains_key(key),
        }
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Validates and inserts one record under `key`.
    ///
    /// Fails on a duplicate key, a structural validation failure, or — for
    /// address blocks — a trie rejection. On failure the state is unchanged
    /// except for trie `dirty` marks left by a failed block walk, which the
    /// next [`reset`](Self::reset) clears.
    pub fn insert(&mut self, key: &str, record: Record) -> Result<(), ValidationError> {
        if self.contains_key(record.kind(), key) {
            return Err(ValidationError::DuplicateKey {
                key: key.to_string(),
            });
        }
        match record {
            Record::Autnum(a) => {
                a.validate(key)?;
                self.autnums.insert(key.to_string(), a);
            }
            Record::Domain(d) => {
                d.validate(key)?;
                self.domains.insert(key.to_string(), d);
            }
            Record::Inetnum(b) => {
                let net = b.validate(key)?;
                self.trie_v4.insert(&IpNet::V4(net))?;
                self.inetnums.insert(key.to_string(), b);
            }
            Record::Inet6num(b) => {
                let net = b.validate(key)?;
                self.trie_v6.insert(&IpNet::V6(net))?;
                self.inet6nums.insert(key.to_string(), b);
            }
            Record::Route(r) => {
                r.validate(key)?;
                self.routes.insert(key.to_string(), r);
            }
            Record::Route6(r) => {
                r.validate(key)?;
                self.routes6.insert(key.to_string(), r);
            }
        }
        Ok(())
    }

    /// Removes and returns the record under `key`, so the caller can report
    /// what was removed.
    ///
    /// Address-block removal does not retract trie marks; see the module
    /// docs of [`crate::trie`].
    pub fn remove(&mut self, kind: ResourceKind, key: &str) -> Result<Record, ValidationError> {
        let not_found = || ValidationError::NotFound {
            key: key.to_string(),
        };
        Ok(match kind {
            ResourceKind::Autnum => Record::Autnum(self.autnums.remove(key).ok_or_else(not_found)?),
            ResourceKind::Domain => Record::Domain(self.domains.remove(key).ok_or_else(not_found)?),
            ResourceKind::Inetnum => {
                Record::Inetnum(self.inetnums.remove(key).ok_or_else(not_found)?)
            }
            ResourceKind::Inet6num => {
                Record::Inet6num(self.inet6nums.remove(key).ok_or_else(not_found)?)
            }
            ResourceKind::Route => Record::Route(self.routes.remove(key).ok_or_else(not_found)?),
            ResourceKind::Route6 => Record::Route6(self.routes6.remove(key).ok_or_else(not_found)?),
        })
    }

    /// Replaces the record under `key`: remove, then insert the new value.
    /// Returns the old record.
    pub fn replace(&mut self, key: &str, record: Record) -> Result<Record, ValidationError> {
        let old = self.remove(record.kind(), key)?;
        self.insert(key, record)?;
        Ok(old)
    }

    // -----------------------------------------------------------------------
    // Full load
    // -----------------------------------------------------------------------

    /// Resets the state and bulk-loads every record under `root`.
    ///
    /// Each kind's namespace directory is enumerated in sorted filename
    /// order; hidden files and non-files are skipped. Records that fail to
    /// decode or validate land in `report` and the load continues — the
    /// batch surfaces every broken record in one pass. Unreadable
    /// directories or files are fatal.
    pub fn load_all(
        &mut self,
        root: &Path,
        report: &mut ValidationReport,
    ) -> Result<(), FatalError> {
        self.reset();
        for kind in ResourceKind::ALL {
            let dir = root.join(kind.dir());
            let mut names = Vec::new();
            let entries = fs::read_dir(&dir).map_err(|e| FatalError::io(&dir, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| FatalError::io(&dir, e))?;
                let file_type = entry.file_type().map_err(|e| FatalError::io(entry.path(), e))?;
                if !file_type.is_file() {
                    continue;
                }
                let name = entry.file_name().to_string_lossy().into_owned();
                if name.starts_with('.') {
                    continue;
                }
                names.push(name);
            }
            names.sort();

            for name in names {
                let path = format!("{}/{}", kind.dir(), name);
                let file = dir.join(&name);
                let bytes = fs::read(&file).map_err(|e| FatalError::io(&file, e))?;
                match Record::decode(kind, &bytes).and_then(|r| self.insert(&name, r)) {
                    Ok(()) => tracing::debug!(%path, "record loaded"),
                    Err(err) => report.record(path, err),
                }
            }
            tracing::info!(kind = %kind, "namespace loaded");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn autnum_record(asn: &str, name: &str) -> Record {
        Record::Autnum(Autnum {
            autnum: asn.to_string(),
            name: name.to_string(),
            description: String::new(),
        })
    }

    fn inetnum_record(cidr: &str) -> Record {
        Record::Inetnum(Inetnum {
            cidr: cidr.to_string(),
            description: String::new(),
            ns: Vec::new(),
        })
    }

    #[test]
    fn insert_and_remove_round_trip() {
        let mut state = RegistryState::new();
        state
            .insert("AS64512", autnum_record("AS64512", "CAT-NET"))
            .unwrap();
        assert!(state.contains_key(ResourceKind::Autnum, "AS64512"));

        let removed = state.remove(ResourceKind::Autnum, "AS64512").unwrap();
        assert_eq!(removed.summary(), "AS64512 (CAT-NET)");
        assert!(!state.contains_key(ResourceKind::Autnum, "AS64512"));
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mut state = RegistryState::new();
        state
            .insert("AS64512", autnum_record("AS64512", "CAT-NET"))
            .unwrap();
        match state.insert("AS64512", autnum_record("AS64512", "OTHER")) {
            Err(ValidationError::DuplicateKey { .. }) => {}
            other => panic!("expected DuplicateKey, got {:?}", other),
        }
    }

    #[test]
    fn remove_of_absent_key_is_not_found() {
        let mut state = RegistryState::new();
        match state.remove(ResourceKind::Domain, "ghost.catmunch") {
            Err(ValidationError::NotFound { .. }) => {}
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn block_insert_feeds_the_trie() {
        let mut state = RegistryState::new();
        state.insert("10.1.0.0_16", inetnum_record("10.1.0.0/16")).unwrap();
        assert!(state.trie_v4().contains(&"10.1.5.0/24".parse().unwrap()));

        // Overlapping sibling block is refused and never stored.
        match state.insert("10.1.2.0_24", inetnum_record("10.1.2.0/24")) {
            Err(ValidationError::Allocation(_)) => {}
            other => panic!("expected Allocation, got {:?}", other),
        }
        assert!(!state.contains_key(ResourceKind::Inetnum, "10.1.2.0_24"));
    }

    #[test]
    fn replace_returns_old_record() {
        let mut state = RegistryState::new();
        state
            .insert("AS64512", autnum_record("AS64512", "CAT-NET"))
            .unwrap();
        let old = state
            .replace("AS64512", autnum_record("AS64512", "NEW-NAME"))
            .unwrap();
        assert_eq!(old.summary(), "AS64512 (CAT-NET)");
        assert_eq!(state.autnums()["AS64512"].name, "NEW-NAME");
    }

    fn write_registry(root: &Path, files: &[(&str, &str)]) {
        for kind in ResourceKind::ALL {
            fs::create_dir_all(root.join(kind.dir())).unwrap();
        }
        for (path, contents) in files {
            fs::write(root.join(path), contents).unwrap();
        }
    }

    #[test]
    fn load_all_batches_failures_and_skips_hidden_files() {
        let tmp = tempfile::tempdir().unwrap();
        write_registry(
            tmp.path(),
            &[
                ("autnum/AS64512", "autnum: AS64512\nname: CAT-NET\n"),
                // Wrong range: recorded, load continues.
                ("autnum/AS1", "autnum: AS1\nname: PUBLIC\n"),
                ("inetnum/10.1.0.0_16", "cidr: 10.1.0.0/16\n"),
                ("inetnum/.hidden", "not even yaml ["),
                ("route/10.1.0.0_24", "cidr: 10.1.0.0/24\norigin: [AS64512]\n"),
            ],
        );

        let mut state = RegistryState::new();
        let mut report = ValidationReport::new();
        state.load_all(tmp.path(), &mut report).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report.entries()[0].path, "autnum/AS1");
        assert!(state.contains_key(ResourceKind::Autnum, "AS64512"));
        assert!(state.contains_key(ResourceKind::Inetnum, "10.1.0.0_16"));
        assert!(state.contains_key(ResourceKind::Route, "10.1.0.0_24"));
        assert!(!state.contains_key(ResourceKind::Inetnum, ".hidden"));
    }

    #[test]
    fn load_all_resets_previous_state() {
        let tmp = tempfile::tempdir().unwrap();
        write_registry(tmp.path(), &[("inetnum/10.1.0.0_16", "cidr: 10.1.0.0/16\n")]);

        let mut state = RegistryState::new();
        // Pre-existing allocation that would collide if it leaked through.
        state.insert("10.1.0.0_16", inetnum_record("10.1.0.0/16")).unwrap();
        state.insert("AS64512", autnum_record("AS64512", "CAT-NET")).unwrap();

        let mut report = ValidationReport::new();
        state.load_all(tmp.path(), &mut report).unwrap();

        assert!(report.is_valid());
        assert!(!state.contains_key(ResourceKind::Autnum, "AS64512"));
        assert!(state.contains_key(ResourceKind::Inetnum, "10.1.0.0_16"));
    }

    #[test]
    fn load_all_missing_namespace_dir_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let mut state = RegistryState::new();
        let mut report = ValidationReport::new();
        match state.load_all(tmp.path(), &mut report) {
            Err(FatalError::Io { .. }) => {}
            other => panic!("expected Io, got {:?}", other),
        }
    }
}
