// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Record Schema
//!
//! Typed schemas for the six record kinds and their structural checks.
//!
//! ```text
//! autnum.rs     — Autnum records and ASN literal parsing
//! domain.rs     — Domain records under the root zone
//! block.rs      — Inetnum / Inet6num address blocks
//! route.rs      — Route / Route6 announcements
//! nameserver.rs — ns: entries shared by domains and blocks
//! cidr.rs       — Canonical CIDR parsing and on-disk key rendering
//! ```
//!
//! Every kind follows the same contract: a record decodes from YAML bytes,
//! then `validate(key)` checks the content against itself and against the
//! on-disk key it was found under. A record that survives both is safe to
//! put in the store; everything cross-record is deferred to
//! [`crate::cross`].

pub mod autnum;
pub mod block;
pub mod cidr;
pub mod domain;
pub mod nameserver;
pub mod route;

pub use autnum::{parse_asn, Autnum};
pub use block::{Inet6num, Inetnum};
pub use domain::Domain;
pub use nameserver::NameServer;
pub use route::{Route, Route6};

use serde::de::DeserializeOwned;

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Resource kinds
// ---------------------------------------------------------------------------

/// The six resource namespaces of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Autnum,
    Domain,
    Inetnum,
    Inet6num,
    Route,
    Route6,
}

impl ResourceKind {
    /// All kinds, in the order a full load processes them. Autnums first so
    /// the log reads top-down the way the cross checks reference things.
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Autnum,
        ResourceKind::Domain,
        ResourceKind::Inetnum,
        ResourceKind::Inet6num,
        ResourceKind::Route,
        ResourceKind::Route6,
    ];

    /// The namespace directory name for this kind.
    pub fn dir(self) -> &'static str {
        match self {
            ResourceKind::Autnum => "autnum",
            ResourceKind::Domain => "domain",
            ResourceKind::Inetnum => "inetnum",
            ResourceKind::Inet6num => "inet6num",
            ResourceKind::Route => "route",
            ResourceKind::Route6 => "route6",
        }
    }

    /// Classifies a repository-relative path into a kind plus on-disk key.
    ///
    /// Returns `None` for paths outside the six namespaces or nested deeper
    /// than one level.
    pub fn from_path(path: &str) -> Option<(ResourceKind, &str)> {
        let (dir, key) = path.split_once('/')?;
        if key.is_empty() || key.contains('/') {
            return None;
        }
        let kind = match dir {
            "autnum" => ResourceKind::Autnum,
            "domain" => ResourceKind::Domain,
            "inetnum" => ResourceKind::Inetnum,
            "inet6num" => ResourceKind::Inet6num,
            "route" => ResourceKind::Route,
            "route6" => ResourceKind::Route6,
            _ => return None,
        };
        Some((kind, key))
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir())
    }
}

// ---------------------------------------------------------------------------
// The record union
// ---------------------------------------------------------------------------

/// Any registry record, tagged by kind. This is what the diff engine moves
/// around and what the store hands back on removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Autnum(Autnum),
    Domain(Domain),
    Inetnum(Inetnum),
    Inet6num(Inet6num),
    Route(Route),
    Route6(Route6),
}

impl Record {
    /// Decodes YAML bytes into a record of the given kind.
    pub fn decode(kind: ResourceKind, bytes: &[u8]) -> Result<Record, ValidationError> {
        Ok(match kind {
            ResourceKind::Autnum => Record::Autnum(decode(bytes)?),
            ResourceKind::Domain => Record::Domain(decode(bytes)?),
            ResourceKind::Inetnum => Record::Inetnum(decode(bytes)?),
            ResourceKind::Inet6num => Record::Inet6num(decode(bytes)?),
            ResourceKind::Route => Record::Route(decode(bytes)?),
            ResourceKind::Route6 => Record::Route6(decode(bytes)?),
        })
    }

    /// The kind this record belongs to.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Record::Autnum(_) => ResourceKind::Autnum,
            Record::Domain(_) => ResourceKind::Domain,
            Record::Inetnum(_) => ResourceKind::Inetnum,
            Record::Inet6num(_) => ResourceKind::Inet6num,
            Record::Route(_) => ResourceKind::Route,
            Record::Route6(_) => ResourceKind::Route6,
        }
    }

    /// A short human-readable identity for log lines.
    pub fn summary(&self) -> String {
        match self {
            Record::Autnum(a) => format!("{} ({})", a.autnum, a.name),
            Record::Domain(d) => d.domain.clone(),
            Record::Inetnum(b) => b.cidr.clone(),
            Record::Inet6num(b) => b.cidr.clone(),
            Record::Route(r) => r.cidr.clone(),
            Record::Route6(r) => r.cidr.clone(),
        }
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ValidationError> {
    serde_yaml::from_slice(bytes).map_err(|e| ValidationError::Decode {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_namespace_paths() {
        assert_eq!(
            ResourceKind::from_path("autnum/AS64512"),
            Some((ResourceKind::Autnum, "AS64512"))
        );
        assert_eq!(
            ResourceKind::from_path("route6/fc75:100::_40"),
            Some((ResourceKind::Route6, "fc75:100::_40"))
        );
        assert_eq!(ResourceKind::from_path("README.md"), None);
        assert_eq!(ResourceKind::from_path("scripts/check.sh"), None);
        assert_eq!(ResourceKind::from_path("inetnum/"), None);
        assert_eq!(ResourceKind::from_path("inetnum/a/b"), None);
    }

    #[test]
    fn decodes_autnum_yaml() {
        let yaml = b"autnum: AS64512\nname: CAT-NET\ndescription: test network\n";
        match Record::decode(ResourceKind::Autnum, yaml).unwrap() {
            Record::Autnum(a) => {
                assert_eq!(a.autnum, "AS64512");
                assert_eq!(a.name, "CAT-NET");
            }
            other => panic!("expected autnum, got {:?}", other),
        }
    }

    #[test]
    fn decodes_route_with_origin_list() {
        let yaml = b"cidr: 10.3.0.0/24\norigin:\n  - AS64512\n  - AS64513\n";
        match Record::decode(ResourceKind::Route, yaml).unwrap() {
            Record::Route(r) => assert_eq!(r.origin, vec!["AS64512", "AS64513"]),
            other => panic!("expected route, got {:?}", other),
        }
    }

    #[test]
    fn decode_failure_is_a_validation_error() {
        match Record::decode(ResourceKind::Domain, b": not yaml [") {
            Err(ValidationError::Decode { .. }) => {}
            other => panic!("expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn missing_optional_fields_default() {
        let yaml = b"cidr: 10.1.0.0/16\n";
        match Record::decode(ResourceKind::Inetnum, yaml).unwrap() {
            Record::Inetnum(b) => {
                assert!(b.description.is_empty());
                assert!(b.ns.is_empty());
            }
            other => panic!("expected inetnum, got {:?}", other),
        }
    }
}
