// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! Address-block records (`inetnum/`, `inet6num/`).
//!
//! Structural validation here covers the CIDR itself, the key agreement,
//! and the nameserver entries. Whether the block fits into the allocation
//! plan is the trie's call, made when the store inserts the record.

use ipnet::{Ipv4Net, Ipv6Net};
use serde::Deserialize;

use super::cidr;
use super::nameserver::NameServer;
use crate::error::ValidationError;

/// One `inetnum/<cidr>` record: an allocated IPv4 block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Inetnum {
    /// The allocated prefix, canonical text. This is the record's identity.
    pub cidr: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Nameservers for reverse delegation.
    #[serde(default)]
    pub ns: Vec<NameServer>,
}

impl Inetnum {
    /// Checks the record against its on-disk key, returning the parsed
    /// prefix for trie insertion.
    pub fn validate(&self, key: &str) -> Result<Ipv4Net, ValidationError> {
        let net = cidr::parse_canonical_v4(&self.cidr)?;
        if cidr::file_key(&self.cidr) != key {
            return Err(ValidationError::KeyMismatch {
                declared: self.cidr.clone(),
                key: key.to_string(),
            });
        }
        for ns in &self.ns {
            ns.validate()?;
        }
        Ok(net)
    }
}

/// One `inet6num/<cidr>` record: an allocated IPv6 block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Inet6num {
    /// The allocated prefix, canonical text. This is the record's identity.
    pub cidr: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Nameservers for reverse delegation.
    #[serde(default)]
    pub ns: Vec<NameServer>,
}

impl Inet6num {
    /// Checks the record against its on-disk key, returning the parsed
    /// prefix for trie insertion.
    pub fn validate(&self, key: &str) -> Result<Ipv6Net, ValidationError> {
        let net = cidr::parse_canonical_v6(&self.cidr)?;
        if cidr::file_key(&self.cidr) != key {
            return Err(ValidationError::KeyMismatch {
                declared: self.cidr.clone(),
                key: key.to_string(),
            });
        }
        for ns in &self.ns {
            ns.validate()?;
        }
        Ok(net)
    }
}
