// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! Route-announcement records (`route/`, `route6/`).
//!
//! A route does not have to match an allocated block exactly — announcing a
//! slice of your own block is fine — but it must be *contained* in one.
//! That containment check, and the existence of each origin ASN, are
//! cross-record invariants and live in [`crate::cross`], not here.

use ipnet::{Ipv4Net, Ipv6Net};
use serde::Deserialize;

use super::cidr;
use crate::error::ValidationError;

/// One `route/<cidr>` record: a permitted IPv4 announcement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Route {
    /// The announced prefix, canonical text. This is the record's identity.
    pub cidr: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// ASNs permitted to originate this prefix, in declared order. May be
    /// empty for a registered-but-unannounced prefix.
    #[serde(default)]
    pub origin: Vec<String>,
}

impl Route {
    /// Checks the record against its on-disk key, returning the parsed
    /// prefix for later containment queries.
    pub fn validate(&self, key: &str) -> Result<Ipv4Net, ValidationError> {
        let net = cidr::parse_canonical_v4(&self.cidr)?;
        if cidr::file_key(&self.cidr) != key {
            return Err(ValidationError::KeyMismatch {
                declared: self.cidr.clone(),
                key: key.to_string(),
            });
        }
        Ok(net)
    }
}

/// One `route6/<cidr>` record: a permitted IPv6 announcement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Route6 {
    /// The announced prefix, canonical text. This is the record's identity.
    pub cidr: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// ASNs permitted to originate this prefix, in declared order.
    #[serde(default)]
    pub origin: Vec<String>,
}

impl Route6 {
    /// Checks the record against its on-disk key, returning the parsed
    /// prefix for later containment queries.
    pub fn validate(&self, key: &str) -> Result<Ipv6Net, ValidationError> {
        let net = cidr::parse_canonical_v6(&self.cidr)?;
        if cidr::file_key(&self.cidr) != key {
            return Err(ValidationError::KeyMismatch {
                declared: self.cidr.clone(),
                key: key.to_string(),
            });
        }
        Ok(net)
    }
}
