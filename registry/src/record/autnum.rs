// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! Autonomous-system records.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::config;
use crate::error::ValidationError;

static ASN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^AS(\d+)$").unwrap());

/// Parses an `AS<digits>` literal and checks it against the private ranges.
pub fn parse_asn(literal: &str) -> Result<u32, ValidationError> {
    let caps = ASN_RE
        .captures(literal)
        .ok_or_else(|| ValidationError::InvalidAsn {
            asn: literal.to_string(),
        })?;
    let value: u32 = caps[1].parse().map_err(|_| ValidationError::InvalidAsn {
        asn: literal.to_string(),
    })?;
    if !config::ASN_PRIVATE_16.contains(&value) && !config::ASN_PRIVATE_32.contains(&value) {
        return Err(ValidationError::PublicAsn {
            asn: literal.to_string(),
        });
    }
    Ok(value)
}

/// One `autnum/<ASxxxx>` record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Autnum {
    /// The ASN literal, e.g. `AS64512`. This is the record's identity.
    pub autnum: String,
    /// Human-readable network name. Required.
    #[serde(default)]
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl Autnum {
    /// Checks the record against its on-disk key.
    pub fn validate(&self, key: &str) -> Result<(), ValidationError> {
        parse_asn(&self.autnum)?;
        if self.autnum != key {
            return Err(ValidationError::KeyMismatch {
                declared: self.autnum.clone(),
                key: key.to_string(),
            });
        }
        if self.name.is_empty() {
            return Err(ValidationError::MissingName {
                key: key.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn autnum(literal: &str, name: &str) -> Autnum {
        Autnum {
            autnum: literal.to_string(),
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn accepts_private_asn_ranges() {
        for asn in ["AS64512", "AS65000", "AS65534", "AS4200000000", "AS4294967294"] {
            parse_asn(asn).unwrap();
        }
    }

    #[test]
    fn rejects_public_and_edge_asns() {
        for asn in ["AS1", "AS64511", "AS65535", "AS4199999999", "AS4294967295"] {
            match parse_asn(asn) {
                Err(ValidationError::PublicAsn { .. }) => {}
                other => panic!("expected PublicAsn for {}, got {:?}", asn, other),
            }
        }
    }

    #[test]
    fn rejects_malformed_literals() {
        for asn in ["64512", "ASN64512", "AS", "AS64512x", "AS99999999999"] {
            match parse_asn(asn) {
                Err(ValidationError::InvalidAsn { .. }) => {}
                other => panic!("expected InvalidAsn for {}, got {:?}", asn, other),
            }
        }
    }

    #[test]
    fn validates_matching_record() {
        autnum("AS64512", "CAT-NET").validate("AS64512").unwrap();
    }

    #[test]
    fn rejects_key_mismatch() {
        match autnum("AS64512", "CAT-NET").validate("AS64513") {
            Err(ValidationError::KeyMismatch { .. }) => {}
            other => panic!("expected KeyMismatch, got {:?}", other),
        }
    }

    #[test]
    fn rejects_missing_name() {
        match autnum("AS64512", "").validate("AS64512") {
            Err(ValidationError::MissingName { .. }) => {}
            other => panic!("expected MissingName, got {:?}", other),
        }
    }
}
