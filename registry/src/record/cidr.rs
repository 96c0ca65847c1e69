// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! Canonical CIDR handling.
//!
//! A registry CIDR must be *the* spelling of its range: the network address
//! (no host bits) rendered in minimal form. Anything else — `10.1.2.3/16`,
//! `10.01.0.0/16`, `fc75:0:0::/32` — is rejected, because on-disk keys are
//! derived from the text and two spellings of one range would mean two keys.

use ipnet::{IpNet, Ipv4Net, Ipv6Net};

use crate::error::ValidationError;

/// Parses `s` as a canonical IPv4 prefix.
pub fn parse_canonical_v4(s: &str) -> Result<Ipv4Net, ValidationError> {
    match parse_canonical(s)? {
        IpNet::V4(net) => Ok(net),
        IpNet::V6(_) => Err(ValidationError::WrongFamily {
            cidr: s.to_string(),
            expected: "IPv4",
        }),
    }
}

/// Parses `s` as a canonical IPv6 prefix.
pub fn parse_canonical_v6(s: &str) -> Result<Ipv6Net, ValidationError> {
    match parse_canonical(s)? {
        IpNet::V6(net) => Ok(net),
        IpNet::V4(_) => Err(ValidationError::WrongFamily {
            cidr: s.to_string(),
            expected: "IPv6",
        }),
    }
}

fn parse_canonical(s: &str) -> Result<IpNet, ValidationError> {
    let net: IpNet = s.parse().map_err(|e| ValidationError::InvalidCidr {
        cidr: s.to_string(),
        reason: format!("{e}"),
    })?;
    // Host bits set, or a spelling that does not round-trip (leading zeros,
    // uncompressed IPv6), both mean a second key for the same range.
    if net.addr() != net.network() || net.to_string() != s {
        return Err(ValidationError::NonCanonicalCidr {
            cidr: s.to_string(),
        });
    }
    Ok(net)
}

/// Renders a CIDR string to its on-disk key: `/` becomes `_`.
pub fn file_key(cidr: &str) -> String {
    cidr.replace('/', "_")
}
