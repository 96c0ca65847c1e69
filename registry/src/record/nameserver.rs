// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! Nameserver entries, shared by domain and address-block records.

use std::net::{Ipv4Addr, Ipv6Addr};

use serde::Deserialize;

use crate::config;
use crate::error::ValidationError;

/// One `ns:` entry. Glue addresses are optional; an empty string counts as
/// absent, matching the registry's hand-written YAML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameServer {
    /// Hostname of the nameserver. Must live under the root zone.
    pub server: String,
    /// Optional IPv4 glue address.
    #[serde(default)]
    pub a: Option<String>,
    /// Optional IPv6 glue address. IPv4-mapped addresses are refused; write
    /// the `a` field instead.
    #[serde(default)]
    pub aaaa: Option<String>,
}

impl NameServer {
    /// Checks zone membership and address well-formedness.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.server.ends_with(config::ROOT_ZONE) {
            return Err(ValidationError::NameserverZone {
                server: self.server.clone(),
            });
        }
        if let Some(a) = self.a.as_deref().filter(|s| !s.is_empty()) {
            if a.parse::<Ipv4Addr>().is_err() {
                return Err(ValidationError::NameserverV4 {
                    server: self.server.clone(),
                    addr: a.to_string(),
                });
            }
        }
        if let Some(aaaa) = self.aaaa.as_deref().filter(|s| !s.is_empty()) {
            let parsed = aaaa.parse::<Ipv6Addr>().map_err(|_| ValidationError::NameserverV6 {
                server: self.server.clone(),
                addr: aaaa.to_string(),
            })?;
            if parsed.to_ipv4_mapped().is_some() {
                return Err(ValidationError::NameserverV6 {
                    server: self.server.clone(),
                    addr: aaaa.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ns(server: &str, a: Option<&str>, aaaa: Option<&str>) -> NameServer {
        NameServer {
            server: server.to_string(),
            a: a.map(str::to_string),
            aaaa: aaaa.map(str::to_string),
        }
    }

    #[test]
    fn accepts_bare_server_in_zone() {
        ns("ns1.example.catmunch", None, None).validate().unwrap();
    }

    #[test]
    fn accepts_valid_glue() {
        ns("ns1.example.catmunch", Some("10.1.0.53"), Some("fc75:100::53"))
            .validate()
            .unwrap();
    }

    #[test]
    fn rejects_server_outside_zone() {
        match ns("ns1.example.com", None, None).validate() {
            Err(ValidationError::NameserverZone { .. }) => {}
            other => panic!("expected NameserverZone, got {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_v4_glue() {
        match ns("ns1.example.catmunch", Some("fc75::53"), None).validate() {
            Err(ValidationError::NameserverV4 { .. }) => {}
            other => panic!("expected NameserverV4, got {:?}", other),
        }
    }

    #[test]
    fn rejects_v4_mapped_v6_glue() {
        match ns("ns1.example.catmunch", None, Some("::ffff:10.1.0.53")).validate() {
            Err(ValidationError::NameserverV6 { .. }) => {}
            other => panic!("expected NameserverV6, got {:?}", other),
        }
    }

    #[test]
    fn empty_strings_count_as_absent() {
        ns("ns1.example.catmunch", Some(""), Some("")).validate().unwrap();
    }
}
