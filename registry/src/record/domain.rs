// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! Domain records under the root zone.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::nameserver::NameServer;
use crate::config;
use crate::error::ValidationError;

/// One label directly under the root zone. Subdomains below that are the
/// owner's business, not the registry's.
static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^[A-Za-z0-9_-]+{}$",
        regex::escape(config::ROOT_ZONE)
    ))
    .unwrap()
});

/// One `domain/<name>` record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Domain {
    /// The registered domain name. This is the record's identity.
    pub domain: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Authoritative nameservers for the domain.
    #[serde(default)]
    pub ns: Vec<NameServer>,
}

impl Domain {
    /// Checks the record against its on-disk key.
    pub fn validate(&self, key: &str) -> Result<(), ValidationError> {
        if !DOMAIN_RE.is_match(&self.domain) {
            return Err(ValidationError::InvalidDomain {
                domain: self.domain.clone(),
            });
        }
        if self.domain != key {
            return Err(ValidationError::KeyMismatch {
                declared: self.domain.clone(),
                key: key.to_string(),
            });
        }
        for ns in &self.ns {
            ns.validate()?;
        }
        Ok(())
    }
}
