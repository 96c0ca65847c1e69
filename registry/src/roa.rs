// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # ROA Generation
//!
//! Turns the validated route set into a plain Route-Origin-Authorization
//! listing, one line per (route, origin) pair:
//!
//! ```text
//! route 10.3.0.0/24 max 24 as AS64512;
//! ```
//!
//! Emission is read-only and deterministic: routes come out in the store's
//! sorted key order, origins in each record's declared order. Generation is
//! only meaningful after a clean full pass; the generator itself validates
//! nothing.

use std::fmt::Write;

use ipnet::IpNet;

use crate::store::RegistryState;

/// The ROA listing for all IPv4 routes.
pub fn generate_v4(state: &RegistryState) -> String {
    let mut out = String::new();
    for route in state.routes().values() {
        emit(&mut out, &route.cidr, &route.origin);
    }
    out
}

/// The ROA listing for all IPv6 routes.
pub fn generate_v6(state: &RegistryState) -> String {
    let mut out = String::new();
    for route in state.routes6().values() {
        emit(&mut out, &route.cidr, &route.origin);
    }
    out
}

/// The combined listing: the IPv4 listing followed by the IPv6 listing.
pub fn generate(state: &RegistryState) -> String {
    let mut out = generate_v4(state);
    out.push_str(&generate_v6(state));
    out
}

fn emit(out: &mut String, cidr: &str, origins: &[String]) {
    // Stored routes are canonical, so the parse is infallible; a route that
    // somehow isn't is silently skipped rather than panicking mid-emission.
    let Ok(net) = cidr.parse::<IpNet>() else {
        return;
    };
    for asn in origins {
        // String pushes cannot fail.
        let _ = writeln!(out, "route {} max {} as {};", cidr, net.prefix_len(), asn);
    }
}
