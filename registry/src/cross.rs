// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Cross-Record Validation
//!
//! Invariants that no single record can prove about itself, checked once
//! the store has reached its final state:
//!
//! 1. Every route announcement is contained in an allocated block of the
//!    same family.
//! 2. Every origin ASN on every route names a registered autnum.
//!
//! All failures accumulate; a run never stops at the first bad route.

use ipnet::IpNet;

use crate::error::ValidationError;
use crate::record::ResourceKind;
use crate::report::ValidationReport;
use crate::store::RegistryState;

/// Runs every cross-record check over `state`, recording failures.
pub fn cross_validate(state: &RegistryState, report: &mut ValidationReport) {
    for (key, route) in state.routes() {
        let path = format!("{}/{}", ResourceKind::Route.dir(), key);
        check_route(
            state,
            report,
            &path,
            &route.cidr,
            route.cidr.parse::<IpNet>().ok(),
            &route.origin,
        );
    }
    for (key, route) in state.routes6() {
        let path = format!("{}/{}", ResourceKind::Route6.dir(), key);
        check_route(
            state,
            report,
            &path,
            &route.cidr,
            route.cidr.parse::<IpNet>().ok(),
            &route.origin,
        );
    }
}

fn check_route(
    state: &RegistryState,
    report: &mut ValidationReport,
    path: &str,
    cidr: &str,
    net: Option<IpNet>,
    origins: &[String],
) {
    // Stored routes already passed structural validation, so the parse
    // cannot fail here; the Option keeps the function total anyway.
    let contained = match net {
        Some(n @ IpNet::V4(_)) => state.trie_v4().contains(&n),
        Some(n @ IpNet::V6(_)) => state.trie_v6().contains(&n),
        None => false,
    };
    if !contained {
        report.record(
            path,
            ValidationError::RouteNotContained {
                cidr: cidr.to_string(),
            },
        );
    }
    for asn in origins {
        if !state.autnums().contains_key(asn) {
            report.record(
                path,
                ValidationError::UnknownOrigin {
                    cidr: cidr.to_string(),
                    asn: asn.clone(),
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Autnum, Inet6num, Inetnum, Record, Route, Route6};

    fn state_with(records: &[(&str, Record)]) -> RegistryState {
        let mut state = RegistryState::new();
        for (key, record) in records {
            state.insert(key, record.clone()).unwrap();
        }
        state
    }

    fn autnum(asn: &str) -> Record {
        Record::Autnum(Autnum {
            autnum: asn.to_string(),
            name: "CAT-NET".to_string(),
            description: String::new(),
        })
    }

    fn inetnum(cidr: &str) -> Record {
        Record::Inetnum(Inetnum {
            cidr: cidr.to_string(),
            description: String::new(),
            ns: Vec::new(),
        })
    }

    fn route(cidr: &str, origins: &[&str]) -> Record {
        Record::Route(Route {
            cidr: cidr.to_string(),
            description: String::new(),
            origin: origins.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn contained_route_with_known_origin_passes() {
        let state = state_with(&[
            ("AS64512", autnum("AS64512")),
            ("10.5.0.0_16", inetnum("10.5.0.0/16")),
            ("10.5.1.0_24", route("10.5.1.0/24", &["AS64512"])),
        ]);
        let mut report = ValidationReport::new();
        cross_validate(&state, &mut report);
        assert!(report.is_valid());
    }

    #[test]
    fn missing_origin_asn_is_reported() {
        // Scenario: route 10.5.0.0/24 names AS64512, no such autnum exists.
        let state = state_with(&[
            ("10.5.0.0_16", inetnum("10.5.0.0/16")),
            ("10.5.0.0_24", route("10.5.0.0/24", &["AS64512"])),
        ]);
        let mut report = ValidationReport::new();
        cross_validate(&state, &mut report);

        assert_eq!(report.len(), 1);
        assert_eq!(report.entries()[0].path, "route/10.5.0.0_24");
        match &report.entries()[0].error {
            ValidationError::UnknownOrigin { asn, .. } => assert_eq!(asn, "AS64512"),
            other => panic!("expected UnknownOrigin, got {:?}", other),
        }
    }

    #[test]
    fn uncovered_route_is_reported() {
        let state = state_with(&[
            ("AS64512", autnum("AS64512")),
            ("10.5.0.0_16", inetnum("10.5.0.0/16")),
            ("10.9.0.0_24", route("10.9.0.0/24", &["AS64512"])),
        ]);
        let mut report = ValidationReport::new();
        cross_validate(&state, &mut report);

        assert_eq!(report.len(), 1);
        match &report.entries()[0].error {
            ValidationError::RouteNotContained { cidr } => assert_eq!(cidr, "10.9.0.0/24"),
            other => panic!("expected RouteNotContained, got {:?}", other),
        }
    }

    #[test]
    fn all_failures_accumulate() {
        let state = state_with(&[(
            "10.9.0.0_24",
            route("10.9.0.0/24", &["AS64512", "AS64513"]),
        )]);
        let mut report = ValidationReport::new();
        cross_validate(&state, &mut report);
        // Not contained, plus two unknown origins.
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn v6_routes_check_the_v6_trie() {
        let mut state = RegistryState::new();
        state
            .insert(
                "fc75:100::_40",
                Record::Inet6num(Inet6num {
                    cidr: "fc75:100::/40".to_string(),
                    description: String::new(),
                    ns: Vec::new(),
                }),
            )
            .unwrap();
        state
            .insert(
                "fc75:100:1::_48",
                Record::Route6(Route6 {
                    cidr: "fc75:100:1::/48".to_string(),
                    description: String::new(),
                    origin: Vec::new(),
                }),
            )
            .unwrap();

        let mut report = ValidationReport::new();
        cross_validate(&state, &mut report);
        assert!(report.is_valid());
    }
}
