// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Registry Configuration & Constants
//!
//! The Catmunch address plan lives here: which TLD the network answers to,
//! which slices of IPv4 and IPv6 space members may allocate from, and which
//! ASN ranges are theirs to claim. Change these and every registry on the
//! network disagrees with yours, so don't.

use std::ops::RangeInclusive;

use ipnet::IpNet;
use once_cell::sync::Lazy;

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

/// The Catmunch root zone. Every registered domain and every nameserver
/// hostname must end with this suffix.
pub const ROOT_ZONE: &str = ".catmunch";

// ---------------------------------------------------------------------------
// Address plan
// ---------------------------------------------------------------------------

/// The IPv4 allocation root. All `inetnum` blocks and `route` announcements
/// must fall inside this prefix.
pub const V4_ROOT: &str = "10.0.0.0/8";

/// The IPv6 allocation root. All `inet6num` blocks and `route6`
/// announcements must fall inside this prefix.
pub const V6_ROOT: &str = "fc75::/16";

/// Parsed form of [`V4_ROOT`].
pub static V4_ROOT_NET: Lazy<IpNet> = Lazy::new(|| V4_ROOT.parse().unwrap());

/// Parsed form of [`V6_ROOT`].
pub static V6_ROOT_NET: Lazy<IpNet> = Lazy::new(|| V6_ROOT.parse().unwrap());

// ---------------------------------------------------------------------------
// ASN ranges
// ---------------------------------------------------------------------------

/// 16-bit private ASN range (RFC 6996). Catmunch members register out of
/// the private space so the registry can never collide with the DFZ.
pub const ASN_PRIVATE_16: RangeInclusive<u32> = 64512..=65534;

/// 32-bit private ASN range (RFC 6996).
pub const ASN_PRIVATE_32: RangeInclusive<u32> = 4_200_000_000..=4_294_967_294;
