// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Allocation Trie
//!
//! A binary trie over address bits, one instance per address family. Each
//! node corresponds to one prefix under the family's fixed allocation root;
//! the two children split on the next address bit.
//!
//! Two marks per node carry all the bookkeeping:
//!
//! - `used` — this exact prefix is an allocated block.
//! - `dirty` — some strictly finer prefix below this node is allocated.
//!
//! Together they turn both overlap directions into O(prefix-length) walks:
//! a new block walking through a `used` node is inside an existing coarser
//! block, and a new block landing on a `dirty` node would swallow an
//! existing finer one.
//!
//! The trie never retracts marks. Removing an address block from the store
//! leaves its `used`/`dirty` trail in place; the authoritative full pass
//! always starts from a fresh trie. See DESIGN.md for the trade-off.

use ipnet::IpNet;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Ways an allocation can be refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrieError {
    /// The prefix does not lie under the family's allocation root.
    #[error("{net} is outside the allocation root {root}")]
    RootMismatch { net: IpNet, root: IpNet },

    /// The prefix is a sub-block of an already allocated coarser block.
    #[error("{net} is contained in a bigger allocated block")]
    ContainedInLargerBlock { net: IpNet },

    /// A finer block already exists somewhere under this prefix.
    #[error("a smaller block is already allocated inside {net}")]
    SmallerBlockInside { net: IpNet },

    /// This exact prefix is already allocated.
    #[error("{net} is already allocated")]
    DuplicateAllocation { net: IpNet },
}

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct TrieNode {
    used: bool,
    dirty: bool,
    children: [Option<Box<TrieNode>>; 2],
}

// ---------------------------------------------------------------------------
// Trie
// ---------------------------------------------------------------------------

/// Per-family allocation trie rooted at a fixed prefix.
#[derive(Debug)]
pub struct AllocationTrie {
    root_net: IpNet,
    root: TrieNode,
}

impl AllocationTrie {
    /// Creates an empty trie rooted at `root_net`. All inserted and queried
    /// prefixes must lie under this network.
    pub fn new(root_net: IpNet) -> Self {
        Self {
            root_net,
            root: TrieNode::default(),
        }
    }

    /// The fixed allocation root this trie enforces.
    pub fn root_net(&self) -> IpNet {
        self.root_net
    }

    /// Drops every allocation, returning the trie to a single clean root.
    pub fn reset(&mut self) {
        self.root = TrieNode::default();
    }

    /// Allocates `net`. Fails if `net` is outside the root, nests with an
    /// existing allocation in either direction, or is already allocated.
    pub fn insert(&mut self, net: &IpNet) -> Result<(), TrieError> {
        if !self.root_net.contains(net) {
            return Err(TrieError::RootMismatch {
                net: *net,
                root: self.root_net,
            });
        }

        let bits = address_bits(net);
        let mut node = &mut self.root;
        for pos in self.root_net.prefix_len()..net.prefix_len() {
            if node.used {
                return Err(TrieError::ContainedInLargerBlock { net: *net });
            }
            node.dirty = true;
            let side = bit_at(&bits, pos);
            node = node.children[side].get_or_insert_with(Default::default);
        }
        if node.dirty {
            return Err(TrieError::SmallerBlockInside { net: *net });
        }
        if node.used {
            return Err(TrieError::DuplicateAllocation { net: *net });
        }
        node.used = true;
        Ok(())
    }

    /// True iff `net` equals an allocated block or lies inside one.
    ///
    /// Prefixes outside the allocation root are never contained.
    pub fn contains(&self, net: &IpNet) -> bool {
        if !self.root_net.contains(net) {
            return false;
        }

        let bits = address_bits(net);
        let mut node = &self.root;
        for pos in self.root_net.prefix_len()..net.prefix_len() {
            if node.used {
                return true;
            }
            let side = bit_at(&bits, pos);
            match node.children[side].as_deref() {
                Some(child) => node = child,
                // The walk ran off the trie without passing an allocation.
                None => return false,
            }
        }
        node.used
    }
}

/// Network-address octets of `net`, family-agnostic.
fn address_bits(net: &IpNet) -> Vec<u8> {
    match net.network() {
        std::net::IpAddr::V4(a) => a.octets().to_vec(),
        std::net::IpAddr::V6(a) => a.octets().to_vec(),
    }
}

/// The bit at position `pos` counting from the most significant bit of the
/// first octet.
fn bit_at(bits: &[u8], pos: u8) -> usize {
    let byte = bits[usize::from(pos / 8)];
    usize::from((byte >> (7 - pos % 8)) & 1)
}
