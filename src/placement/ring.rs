use sha2::{Digest, Sha256};

use super::types::{LookupResult, PlacementResult, RingConfigError};
use crate::storage::node::Node;

/// Number of positions on the ring. Hashed key positions and node ids both
/// live in `0..RING_SIZE`.
pub const RING_SIZE: u32 = 100;

/// Default member positions used when the caller supplies none.
pub const DEFAULT_NODE_IDS: [u32; 4] = [10, 30, 50, 70];

/// A fixed ring of storage nodes with deterministic key placement.
///
/// Members are sorted ascending by id and immutable after construction; the
/// ring routes every operation to exactly one owner node.
pub struct Ring {
    members: Vec<Node>,
}

impl Ring {
    /// Builds a ring from the given nodes, sorted ascending by id.
    ///
    /// Rejects empty membership, duplicate ids, and ids outside
    /// `0..RING_SIZE`. These are the only failure conditions in the system;
    /// once constructed, every operation is total.
    pub fn new(nodes: Vec<Node>) -> Result<Self, RingConfigError> {
        if nodes.is_empty() {
            return Err(RingConfigError::EmptyMembership);
        }

        let mut members = nodes;
        members.sort_by_key(|node| node.id);

        for node in &members {
            if node.id.0 >= RING_SIZE {
                return Err(RingConfigError::IdOutOfRange {
                    id: node.id,
                    ring_size: RING_SIZE,
                });
            }
        }
        for pair in members.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(RingConfigError::DuplicateNodeId(pair[0].id));
            }
        }

        Ok(Self { members })
    }

    /// Maps a key to its position on the ring.
    ///
    /// Deterministic: the same key always yields the same position. Distinct
    /// keys may share a position; the owner node simply holds both.
    pub fn hash_key(&self, key: &str) -> u32 {
        let digest = Sha256::digest(key.as_bytes());

        // The digest read as a big-endian integer, reduced modulo RING_SIZE.
        // Folding byte by byte avoids materializing the 256-bit value.
        digest
            .iter()
            .fold(0u32, |acc, &byte| (acc * 256 + byte as u32) % RING_SIZE)
    }

    /// Resolves the node that owns `position`: the first member whose id is
    /// `>= position`, wrapping around to the smallest id if none qualifies.
    pub fn find_owner(&self, position: u32) -> &Node {
        let idx = self
            .members
            .partition_point(|node| node.id.0 < position);

        match self.members.get(idx) {
            Some(node) => node,
            // Position falls past the highest id: the ring is circular, so
            // ownership wraps to its first member.
            None => &self.members[0],
        }
    }

    /// Stores `key -> value` on the key's owner node and reports which node
    /// received the write.
    pub fn store(&self, key: &str, value: &str) -> PlacementResult {
        let position = self.hash_key(key);
        let owner = self.find_owner(position);

        owner.store(key.to_string(), value.to_string());
        tracing::debug!("Placed '{}' at position {} on {}", key, position, owner.id);

        PlacementResult {
            node_id: owner.id,
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Looks up `key` on its owner node.
    ///
    /// Only the resolved owner is consulted; the key is never searched across
    /// other nodes. That is the defining property of consistent placement.
    pub fn lookup(&self, key: &str) -> LookupResult {
        let position = self.hash_key(key);
        let owner = self.find_owner(position);

        let value = owner.get(key);
        LookupResult {
            found: value.is_some(),
            node_id: owner.id,
            value,
        }
    }

    /// The ring members in ascending id order.
    pub fn members(&self) -> &[Node] {
        &self.members
    }

    /// Total number of keys stored across all members.
    pub fn total_entry_count(&self) -> usize {
        self.members.iter().map(|node| node.entry_count()).sum()
    }
}
