use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// Identifies a node by its position on the placement ring.
///
/// The wrapped integer doubles as the node's sort key: ring members are kept
/// in ascending `NodeId` order so the successor search can resolve owners.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// A single storage node in the DHT.
///
/// Holds a private key/value store. The node never routes; which keys land
/// here is decided entirely by the placement ring.
pub struct Node {
    pub id: NodeId,
    data: DashMap<String, String>,
}

impl Node {
    pub fn new(id: u32) -> Self {
        Self {
            id: NodeId(id),
            data: DashMap::new(),
        }
    }

    /// Inserts or overwrites `key -> value`. Last write wins.
    pub fn store(&self, key: String, value: String) {
        self.data.insert(key, value);
    }

    /// Returns the stored value for `key`, if any. No side effects.
    pub fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).map(|entry| entry.value().clone())
    }

    /// Number of keys currently held by this node.
    pub fn entry_count(&self) -> usize {
        self.data.len()
    }
}
