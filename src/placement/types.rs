use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::node::NodeId;

/// Outcome of a write: identifies which node received the key.
///
/// Writes have no failure path — every key has exactly one deterministic
/// owner given non-empty membership — so this is a plain result, not a
/// `Result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementResult {
    pub node_id: NodeId,
    pub key: String,
    pub value: String,
}

/// Outcome of a read.
///
/// `found: false` is a valid, expected outcome, not an error: the key hashed
/// to a real owner node but that node has no entry for it. `node_id` always
/// names the deterministic owner, found or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub found: bool,
    pub node_id: NodeId,
    pub value: Option<String>,
}

/// Rejected ring configurations. All variants are fatal at construction time;
/// a constructed ring never fails an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingConfigError {
    #[error("ring membership must not be empty")]
    EmptyMembership,

    #[error("duplicate node id {0}")]
    DuplicateNodeId(NodeId),

    #[error("{id} is outside the ring position domain 0..{ring_size}")]
    IdOutOfRange { id: NodeId, ring_size: u32 },
}
