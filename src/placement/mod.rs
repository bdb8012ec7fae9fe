//! Key Placement Module
//!
//! Implements deterministic routing of keys onto storage nodes.
//!
//! ## Core Concepts
//! - **Hashing**: Keys are reduced to a position on a fixed modular ring via a
//!   cryptographic digest, so every key has exactly one deterministic home.
//! - **Placement**: The owner of a position is the first node whose id is
//!   greater than or equal to it (successor rule), wrapping around to the
//!   smallest id when the position falls past the highest member.
//! - **Routing**: `Ring::store` and `Ring::lookup` resolve the owner and
//!   delegate to it; a lookup only ever consults the key's own node.
//! - **Access**: `handlers` expose the two operations over HTTP using the DTOs
//!   in `protocol`; the ring itself stays a pure request/response API.

pub mod handlers;
pub mod protocol;
pub mod ring;
pub mod types;
