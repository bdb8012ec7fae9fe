//! Placement API Protocol
//!
//! Defines the endpoints and Data Transfer Objects the HTTP collaborator uses
//! to drive the ring. Responses reuse the core result types
//! ([`PlacementResult`](super::types::PlacementResult) /
//! [`LookupResult`](super::types::LookupResult)) serialized as JSON.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Public endpoint for client write requests.
pub const ENDPOINT_STORE: &str = "/store";
/// Public endpoint for client read requests (key appended as a path segment).
pub const ENDPOINT_LOOKUP: &str = "/lookup";

// --- Data Transfer Objects ---

/// Client request for writing a key/value pair.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreRequest {
    /// The data key.
    pub key: String,
    /// The value to place on the key's owner node.
    pub value: String,
}
