use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
};
use std::sync::Arc;

use super::protocol::StoreRequest;
use super::ring::Ring;
use super::types::{LookupResult, PlacementResult};

pub async fn handle_store(
    Extension(ring): Extension<Arc<Ring>>,
    Json(req): Json<StoreRequest>,
) -> (StatusCode, Json<PlacementResult>) {
    let result = ring.store(&req.key, &req.value);
    tracing::info!("Stored '{}' on {}", result.key, result.node_id);

    (StatusCode::OK, Json(result))
}

pub async fn handle_lookup(
    Extension(ring): Extension<Arc<Ring>>,
    Path(key): Path<String>,
) -> (StatusCode, Json<LookupResult>) {
    let result = ring.lookup(&key);

    if result.found {
        tracing::debug!("Found '{}' on {}", key, result.node_id);
        (StatusCode::OK, Json(result))
    } else {
        // Not-found is an expected outcome; the body still names the owner
        // node so the caller can see where the key would live.
        tracing::debug!("'{}' not present on its owner {}", key, result.node_id);
        (StatusCode::NOT_FOUND, Json(result))
    }
}
