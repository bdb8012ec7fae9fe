//! Minimal Distributed Hash Table (DHT) Core
//!
//! This library crate implements ring-based consistent key placement over a
//! fixed set of storage nodes. It serves as the foundation for the binary
//! executable (`main.rs`), which exposes the two core operations over HTTP.
//!
//! ## Architecture Modules
//! The system is composed of two loosely coupled subsystems:
//!
//! - **`storage`**: The leaf layer. A `Node` is identified by its position on
//!   the ring and owns a private key/value store.
//! - **`placement`**: The routing layer. The `Ring` hashes keys onto a fixed
//!   modular position domain, resolves the owning node via the successor rule
//!   (with wrap-around), and exposes `store`/`lookup` as a pure
//!   request/response API.

pub mod placement;
pub mod storage;
