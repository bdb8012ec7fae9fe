//! Node Storage Module
//!
//! Implements the leaf component of the DHT: a single storage node.
//!
//! ## Core Concepts
//! - **Identity**: A node is identified solely by its `NodeId`, a fixed
//!   position on the placement ring. The id never changes after creation.
//! - **Store**: Each node owns a private key/value map. Writes insert or
//!   overwrite; reads have no side effects; deletion is not supported.
//! - **Sharing**: The store uses interior mutability so a node can be mutated
//!   through a shared reference from concurrent request handlers.

pub mod node;

#[cfg(test)]
mod tests;
