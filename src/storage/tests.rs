//! Storage Module Tests
//!
//! Validates the local storage mechanics of a single node: writes, reads,
//! overwrites, and identity. Placement across nodes is tested in the
//! `placement` module.

#[cfg(test)]
mod tests {
    use crate::storage::node::{Node, NodeId};

    #[test]
    fn test_store_and_get() {
        let node = Node::new(10);

        node.store("user1".to_string(), "hello".to_string());

        let value = node.get("user1");
        assert_eq!(value, Some("hello".to_string()));
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let node = Node::new(10);

        assert_eq!(node.get("nonexistent"), None);
    }

    #[test]
    fn test_overwrite_keeps_last_value() {
        let node = Node::new(30);

        node.store("user1".to_string(), "first".to_string());
        node.store("user1".to_string(), "second".to_string());

        assert_eq!(node.get("user1"), Some("second".to_string()));
        assert_eq!(node.entry_count(), 1, "Overwrite must not duplicate the key");
    }

    #[test]
    fn test_entry_count_grows_with_distinct_keys() {
        let node = Node::new(50);

        for i in 0..25 {
            node.store(format!("key-{}", i), format!("value-{}", i));
        }

        assert_eq!(node.entry_count(), 25);
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId(70).to_string(), "node-70");
    }

    #[test]
    fn test_mutation_through_shared_reference() {
        // Handlers hold the node behind Arc, so writes must work via &self.
        let node = std::sync::Arc::new(Node::new(10));

        let clone = node.clone();
        clone.store("shared".to_string(), "yes".to_string());

        assert_eq!(node.get("shared"), Some("yes".to_string()));
    }
}
