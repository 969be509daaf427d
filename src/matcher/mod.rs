mod node;
mod trie;

pub use node::Node;
pub use trie::RuleTrie;

/// Trait for path matchers
pub trait PathMatcher: Send + Sync {
    /// Check if the path is permitted
    fn is_allowed(&self, path: &str) -> bool;
}
