//! Prefix trie of robots rules.
//!
//! Patterns are inserted character by character. Evaluation walks the trie
//! along the candidate path, letting flags on deeper (more specific) nodes
//! override the verdict collected on the way down.

use super::node::Node;
use super::PathMatcher;
use crate::types::RuleKind;

const WILDCARD: char = '*';
const ANCHOR: char = '$';

/// Rule trie with a fixed default permission
#[derive(Debug, Clone)]
pub struct RuleTrie {
    root: Node,
    default_permission: bool,
}

impl RuleTrie {
    /// Create an empty trie. `default_permission` is the verdict for paths
    /// no rule applies to.
    pub fn new(default_permission: bool) -> Self {
        Self {
            root: Node::root(),
            default_permission,
        }
    }

    pub fn default_permission(&self) -> bool {
        self.default_permission
    }

    /// Insert `pattern` as a rule of the given kind.
    ///
    /// An empty pattern is a no-op: the root never carries flags.
    pub fn insert(&mut self, pattern: &str, kind: RuleKind) {
        if pattern.is_empty() {
            return;
        }
        let node = self.walk_or_create(pattern);
        match kind {
            RuleKind::Allow => node.allow = true,
            RuleKind::Disallow => node.disallow = true,
        }
    }

    /// Create the nodes spelling `pattern` and return the last one.
    pub(crate) fn walk_or_create(&mut self, pattern: &str) -> &mut Node {
        pattern
            .chars()
            .fold(&mut self.root, |node, c| node.child_or_insert(c))
    }

    /// Decide whether `path` is permitted.
    pub fn evaluate(&self, path: &str) -> bool {
        let path: Vec<char> = path.chars().collect();
        self.evaluate_from(&path, &self.root, self.default_permission)
    }

    /// Walk `remaining` from `node`, threading the verdict collected so far.
    ///
    /// The wildcard branch also runs once nothing is left of the path, so a
    /// trailing `*` matches the empty suffix: `/a*` applies to `/a`. Returning
    /// on an empty remainder before the wildcard branch would leave `/a` at
    /// the default permission.
    fn evaluate_from(&self, remaining: &[char], node: &Node, mut verdict: bool) -> bool {
        // An anchored rule ending exactly here beats everything else
        if remaining.is_empty() {
            if let Some(anchor) = node.child(ANCHOR) {
                if anchor.allow {
                    return true;
                }
                if anchor.disallow {
                    return false;
                }
            }
        }

        // allow is applied last so it wins over disallow on the same node
        if node.disallow {
            verdict = false;
        }
        if node.allow {
            verdict = true;
        }

        if let Some(star) = node.child(WILDCARD) {
            // Lowest offset whose expansion disagrees with the default wins
            let expanded = (0..=remaining.len())
                .map(|offset| self.evaluate_from(&remaining[offset..], star, verdict))
                .find(|&result| result != self.default_permission);
            if let Some(result) = expanded {
                verdict = result;
            }
        }

        if let Some((&first, rest)) = remaining.split_first() {
            if let Some(next) = node.child(first) {
                return self.evaluate_from(rest, next, verdict);
            }
        }

        verdict
    }

    /// True when no rule has been inserted
    pub fn is_empty(&self) -> bool {
        self.root.child_count() == 0
    }
}

impl Default for RuleTrie {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PathMatcher for RuleTrie {
    fn is_allowed(&self, path: &str) -> bool {
        self.evaluate(path)
    }
}
