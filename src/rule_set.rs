use tracing::warn;

use crate::matcher::{PathMatcher, RuleTrie};
use crate::types::{RuleKind, TextRule};

/// Allow/disallow rules for one user-agent group.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    trie: RuleTrie,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new(default_permission: bool) -> Self {
        Self {
            trie: RuleTrie::new(default_permission),
        }
    }

    /// Build a rule set from parsed rules
    pub fn from_rules(rules: &[TextRule], default_permission: bool) -> Self {
        let mut set = Self::new(default_permission);
        for rule in rules {
            set.insert(&rule.pattern, rule.kind);
        }
        set
    }

    /// Add a rule. `rule_type` is "allow" or "disallow" (any case).
    ///
    /// Any other rule type is logged and ignored; the pattern's nodes are
    /// still created but carry no flag.
    pub fn add_path(&mut self, path: &str, rule_type: &str) {
        match rule_type.parse::<RuleKind>() {
            Ok(kind) => self.insert(path, kind),
            Err(e) => {
                warn!(path, "ignoring rule: {}", e);
                self.trie.walk_or_create(path);
            }
        }
    }

    pub fn insert(&mut self, path: &str, kind: RuleKind) {
        self.trie.insert(path, kind);
    }

    /// Check if `path` is permitted
    pub fn is_allowed(&self, path: &str) -> bool {
        self.trie.evaluate(path)
    }

    pub fn default_permission(&self) -> bool {
        self.trie.default_permission()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

impl PathMatcher for RuleSet {
    fn is_allowed(&self, path: &str) -> bool {
        RuleSet::is_allowed(self, path)
    }
}
