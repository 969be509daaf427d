use std::collections::HashMap;

/// One position in the rule trie.
///
/// `*` and `$` are stored as ordinary edge characters; only evaluation gives
/// them special meaning.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Character that led here (`None` for the root)
    edge: Option<char>,
    children: HashMap<char, Node>,
    /// Set when an allow rule ends at this node
    pub(crate) allow: bool,
    /// Set when a disallow rule ends at this node
    pub(crate) disallow: bool,
}

impl Node {
    /// Create the root node
    pub fn root() -> Self {
        Self::default()
    }

    fn with_edge(edge: char) -> Self {
        Self {
            edge: Some(edge),
            ..Self::default()
        }
    }

    pub fn edge(&self) -> Option<char> {
        self.edge
    }

    /// Look up the child reached through `c`
    pub fn child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }

    /// Get the child reached through `c`, creating it if missing
    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut Node {
        self.children.entry(c).or_insert_with(|| Node::with_edge(c))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// True when an allow rule ends here
    pub fn allow(&self) -> bool {
        self.allow
    }

    /// True when a disallow rule ends here
    pub fn disallow(&self) -> bool {
        self.disallow
    }

    /// True when this node carries no rule
    pub fn is_unflagged(&self) -> bool {
        !self.allow && !self.disallow
    }
}
