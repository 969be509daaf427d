use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RobotsError;

/// Kind of a robots rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Allow,
    Disallow,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Allow => "allow",
            RuleKind::Disallow => "disallow",
        }
    }
}

impl FromStr for RuleKind {
    type Err = RobotsError;

    /// Case-insensitive: "allow", "Disallow", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(RuleKind::Allow),
            "disallow" => Ok(RuleKind::Disallow),
            _ => Err(RobotsError::InvalidRuleKind(s.to_string())),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed allow/disallow line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRule {
    /// Rule kind
    pub kind: RuleKind,
    /// Path pattern, may contain `*` and `$`
    pub pattern: String,
    /// Line number in the original text (for error reporting)
    pub line_num: usize,
}

/// Rules that follow one or more `User-agent` lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleGroup {
    /// Lowercased product tokens this group applies to
    pub user_agents: Vec<String>,
    /// Rules in file order
    pub rules: Vec<TextRule>,
    /// Seconds between requests, if given
    pub crawl_delay: Option<f64>,
}

/// Result of parsing a robots.txt file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRobots {
    /// Groups in file order
    pub groups: Vec<RuleGroup>,
    /// Sitemap URLs, in file order
    pub sitemaps: Vec<String>,
}

/// Cache key for the verdict cache
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    /// Index of the selected group, `None` for the fallback rule set
    pub group: Option<usize>,
    pub path: String,
}

impl CacheKey {
    pub fn new(group: Option<usize>, path: &str) -> Self {
        Self {
            group,
            path: path.to_string(),
        }
    }
}
