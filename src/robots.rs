//! Robots module.
//!
//! Compiles parsed robots.txt groups into rule tries and answers
//! per-agent permission queries.

use std::num::NonZeroUsize;
use std::path::Path;

use lru::LruCache;
use parking_lot::Mutex;
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use url::Url;

use crate::error::Result;
use crate::parser::{parse_robots, parse_robots_from_file, product_token};
use crate::rule_set::RuleSet;
use crate::types::{CacheKey, ParsedRobots};

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Robots builder options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RobotsOptions {
    /// LRU cache size for verdicts
    pub cache_size: usize,
    /// Verdict for paths no rule applies to
    pub default_permission: bool,
}

impl Default for RobotsOptions {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
            default_permission: true,
        }
    }
}

impl RobotsOptions {
    /// Create new robots options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }

    /// Set default permission.
    pub fn with_default_permission(mut self, allowed: bool) -> Self {
        self.default_permission = allowed;
        self
    }
}

/// One compiled user-agent group
struct CompiledGroup {
    user_agents: Vec<String>,
    rules: RuleSet,
    crawl_delay: Option<f64>,
}

/// Compiled robots.txt with LRU caching
pub struct Robots {
    groups: Vec<CompiledGroup>,
    /// Used when no group applies to an agent
    fallback: RuleSet,
    sitemaps: Vec<String>,
    cache: Mutex<LruCache<CacheKey, bool>>,
}

impl Robots {
    /// Create from robots.txt text.
    pub fn new(text: &str, options: RobotsOptions) -> Result<Self> {
        let parsed = parse_robots(text)?;
        Ok(Self::from_parsed(parsed, options))
    }

    /// Create from a robots.txt file.
    pub fn from_file(path: impl AsRef<Path>, options: RobotsOptions) -> Result<Self> {
        let parsed = parse_robots_from_file(path)?;
        Ok(Self::from_parsed(parsed, options))
    }

    /// Compile already parsed groups.
    pub fn from_parsed(parsed: ParsedRobots, options: RobotsOptions) -> Self {
        let groups = parsed
            .groups
            .into_iter()
            .map(|group| CompiledGroup {
                rules: RuleSet::from_rules(&group.rules, options.default_permission),
                user_agents: group.user_agents,
                crawl_delay: group.crawl_delay,
            })
            .collect();

        let cache_size = NonZeroUsize::new(options.cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            groups,
            fallback: RuleSet::new(options.default_permission),
            sitemaps: parsed.sitemaps,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Index of the group that applies to `agent`.
    ///
    /// A group naming the agent's product token wins over a `*` group.
    pub fn select_group(&self, agent: &str) -> Option<usize> {
        let token = product_token(agent);
        let named = |name: &str| {
            self.groups
                .iter()
                .position(|g| g.user_agents.iter().any(|ua| ua == name))
        };
        if !token.is_empty() && token != "*" {
            if let Some(index) = named(&token) {
                return Some(index);
            }
        }
        named("*")
    }

    /// Rules that apply to `agent`
    pub fn rules_for(&self, agent: &str) -> &RuleSet {
        self.group_rules(self.select_group(agent))
    }

    fn group_rules(&self, group: Option<usize>) -> &RuleSet {
        group
            .and_then(|index| self.groups.get(index))
            .map(|g| &g.rules)
            .unwrap_or(&self.fallback)
    }

    /// Check if `agent` may fetch `path`
    pub fn is_allowed(&self, agent: &str, path: &str) -> bool {
        let group = self.select_group(agent);
        let key = CacheKey::new(group, path);

        let mut cache = self.cache.lock();

        if let Some(&cached) = cache.get(&key) {
            return cached;
        }

        // Evaluation is CPU-only, so it runs under the lock
        let allowed = self.group_rules(group).is_allowed(path);
        cache.put(key, allowed);
        allowed
    }

    /// Check if `agent` may fetch `url`. The path and query are matched.
    ///
    /// The path is percent-decoded first, since patterns are stored as
    /// written in robots.txt. The query is matched as is.
    pub fn is_url_allowed(&self, agent: &str, url: &Url) -> bool {
        let path = percent_decode_str(url.path()).decode_utf8_lossy();
        match url.query() {
            Some(query) => self.is_allowed(agent, &format!("{}?{}", path, query)),
            None => self.is_allowed(agent, &path),
        }
    }

    /// Crawl delay in seconds for `agent`, if its group sets one
    pub fn crawl_delay(&self, agent: &str) -> Option<f64> {
        self.select_group(agent)
            .and_then(|index| self.groups.get(index))
            .and_then(|g| g.crawl_delay)
    }

    /// Sitemap URLs listed in the file
    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }

    /// Get the number of groups
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
    }
}
