//! Robots Trie - robots.txt allow/disallow matching for Rust
//!
//! This library decides whether a path may be fetched according to
//! robots-exclusion rules:
//! - Prefix trie of allow/disallow patterns, longer matches win
//! - `*` wildcard (any sequence, including empty) and `$` end anchor
//! - Configurable default permission
//! - robots.txt parsing with user-agent groups, crawl-delay and sitemaps
//! - LRU caching of verdicts
//!
//! # Example
//!
//! ```rust
//! use robots_trie::{Robots, RobotsOptions, RuleSet};
//!
//! // Use the trie directly
//! let mut rules = RuleSet::new(true);
//! rules.add_path("/private/", "disallow");
//! rules.add_path("/private/public/", "allow");
//! assert!(rules.is_allowed("/private/public/page"));
//! assert!(!rules.is_allowed("/private/secret"));
//!
//! // Or compile a whole robots.txt
//! let text = "
//! User-agent: *
//! Disallow: /*.pdf$   # no documents
//! ";
//! let robots = Robots::new(text, RobotsOptions::default()).unwrap();
//! assert!(!robots.is_allowed("MyBot/1.0", "/file.pdf"));
//! assert!(robots.is_allowed("MyBot/1.0", "/file.pdf.html"));
//! ```
//!
//! # Pattern Syntax
//!
//! | Pattern | Matches |
//! |---------|---------|
//! | `/dir/` | Every path starting with `/dir/` |
//! | `/a*b` | `/ab`, `/axxb`, `/axbyz`, ... |
//! | `/a$` | Exactly `/a` |
//! | `/*.pdf$` | Every path ending in `.pdf` |
//!
//! When an allow and a disallow rule end on the same trie node, allow wins.

pub mod error;
pub mod matcher;
pub mod parser;
pub mod robots;
pub mod rule_set;
pub mod types;

// Re-export commonly used items
pub use error::{Result, RobotsError};
pub use matcher::{PathMatcher, RuleTrie};
pub use parser::{parse_robots, parse_robots_from_file, product_token};
pub use robots::{Robots, RobotsOptions, DEFAULT_CACHE_SIZE};
pub use rule_set::RuleSet;
pub use types::{ParsedRobots, RuleGroup, RuleKind, TextRule};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let text = r#"
# Keep crawlers out of drafts, except the published ones
User-agent: *
Disallow: /drafts/
Allow: /drafts/published/

# Documents and exact root index
Disallow: /*.pdf$
Disallow: /index.html$

User-agent: archiver
Disallow: /

Sitemap: https://example.com/sitemap.xml
"#;

        // Parse
        let parsed = parse_robots(text).unwrap();
        assert_eq!(parsed.groups.len(), 2);
        assert_eq!(parsed.groups[0].rules.len(), 4);

        // Compile
        let robots = Robots::from_parsed(parsed, RobotsOptions::default());

        // Drafts -> disallowed, published drafts -> allowed
        assert!(!robots.is_allowed("crawler", "/drafts/wip"));
        assert!(robots.is_allowed("crawler", "/drafts/published/post"));

        // Anchored rules
        assert!(!robots.is_allowed("crawler", "/report.pdf"));
        assert!(robots.is_allowed("crawler", "/report.pdf?page=2"));
        assert!(!robots.is_allowed("crawler", "/index.html"));
        assert!(robots.is_allowed("crawler", "/index.html.bak"));

        // Archiver has its own group
        assert!(!robots.is_allowed("Archiver/3.0", "/"));
        assert!(!robots.is_allowed("archiver", "/drafts/published/post"));

        // Unmatched paths fall back to the default
        assert!(robots.is_allowed("crawler", "/about"));
        assert_eq!(robots.sitemaps().len(), 1);
    }
}
