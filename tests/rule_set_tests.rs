//! Integration tests for RuleSet matching semantics

use robots_trie::{PathMatcher, RuleKind, RuleSet, RuleTrie};

fn rule_set(default_permission: bool, rules: &[(&str, &str)]) -> RuleSet {
    let mut set = RuleSet::new(default_permission);
    for (path, rule_type) in rules {
        set.add_path(path, rule_type);
    }
    set
}

#[test]
fn test_literal_pattern_regardless_of_default() {
    let patterns = ["/", "/a", "/a/b/c.html", "/search?q=", "/~user"];
    for default in [true, false] {
        for pattern in patterns {
            let allowed = rule_set(default, &[(pattern, "allow")]);
            assert!(
                allowed.is_allowed(pattern),
                "allow {pattern} should permit it (default {default})"
            );

            let disallowed = rule_set(default, &[(pattern, "disallow")]);
            assert!(
                !disallowed.is_allowed(pattern),
                "disallow {pattern} should forbid it (default {default})"
            );
        }
    }
}

#[test]
fn test_longest_match_precedence() {
    for default in [true, false] {
        let set = rule_set(default, &[("/a", "disallow"), ("/a/b", "allow")]);
        assert!(set.is_allowed("/a/b"));
        assert!(!set.is_allowed("/a/x"));
    }
}

#[test]
fn test_equal_specificity_tie() {
    for default in [true, false] {
        let set = rule_set(default, &[("/same", "allow"), ("/same", "disallow")]);
        assert!(set.is_allowed("/same"));

        let set = rule_set(default, &[("/same", "disallow"), ("/same", "allow")]);
        assert!(set.is_allowed("/same"));
    }
}

#[test]
fn test_anchor_exactness() {
    let set = rule_set(true, &[("/a$", "disallow")]);
    assert!(!set.is_allowed("/a"));
    assert!(set.is_allowed("/ab"));

    let set = rule_set(false, &[("/a$", "allow")]);
    assert!(set.is_allowed("/a"));
    assert!(!set.is_allowed("/ab"));
}

#[test]
fn test_unflagged_anchor_falls_through() {
    let anchor_only = rule_set(true, &[("/a$", "noindex")]);
    assert!(anchor_only.is_allowed("/a"));

    let set = rule_set(true, &[("/a$", "noindex"), ("/a", "disallow")]);
    assert!(!set.is_allowed("/a"));
    assert!(!set.is_allowed("/ab"));

    let set = rule_set(false, &[("/a$", "noindex"), ("/a", "allow")]);
    assert!(set.is_allowed("/a"));
}

#[test]
fn test_wildcard_coverage() {
    let set = rule_set(true, &[("/a*b", "disallow")]);
    assert!(!set.is_allowed("/axxxb"));
    assert!(!set.is_allowed("/ab"));
    assert!(set.is_allowed("/ac"));
}

#[test]
fn test_multiple_wildcards() {
    let set = rule_set(true, &[("/*/private/*.json", "disallow")]);
    assert!(!set.is_allowed("/v1/private/keys.json"));
    assert!(!set.is_allowed("/v1/v2/private/x/y.json"));
    assert!(set.is_allowed("/v1/public/keys.json"));
    assert!(set.is_allowed("/private/keys.json"));
}

#[test]
fn test_empty_rule_set() {
    let allow = RuleSet::new(true);
    let deny = RuleSet::new(false);
    for path in ["", "/", "/anything", "/*", "/$", "/a?b=c"] {
        assert!(allow.is_allowed(path), "path {path:?}");
        assert!(!deny.is_allowed(path), "path {path:?}");
    }
}

#[test]
fn test_empty_pattern_is_noop() {
    let set = rule_set(true, &[("", "disallow")]);
    assert!(set.is_empty());
    assert!(set.is_allowed(""));
    assert!(set.is_allowed("/x"));
}

#[test]
fn test_idempotent_insertion() {
    let rules = [("/a", "disallow"), ("/a/*.gif$", "allow"), ("/b*", "disallow")];
    let once = rule_set(true, &rules);
    let mut doubled = rules.to_vec();
    doubled.extend_from_slice(&rules);
    let twice = rule_set(true, &doubled);

    for path in ["/a", "/a/x.gif", "/a/x.gifs", "/b", "/bcd", "/c"] {
        assert_eq!(once.is_allowed(path), twice.is_allowed(path), "path {path}");
    }
}

#[test]
fn test_evaluation_is_read_only() {
    let mut set = rule_set(true, &[("/a*", "disallow")]);
    for path in ["/a", "/abc", "/b", "", "/a$"] {
        set.is_allowed(path);
    }
    set.add_path("/a/ok", "allow");
    assert!(!set.is_allowed("/a"));
    assert!(set.is_allowed("/a/ok"));
    assert!(set.is_allowed("/b"));
}

#[test]
fn test_unknown_rule_type_leaves_verdicts() {
    let plain = rule_set(true, &[("/x", "disallow")]);
    let with_unknown = rule_set(true, &[("/x", "disallow"), ("/x/y", "noindex")]);
    for path in ["/x", "/x/y", "/x/y/z", "/z"] {
        assert_eq!(plain.is_allowed(path), with_unknown.is_allowed(path), "path {path}");
    }
}

#[test]
fn test_end_to_end_private_public() {
    let set = rule_set(true, &[("/private/", "disallow"), ("/private/public/", "allow")]);
    assert!(set.is_allowed("/private/public/page"));
    assert!(!set.is_allowed("/private/secret"));
}

#[test]
fn test_end_to_end_pdf_anchor() {
    let set = rule_set(true, &[("/*.pdf$", "disallow")]);
    assert!(!set.is_allowed("/file.pdf"));
    assert!(set.is_allowed("/file.pdf.html"));
}

#[test]
fn test_overlapping_wildcard_rules() {
    let mut trie = RuleTrie::new(true);
    trie.insert("/*a", RuleKind::Disallow);
    trie.insert("/*ab", RuleKind::Allow);
    assert!(!trie.evaluate("/xa"));
    assert!(trie.evaluate("/xab"));
    assert!(trie.evaluate("/xb"));
}

#[test]
fn test_matchers_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RuleSet>();
    assert_send_sync::<RuleTrie>();

    let set = rule_set(true, &[("/blocked", "disallow")]);
    let matcher: &dyn PathMatcher = &set;
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert!(!matcher.is_allowed("/blocked/page"));
                assert!(matcher.is_allowed("/open"));
            });
        }
    });
}
