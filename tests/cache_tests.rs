//! Pattern cache used the way a request handler would use it.

#![cfg(feature = "cache")]

mod common;

use common::init_logging;
use pathbind::cache::PatternCache;
use pathbind::{PathMatcher, PatternSyntax};

#[test]
fn test_cached_pattern_serves_many_requests() {
    init_logging();

    let mut cache = PatternCache::new();
    let requests = ["/users/1?tab=posts", "/users/2", "/users/3#bio"];

    let ids: Vec<Option<i64>> = requests
        .iter()
        .map(|target| {
            let pattern = cache.get_or_parse("/users/{id}", PatternSyntax::Bracket);
            PathMatcher::from_pattern(&(*target).into(), &pattern).var_int("id")
        })
        .collect();

    assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    assert_eq!(cache.stats().misses, 1);
    assert_eq!(cache.stats().hits, 2);
}

#[test]
fn test_cached_and_fresh_patterns_agree() {
    let mut cache = PatternCache::new();
    let target = "/blog/new/article/42";

    let cached = cache.get_or_parse("//*/category/id", PatternSyntax::Placeholder);
    let from_cache = PathMatcher::from_pattern(&target.into(), &cached);
    let fresh = PathMatcher::with_syntax(target, "//*/category/id", PatternSyntax::Placeholder);

    assert_eq!(from_cache, fresh);
    assert_eq!(from_cache.var("category"), "article");
}
