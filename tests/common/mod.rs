//! Shared helpers for integration tests.

#![allow(dead_code)]

use pathbind::{PathMatcher, PatternSyntax};

/// Route the crate's `log` output to the test harness.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a matcher for a `*`/empty-placeholder pattern.
pub fn placeholder(target: &str, pattern: &str) -> PathMatcher {
    PathMatcher::with_syntax(target, pattern, PatternSyntax::Placeholder)
}

/// Build a matcher for a `{name}` pattern.
pub fn bracket(target: &str, pattern: &str) -> PathMatcher {
    PathMatcher::with_syntax(target, pattern, PatternSyntax::Bracket)
}
