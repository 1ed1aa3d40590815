//! Slash-delimited segment splitting shared by patterns and request paths.
//!
//! # Rules
//!
//! - One trailing separator is stripped, so `/a/` and `/a` split the same.
//! - The leading separator produces no segment.
//! - Interior empty segments are kept: `/a//b` yields `["a", "", "b"]`.
//!   Both pattern syntaxes treat an empty pattern segment as an ignored
//!   position, so dropping them would shift every later binding.

use std::borrow::Cow;

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// Split a path into its segments.
///
/// # Examples
///
/// ```
/// use pathbind::segment::split_path;
///
/// assert_eq!(split_path("/blog/new"), vec!["blog", "new"]);
/// assert_eq!(split_path("/blog/new/"), vec!["blog", "new"]);
/// assert_eq!(split_path("/a//b"), vec!["a", "", "b"]);
/// assert!(split_path("/").is_empty());
/// assert!(split_path("").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    let path = path.strip_suffix(SEPARATOR).unwrap_or(path);
    if path.is_empty() {
        return Vec::new();
    }

    let path = path.strip_prefix(SEPARATOR).unwrap_or(path);
    path.split(SEPARATOR).collect()
}

/// Make sure a pattern begins at the root separator.
///
/// Returns the input borrowed when it already does.
///
/// ```
/// use pathbind::segment::normalize_pattern;
///
/// assert_eq!(normalize_pattern("/user/{id}"), "/user/{id}");
/// assert_eq!(normalize_pattern("user/{id}"), "/user/{id}");
/// assert_eq!(normalize_pattern(""), "/");
/// ```
pub fn normalize_pattern(pattern: &str) -> Cow<'_, str> {
    if pattern.starts_with(SEPARATOR) {
        Cow::Borrowed(pattern)
    } else {
        Cow::Owned(format!("{SEPARATOR}{pattern}"))
    }
}
