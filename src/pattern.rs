//! Route patterns and positional variable binding.
//!
//! A [`Pattern`] is parsed once from a route template and then bound against
//! any number of request paths. Every pattern segment either declares a
//! variable or marks an ignored position; literal text is never compared
//! against the request.
//!
//! # Syntaxes
//!
//! Exactly one [`PatternSyntax`] applies to a pattern:
//!
//! - [`PatternSyntax::Bracket`] (default): only `{name}` segments declare
//!   variables. Everything else, including malformed declarations such as
//!   `{id` or `{a{b}`, is ignored.
//! - [`PatternSyntax::Placeholder`]: every segment is a variable name except
//!   the empty segment and the [`WILDCARD`] marker.
//!
//! # Binding
//!
//! Position `i` of the pattern binds to position `i` of the request path.
//! Pattern positions past the end of the path stay unbound; path segments
//! past the end of the pattern are ignored. When a name is declared twice
//! the later position wins.
//!
//! ```
//! use pathbind::{Pattern, PatternSyntax};
//!
//! let pattern = Pattern::parse("/anything/{category}/{id}", PatternSyntax::Bracket);
//! let vars = pattern.bind(&["edit", "article", "42"]);
//! assert_eq!(vars.get("category"), Some("article"));
//! assert_eq!(vars.get("id"), Some("42"));
//!
//! let pattern = Pattern::parse("/*/category/id", PatternSyntax::Placeholder);
//! let vars = pattern.bind(&["edit", "article", "42"]);
//! assert_eq!(vars.get("category"), Some("article"));
//! assert_eq!(vars.get("*"), None);
//! ```

use crate::params::PathVars;
use crate::segment::{normalize_pattern, split_path};
use crate::{debug_log, trace_log};
use std::collections::HashMap;

/// Marker for an ignored position in [`PatternSyntax::Placeholder`] patterns.
pub const WILDCARD: &str = "*";

/// How variable declarations are recognized in a pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PatternSyntax {
    /// Every segment names a variable, except `""` and `"*"`.
    Placeholder,
    /// Only `{name}` segments name variables.
    #[default]
    Bracket,
}

impl PatternSyntax {
    /// Binding key for one pattern segment, or `None` for an ignored position.
    pub fn binding_key<'a>(self, segment: &'a str) -> Option<&'a str> {
        match self {
            PatternSyntax::Placeholder => {
                let key = segment.trim();
                (!key.is_empty() && key != WILDCARD).then_some(key)
            }
            PatternSyntax::Bracket => parse_declaration(segment),
        }
    }
}

/// Extract the variable name from a `{name}` declaration.
///
/// The segment must start with `{`, end with `}` and contain no other `{`.
/// Surrounding whitespace inside the braces is trimmed; an empty name is
/// not a declaration.
///
/// ```
/// use pathbind::pattern::parse_declaration;
///
/// assert_eq!(parse_declaration("{id}"), Some("id"));
/// assert_eq!(parse_declaration("{ id }"), Some("id"));
/// assert_eq!(parse_declaration("id"), None);
/// assert_eq!(parse_declaration("{a{b}"), None);
/// assert_eq!(parse_declaration("{}"), None);
/// ```
pub fn parse_declaration(segment: &str) -> Option<&str> {
    let inner = segment.strip_prefix('{')?.strip_suffix('}')?;
    if inner.contains('{') {
        return None;
    }

    let name = inner.trim();
    (!name.is_empty()).then_some(name)
}

/// A parsed route pattern.
///
/// Immutable after parsing; safe to share between threads and reuse for
/// any number of requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    syntax: PatternSyntax,
    keys: Vec<Option<String>>,
}

impl Pattern {
    /// Parse a pattern with the given syntax.
    ///
    /// A missing root separator is added before splitting.
    pub fn parse(pattern: &str, syntax: PatternSyntax) -> Self {
        let raw = normalize_pattern(pattern);

        let keys: Vec<Option<String>> = split_path(&raw)
            .into_iter()
            .map(|segment| {
                let key = syntax.binding_key(segment);
                if key.is_none() && syntax == PatternSyntax::Bracket && segment.starts_with('{') {
                    trace_log!("Ignoring malformed declaration '{}' in '{}'", segment, raw);
                }
                key.map(str::to_string)
            })
            .collect();

        debug_log!(
            "Parsed {:?} pattern '{}': {} segments, {} variables",
            syntax,
            raw,
            keys.len(),
            keys.iter().flatten().count()
        );

        Self {
            raw: raw.into_owned(),
            syntax,
            keys,
        }
    }

    /// The normalized pattern string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn syntax(&self) -> PatternSyntax {
        self.syntax
    }

    /// Number of segments, ignored positions included.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Variable name declared at `index`, if that position binds one.
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.keys.get(index)?.as_deref()
    }

    /// Declared variable names in pattern order (duplicates included).
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().filter_map(|key| key.as_deref())
    }

    /// Bind this pattern positionally to request path segments.
    ///
    /// Never fails. Unbound names are simply absent from the result.
    pub fn bind<S: AsRef<str>>(&self, segments: &[S]) -> PathVars {
        let mut vars = HashMap::with_capacity(self.keys.len().min(segments.len()));

        for (key, value) in self.keys.iter().zip(segments) {
            let Some(key) = key else { continue };
            let value: &str = value.as_ref();

            if let Some(previous) = vars.insert(key.clone(), value.to_string()) {
                debug_log!(
                    "Variable '{}' declared twice in '{}': '{}' replaces '{}'",
                    key,
                    self.raw,
                    value,
                    previous
                );
            }
        }

        trace_log!(
            "Bound '{}' against {} segments: {} variables",
            self.raw,
            segments.len(),
            vars.len()
        );

        PathVars::from_map(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_keys() {
        let pattern = Pattern::parse("//*/category/ id ", PatternSyntax::Placeholder);

        assert_eq!(pattern.len(), 4);
        assert_eq!(pattern.key_at(0), None);
        assert_eq!(pattern.key_at(1), None);
        assert_eq!(pattern.key_at(2), Some("category"));
        assert_eq!(pattern.key_at(3), Some("id"));
        assert_eq!(pattern.key_at(4), None);
    }

    #[test]
    fn test_placeholder_whitespace_only_is_ignored() {
        let pattern = Pattern::parse("/ /  * /x", PatternSyntax::Placeholder);
        assert_eq!(pattern.variables().collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn test_bracket_keys() {
        let pattern = Pattern::parse("/anything/{category}/{id}", PatternSyntax::Bracket);

        assert_eq!(pattern.key_at(0), None);
        assert_eq!(pattern.key_at(1), Some("category"));
        assert_eq!(pattern.key_at(2), Some("id"));
        assert_eq!(
            pattern.variables().collect::<Vec<_>>(),
            vec!["category", "id"]
        );
    }

    #[test]
    fn test_bracket_malformed_declarations_ignored() {
        for segment in ["id", "{id", "id}", "{a{b}", "{{id}}", "{}", "{  }", " {id}"] {
            assert_eq!(parse_declaration(segment), None, "segment: {segment:?}");
        }
    }

    #[test]
    fn test_bracket_wildcard_name_is_a_variable() {
        let pattern = Pattern::parse("/{*}", PatternSyntax::Bracket);
        let vars = pattern.bind(&["x"]);
        assert_eq!(vars.get("*"), Some("x"));
    }

    #[test]
    fn test_placeholder_treats_braces_as_names() {
        let vars = Pattern::parse("/{id}", PatternSyntax::Placeholder).bind(&["7"]);
        assert_eq!(vars.get("{id}"), Some("7"));
        assert_eq!(vars.get("id"), None);
    }

    #[test]
    fn test_pattern_normalized() {
        let pattern = Pattern::parse("users/{id}", PatternSyntax::default());
        assert_eq!(pattern.as_str(), "/users/{id}");
        assert_eq!(pattern.syntax(), PatternSyntax::Bracket);
        assert_eq!(pattern.len(), 2);

        assert!(Pattern::parse("", PatternSyntax::Bracket).is_empty());
    }

    #[test]
    fn test_bind_stops_at_shorter_sequence() {
        let pattern = Pattern::parse("/{a}/{b}/{c}", PatternSyntax::Bracket);

        let vars = pattern.bind(&["1"]);
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("a"), Some("1"));
        assert_eq!(vars.get("b"), None);

        let vars = pattern.bind(&["1", "2", "3", "4", "5"]);
        assert_eq!(vars.len(), 3);
        assert_eq!(vars.get("c"), Some("3"));
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let pattern = Pattern::parse("/{id}/x/{id}", PatternSyntax::Bracket);
        let vars = pattern.bind(&["first", "x", "second"]);
        assert_eq!(vars.get("id"), Some("second"));
        assert_eq!(vars.len(), 1);

        // The later position only wins once the path reaches it
        let vars = pattern.bind(&["first"]);
        assert_eq!(vars.get("id"), Some("first"));
    }

    #[test]
    fn test_bind_empty_segments_bind_empty_values() {
        let pattern = Pattern::parse("/a/b", PatternSyntax::Placeholder);
        let vars = pattern.bind(&["", "x"]);
        assert_eq!(vars.get("a"), Some(""));
        assert_eq!(vars.get("b"), Some("x"));
    }

    #[test]
    fn test_binding_key_per_syntax() {
        assert_eq!(PatternSyntax::Placeholder.binding_key("*"), None);
        assert_eq!(PatternSyntax::Placeholder.binding_key(""), None);
        assert_eq!(PatternSyntax::Placeholder.binding_key("id"), Some("id"));
        assert_eq!(PatternSyntax::Bracket.binding_key("id"), None);
        assert_eq!(PatternSyntax::Bracket.binding_key("{id}"), Some("id"));
    }
}
