//! Request-scoped matcher: one pattern against one request target.
//!
//! [`PathMatcher`] does all of its work at construction. It splits the
//! request target into path, query and fragment, binds the pattern against
//! the path segments, and parses the query. Afterwards it only answers reads.
//!
//! # Example
//!
//! ```
//! use pathbind::PathMatcher;
//!
//! let m = PathMatcher::new("/edit/article/42?item=7#top", "/anything/{category}/{id}");
//!
//! assert_eq!(m.var("category"), "article");
//! assert_eq!(m.var_int("id"), Some(42));
//! assert_eq!(m.var("missing"), "");
//! assert_eq!(m.query("item"), "7");
//! assert_eq!(m.frag(), "top");
//! ```

use crate::error::ParamError;
use crate::params::{PathVars, QueryParams};
use crate::pattern::{Pattern, PatternSyntax};
use crate::segment::split_path;
use crate::trace_log;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// The three pieces of a request URL the matcher reads.
///
/// All fields borrow from the input and are passed through unmodified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTarget<'a> {
    /// Path component, e.g. `/blog/article/42`
    pub path: &'a str,
    /// Raw query string without the leading `?`
    pub raw_query: &'a str,
    /// Fragment without the leading `#`
    pub fragment: &'a str,
}

impl<'a> RequestTarget<'a> {
    /// Split a request target into path, query and fragment.
    ///
    /// Accepts origin-form targets (`/path?query#fragment`) as well as
    /// absolute URLs, whose scheme and authority are skipped.
    ///
    /// ```
    /// use pathbind::RequestTarget;
    ///
    /// let target = RequestTarget::parse("https://example.com/blog/?page=2#42");
    /// assert_eq!(target.path, "/blog/");
    /// assert_eq!(target.raw_query, "page=2");
    /// assert_eq!(target.fragment, "42");
    /// ```
    pub fn parse(target: &'a str) -> Self {
        let (rest, fragment) = target.split_once('#').unwrap_or((target, ""));
        let (rest, raw_query) = rest.split_once('?').unwrap_or((rest, ""));

        let path = match rest.split_once("://") {
            Some((scheme, after)) if is_scheme(scheme) => {
                after.find('/').map_or("/", |idx| &after[idx..])
            }
            _ => rest,
        };

        Self {
            path,
            raw_query,
            fragment,
        }
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`, so rooted paths never qualify.
fn is_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

impl<'a> From<&'a str> for RequestTarget<'a> {
    fn from(target: &'a str) -> Self {
        Self::parse(target)
    }
}

/// `http::Uri` carries no fragment, so it is always empty.
#[cfg(feature = "http")]
impl<'a> From<&'a http::Uri> for RequestTarget<'a> {
    fn from(uri: &'a http::Uri) -> Self {
        Self {
            path: uri.path(),
            raw_query: uri.query().unwrap_or(""),
            fragment: "",
        }
    }
}

/// Variable bindings, query and fragment for one request.
///
/// Built once per request and never mutated, so it can be read from several
/// threads. Do not reuse one across requests; build a new one from a
/// shared [`Pattern`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatcher {
    vars: PathVars,
    query: QueryParams,
    fragment: String,
}

impl PathMatcher {
    /// Match `target` against a `{name}`-style pattern.
    ///
    /// `target` is anything [`RequestTarget::parse`] accepts.
    pub fn new(target: &str, pattern: &str) -> Self {
        Self::with_syntax(target, pattern, PatternSyntax::default())
    }

    /// Match `target` against a pattern written in the given syntax.
    ///
    /// ```
    /// use pathbind::{PathMatcher, PatternSyntax};
    ///
    /// let m = PathMatcher::with_syntax("/edit/article/42", "/*/category/id", PatternSyntax::Placeholder);
    /// assert_eq!(m.var("category"), "article");
    /// assert_eq!(m.var("*"), "");
    /// ```
    pub fn with_syntax(target: &str, pattern: &str, syntax: PatternSyntax) -> Self {
        let pattern = Pattern::parse(pattern, syntax);
        Self::from_pattern(&RequestTarget::parse(target), &pattern)
    }

    /// Match an already split request target against a parsed pattern.
    ///
    /// The path is split first and each segment is then percent-decoded, so
    /// an encoded `%2F` stays inside its segment instead of splitting it.
    pub fn from_pattern(target: &RequestTarget<'_>, pattern: &Pattern) -> Self {
        let segments: Vec<Cow<'_, str>> = split_path(target.path)
            .into_iter()
            .map(|segment| percent_decode_str(segment).decode_utf8_lossy())
            .collect();

        let vars = pattern.bind(&segments);

        trace_log!(
            "Matched '{}' against '{}': {:?}",
            target.path,
            pattern.as_str(),
            vars
        );

        Self {
            vars,
            query: QueryParams::from_query_string(target.raw_query),
            fragment: target.fragment.to_string(),
        }
    }

    /// Value bound to `key`, or `""` when nothing is bound.
    pub fn var(&self, key: &str) -> &str {
        self.vars.get(key).unwrap_or("")
    }

    /// Value bound to `key` as a base-10 integer.
    ///
    /// `None` when the key is unbound or the value is not an integer
    /// (the empty string never is).
    pub fn var_int(&self, key: &str) -> Option<i64> {
        self.var_as(key).ok()
    }

    /// Value bound to `key` parsed as `T`, with the reason on failure.
    pub fn var_as<T>(&self, key: &str) -> Result<T, ParamError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.vars.get_as(key)
    }

    /// First query value for `key`, or `""` when absent.
    pub fn query(&self, key: &str) -> &str {
        self.query.get(key).unwrap_or("")
    }

    /// Every query value for `key`, in query order.
    pub fn query_all(&self, key: &str) -> &[String] {
        self.query.get_all(key)
    }

    /// The fragment, verbatim; `""` when the target had none.
    pub fn frag(&self) -> &str {
        &self.fragment
    }

    /// All variable bindings.
    pub fn vars(&self) -> &PathVars {
        &self.vars
    }

    /// All query parameters.
    pub fn query_params(&self) -> &QueryParams {
        &self.query
    }
}
