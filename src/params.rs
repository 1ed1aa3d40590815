//! Bound path variables and query string parameters.
//!
//! - [`PathVars`] — the variable bindings produced by matching one pattern
//!   against one request path. Read-only once built.
//! - [`QueryParams`] — key/value pairs parsed from the raw query string with
//!   `application/x-www-form-urlencoded` rules. Keys may repeat
//!   (`?tag=a&tag=b`); lookups return the first value.
//!
//! # Example
//!
//! ```
//! use pathbind::{Pattern, PatternSyntax, QueryParams};
//!
//! let pattern = Pattern::parse("/users/{id}", PatternSyntax::Bracket);
//! let vars = pattern.bind(&["users", "42"]);
//! assert_eq!(vars.get_as::<u32>("id"), Ok(42));
//!
//! let query = QueryParams::from_query_string("page=1&sort=name");
//! assert_eq!(query.get_as::<u32>("page"), Ok(1));
//! assert_eq!(query.get("sort"), Some("name"));
//! ```

use crate::error::ParamError;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Variable bindings from a single pattern/path match.
///
/// Keys are unique. Ignored pattern positions never appear as keys.
/// Construct through [`Pattern::bind`](crate::Pattern::bind) or
/// [`PathMatcher`](crate::PathMatcher).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathVars {
    vars: HashMap<String, String>,
}

impl PathVars {
    pub(crate) fn from_map(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Get the value bound to `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Get a bound value and parse it as `T`.
    pub fn get_as<T>(&self, key: &str) -> Result<T, ParamError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let value = self.get(key).ok_or_else(|| ParamError::missing(key))?;
        value
            .parse()
            .map_err(|err| ParamError::invalid(key, value, err))
    }

    /// Return `true` if `key` is bound.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Iterate over all `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Return the number of bound variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Return `true` if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Query parameters parsed from a raw query string.
///
/// ```
/// use pathbind::QueryParams;
///
/// let query = QueryParams::from_query_string("tag=rust&tag=web&q=hello+world");
///
/// assert_eq!(query.get("tag"), Some("rust"));
/// assert_eq!(query.get_all("tag").len(), 2);
/// assert_eq!(query.get("q"), Some("hello world"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: HashMap<String, Vec<String>>,
}

impl QueryParams {
    /// Create empty query parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (without the leading `?`).
    ///
    /// `+` decodes to a space, percent escapes are decoded, and a key
    /// without `=` maps to the empty string.
    pub fn from_query_string(query: &str) -> Self {
        let mut params: HashMap<String, Vec<String>> = HashMap::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            params
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }

        Self { params }
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key)?.first().map(String::as_str)
    }

    /// Get every value for a key, in query order.
    ///
    /// Empty when the key is absent.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.params.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get the first value for a key, parsed as `T`.
    pub fn get_as<T>(&self, key: &str) -> Result<T, ParamError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let value = self.get(key).ok_or_else(|| ParamError::missing(key))?;
        value
            .parse()
            .map_err(|err| ParamError::invalid(key, value, err))
    }

    /// Return `true` if the given key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the number of unique parameter keys.
    pub fn len(&self) -> usize {
        self.params.len()
    }
}
