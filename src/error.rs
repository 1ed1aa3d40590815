//! Errors reported by the typed accessors.
//!
//! Matching itself never fails: unbound variables, segment-count mismatches
//! and malformed declarations all produce a best-effort result. Only the
//! typed accessors ([`PathVars::get_as`](crate::PathVars::get_as),
//! [`QueryParams::get_as`](crate::QueryParams::get_as) and
//! [`PathMatcher::var_as`](crate::PathMatcher::var_as)) report why a value
//! could not be produced.
//!
//! ```
//! use pathbind::{ParamError, PathMatcher};
//!
//! let m = PathMatcher::new("/users/abc", "/users/{id}");
//! let err = m.var_as::<u32>("id").unwrap_err();
//! assert!(matches!(err, ParamError::Invalid { .. }));
//! ```

use std::fmt;

/// Why a typed lookup did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// No value is bound under this key
    Missing { key: String },

    /// A value is bound but does not parse as the requested type
    Invalid {
        key: String,
        value: String,
        message: String,
    },
}

impl ParamError {
    pub(crate) fn missing(key: &str) -> Self {
        ParamError::Missing {
            key: key.to_string(),
        }
    }

    pub(crate) fn invalid(key: &str, value: &str, err: impl fmt::Display) -> Self {
        ParamError::Invalid {
            key: key.to_string(),
            value: value.to_string(),
            message: err.to_string(),
        }
    }

    /// Key the failed lookup was made with.
    pub fn key(&self) -> &str {
        match self {
            ParamError::Missing { key } | ParamError::Invalid { key, .. } => key,
        }
    }

    /// Check if the key had no value at all
    pub fn is_missing(&self) -> bool {
        matches!(self, ParamError::Missing { .. })
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Missing { key } => write!(f, "No value bound for '{}'", key),
            ParamError::Invalid {
                key,
                value,
                message,
            } => write!(f, "Invalid value '{}' for '{}': {}", value, key, message),
        }
    }
}

impl std::error::Error for ParamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_display() {
        let error = ParamError::missing("id");
        assert_eq!(error.to_string(), "No value bound for 'id'");
        assert!(error.is_missing());
        assert_eq!(error.key(), "id");
    }

    #[test]
    fn test_invalid_display() {
        let parse_err = "x".parse::<i64>().unwrap_err();
        let error = ParamError::invalid("id", "x", parse_err);
        assert_eq!(
            error.to_string(),
            "Invalid value 'x' for 'id': invalid digit found in string"
        );
        assert!(!error.is_missing());
        assert_eq!(error.key(), "id");
    }
}
