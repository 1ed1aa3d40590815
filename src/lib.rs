//! # pathbind
//!
//! Bind named segments of a URL path pattern to the segments of a request
//! path, one pattern against one path per call.
//!
//! A pattern and a request path are both split on `/`. Pattern position `i`
//! binds to request position `i`; there is no routing tree, no method
//! matching and no literal comparison. Absence is never an error: unknown
//! variables read as `""`, and extra segments on either side are ignored.
//!
//! ## Quick start
//!
//! ```
//! use pathbind::{PathMatcher, PatternSyntax};
//!
//! // `{name}` declarations (the default syntax)
//! let m = PathMatcher::new("/edit/article/42?draft=1", "/anything/{category}/{id}");
//! assert_eq!(m.var("category"), "article");
//! assert_eq!(m.var_int("id"), Some(42));
//! assert_eq!(m.query("draft"), "1");
//!
//! // Bare names, with `*` or an empty segment skipping a position
//! let m = PathMatcher::with_syntax("/edit/article/42", "/*/category/id", PatternSyntax::Placeholder);
//! assert_eq!(m.var("id"), "42");
//! assert_eq!(m.var("*"), "");
//! ```
//!
//! ## Reusing patterns
//!
//! [`Pattern`] is parsed once and can be shared between requests, either
//! held directly or through [`cache::PatternCache`] (feature `cache`).
//! Build a fresh [`PathMatcher`] per request with
//! [`PathMatcher::from_pattern`].
//!
//! ## Feature flags
//!
//! | Feature   | Default | Enables                                   |
//! |-----------|---------|-------------------------------------------|
//! | `log`     | yes     | diagnostics through the `log` crate       |
//! | `tracing` | no      | diagnostics through the `tracing` crate   |
//! | `cache`   | yes     | [`cache::PatternCache`] (LRU)             |
//! | `http`    | no      | `From<&http::Uri>` for [`RequestTarget`]  |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;

#[cfg(feature = "cache")]
pub mod cache;
pub mod error;
pub mod matcher;
pub mod params;
pub mod pattern;
pub mod segment;

pub use error::ParamError;
pub use matcher::{PathMatcher, RequestTarget};
pub use params::{PathVars, QueryParams};
pub use pattern::{Pattern, PatternSyntax, WILDCARD};
pub use segment::{normalize_pattern, split_path, SEPARATOR};
