//! Parsed pattern caching.
//!
//! This module provides [`PatternCache`] — an LRU cache of parsed
//! [`Pattern`]s so that a route template used on every request is split and
//! scanned only once. It is gated behind the `cache` feature flag and uses
//! the [`lru`] crate internally.
//!
//! Entries are keyed by syntax and normalized pattern string, so `user/{id}`
//! and `/user/{id}` share an entry while the same text under a different
//! [`PatternSyntax`] does not. Cached patterns are handed out as
//! `Arc<Pattern>`; the matchers built from them stay request-scoped.
//!
//! [`CacheStats`] tracks hits, misses, and invalidations.
//!
//! # Examples
//!
//! ```
//! use pathbind::cache::PatternCache;
//! use pathbind::{PathMatcher, PatternSyntax};
//!
//! let mut cache = PatternCache::new();
//! let pattern = cache.get_or_parse("/users/{id}", PatternSyntax::Bracket);
//! let m = PathMatcher::from_pattern(&"/users/7".into(), &pattern);
//! assert_eq!(m.var("id"), "7");
//!
//! cache.get_or_parse("users/{id}", PatternSyntax::Bracket);
//! assert_eq!(cache.stats().hits, 1);
//! assert_eq!(cache.stats().misses, 1);
//! ```

use crate::pattern::{Pattern, PatternSyntax};
use crate::segment::normalize_pattern;
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PatternKey {
    syntax: PatternSyntax,
    pattern: String,
}

/// Counters tracking cache hit/miss rates and invalidations.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of lookups served from the cache.
    pub hits: usize,
    /// Number of lookups that had to parse.
    pub misses: usize,
    /// Number of full cache invalidations (via [`PatternCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of parsed patterns.
///
/// Default capacity is 256 patterns.
#[derive(Debug)]
pub struct PatternCache {
    patterns: LruCache<PatternKey, Arc<Pattern>>,
    stats: CacheStats,
}

impl PatternCache {
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(256) {
        Some(capacity) => capacity,
        None => unreachable!(),
    };

    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` patterns.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            patterns: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Return the cached parse of `pattern`, parsing and caching on a miss.
    ///
    /// Updates hit/miss stats.
    pub fn get_or_parse(&mut self, pattern: &str, syntax: PatternSyntax) -> Arc<Pattern> {
        let key = PatternKey {
            syntax,
            pattern: normalize_pattern(pattern).into_owned(),
        };

        if let Some(parsed) = self.patterns.get(&key) {
            self.stats.hits += 1;
            trace_log!("Pattern cache hit for '{}'", key.pattern);
            return Arc::clone(parsed);
        }

        self.stats.misses += 1;
        trace_log!("Pattern cache miss for '{}'", key.pattern);

        let parsed = Arc::new(Pattern::parse(&key.pattern, syntax));
        self.patterns.push(key, Arc::clone(&parsed));
        parsed
    }

    /// Clear all entries and increment the invalidation counter.
    pub fn clear(&mut self) {
        let len = self.patterns.len();
        self.patterns.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Pattern cache cleared: {} entries removed ({} total invalidations, hit rate: {:.1}%)",
            len,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    /// Return a reference to the current cache statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset all counters in [`CacheStats`] to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Return the number of cached patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Return the maximum number of cached patterns.
    pub fn capacity(&self) -> NonZeroUsize {
        self.patterns.cap()
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}
