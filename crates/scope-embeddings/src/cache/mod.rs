//! Process-scoped embedding cache backed by moka.
//!
//! Keys are blake3 content hashes of the exact UTF-8 text, values are
//! embedding vectors. The key does not include the model identifier: an
//! engine is bound to one provider for its whole life.
//!
//! Concurrent misses on the same key are coalesced: one caller runs the
//! loader, the others wait for its result. A failed load stores nothing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use moka::sync::Cache;
use scope_core::errors::{ScopeError, ScopeResult};
use scope_core::models::Embedding;
use tracing::debug;

/// Stable content key for `text`: lowercase hex blake3 digest (256-bit).
pub fn content_hash(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

/// Point-in-time cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Total lookups through [`EmbeddingCache::get_or_try_insert`].
    pub lookups: u64,
    /// Lookups answered without running a loader.
    pub hits: u64,
    /// Loader invocations (one per coalesced miss).
    pub loads: u64,
    /// Loader invocations that returned an error.
    pub failed_loads: u64,
}

/// Embedding cache shared by every engine built on it.
pub struct EmbeddingCache {
    inner: Cache<String, Embedding>,
    capacity: Option<u64>,
    lookups: AtomicU64,
    loads: AtomicU64,
    failed_loads: AtomicU64,
}

impl EmbeddingCache {
    /// Cache holding at most `max_entries` embeddings (TinyLFU eviction).
    pub fn bounded(max_entries: u64) -> Self {
        Self::with_inner(Cache::new(max_entries), Some(max_entries))
    }

    /// Cache that never evicts.
    pub fn unbounded() -> Self {
        Self::with_inner(Cache::builder().build(), None)
    }

    /// `0` means unbounded, matching `embedding.cache_capacity`.
    pub fn with_capacity(capacity: u64) -> Self {
        if capacity == 0 {
            Self::unbounded()
        } else {
            Self::bounded(capacity)
        }
    }

    fn with_inner(inner: Cache<String, Embedding>, capacity: Option<u64>) -> Self {
        Self {
            inner,
            capacity,
            lookups: AtomicU64::new(0),
            loads: AtomicU64::new(0),
            failed_loads: AtomicU64::new(0),
        }
    }

    /// Return the cached vector for `key`, or run `load` once and cache its result.
    ///
    /// Waiters on an in-flight load for the same key receive that load's
    /// outcome, including its error.
    pub fn get_or_try_insert<F>(&self, key: String, load: F) -> ScopeResult<Embedding>
    where
        F: FnOnce() -> ScopeResult<Embedding>,
    {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.inner
            .try_get_with(key, || {
                self.loads.fetch_add(1, Ordering::Relaxed);
                let loaded = load();
                if loaded.is_err() {
                    self.failed_loads.fetch_add(1, Ordering::Relaxed);
                }
                loaded
            })
            .map_err(|e: Arc<ScopeError>| (*e).clone())
    }

    /// Get an embedding by content hash without loading.
    pub fn get(&self, key: &str) -> Option<Embedding> {
        self.inner.get(key)
    }

    /// Insert an embedding keyed by content hash.
    pub fn insert(&self, key: String, embedding: Embedding) {
        self.inner.insert(key, embedding);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured entry limit, `None` when unbounded.
    pub fn capacity(&self) -> Option<u64> {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        let lookups = self.lookups.load(Ordering::Relaxed);
        let loads = self.loads.load(Ordering::Relaxed);
        let stats = CacheStats {
            lookups,
            hits: lookups.saturating_sub(loads),
            loads,
            failed_loads: self.failed_loads.load(Ordering::Relaxed),
        };
        debug!(?stats, "embedding cache stats");
        stats
    }
}

impl Default for EmbeddingCache {
    fn default() -> Self {
        Self::bounded(scope_core::config::defaults::DEFAULT_EMBEDDING_CACHE_CAPACITY)
    }
}
