//! Cache behaviour of the embedding engine against counting test doubles.
//!
//! Every test pins down one way the cache could waste or corrupt work:
//! - repeated text reaching the provider twice
//! - near-identical text sharing a key
//! - a failed request leaving a poisoned entry behind
//! - concurrent misses on one text fanning out into several requests
//! - a bounded cache growing past its capacity

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use scope_core::errors::{EmbeddingError, ScopeError};
use scope_core::models::Embedding;
use scope_core::traits::IEmbeddingProvider;
use scope_embeddings::{content_hash, EmbeddingCache, EmbeddingEngine};
use test_fixtures::CountingProvider;

/// Engine over a shared counting provider, so tests can read the call count.
struct Counted(Arc<CountingProvider>);

impl IEmbeddingProvider for Counted {
    fn embed(&self, text: &str) -> scope_core::ScopeResult<Embedding> {
        self.0.embed(text)
    }
    fn dimensions(&self) -> usize {
        self.0.dimensions()
    }
    fn model(&self) -> &str {
        self.0.model()
    }
    fn name(&self) -> &str {
        self.0.name()
    }
}

fn engine_with(provider: CountingProvider) -> (EmbeddingEngine, Arc<CountingProvider>) {
    let provider = Arc::new(provider);
    let engine = EmbeddingEngine::new(
        Box::new(Counted(Arc::clone(&provider))),
        Arc::new(EmbeddingCache::unbounded()),
    );
    (engine, provider)
}

#[test]
fn identical_text_is_fetched_once_and_bit_identical() {
    let (engine, provider) = engine_with(CountingProvider::new(16));

    let a = engine.embed("Hosting is included for one year.").unwrap();
    let b = engine.embed("Hosting is included for one year.").unwrap();

    assert_eq!(provider.calls(), 1);
    let a_bits: Vec<u32> = a.iter().map(|x| x.to_bits()).collect();
    let b_bits: Vec<u32> = b.iter().map(|x| x.to_bits()).collect();
    assert_eq!(a_bits, b_bits);
}

#[test]
fn one_character_difference_means_two_requests() {
    let (engine, provider) = engine_with(CountingProvider::new(16));

    engine.embed("deliver a website").unwrap();
    engine.embed("deliver a websites").unwrap();

    assert_ne!(content_hash("deliver a website"), content_hash("deliver a websites"));
    assert_eq!(provider.calls(), 2);
    assert_eq!(provider.calls_for("deliver a website"), 1);
    assert_eq!(provider.calls_for("deliver a websites"), 1);
}

#[test]
fn failure_propagates_and_is_not_cached() {
    let (engine, provider) = engine_with(CountingProvider::new(16).failing_on("outage"));

    let err = engine.embed("during an outage").unwrap_err();
    assert!(matches!(
        err,
        ScopeError::Embedding(EmbeddingError::ApiStatus { status: 503, .. })
    ));
    assert!(err.is_transient());
    assert!(!engine.cache().contains(&content_hash("during an outage")));

    // The next call tries again rather than serving a stored failure.
    assert!(engine.embed("during an outage").is_err());
    assert_eq!(provider.calls(), 2);
    assert_eq!(engine.cache_stats().failed_loads, 2);
}

#[test]
fn wrong_dimensionality_is_rejected_and_not_cached() {
    struct Short;
    impl IEmbeddingProvider for Short {
        fn embed(&self, _: &str) -> scope_core::ScopeResult<Embedding> {
            Ok(vec![1.0, 2.0])
        }
        fn dimensions(&self) -> usize {
            3
        }
        fn model(&self) -> &str {
            "short"
        }
        fn name(&self) -> &str {
            "short"
        }
    }

    let engine = EmbeddingEngine::new(Box::new(Short), Arc::new(EmbeddingCache::unbounded()));
    let err = engine.embed("x").unwrap_err();
    assert!(matches!(
        err,
        ScopeError::Embedding(EmbeddingError::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    ));
    assert!(engine.cache().is_empty());
}

#[test]
fn engines_sharing_a_cache_share_entries() {
    let cache = Arc::new(EmbeddingCache::unbounded());
    let provider = Arc::new(CountingProvider::new(8));
    let first = EmbeddingEngine::new(Box::new(Counted(Arc::clone(&provider))), Arc::clone(&cache));
    let second = EmbeddingEngine::new(Box::new(Counted(Arc::clone(&provider))), Arc::clone(&cache));

    first.embed("shared scope text").unwrap();
    second.embed("shared scope text").unwrap();

    assert_eq!(provider.calls(), 1);
}

#[test]
fn concurrent_misses_on_one_text_are_coalesced() {
    let (engine, provider) =
        engine_with(CountingProvider::new(16).with_delay(Duration::from_millis(50)));
    let engine = Arc::new(engine);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.embed("the same uncached sentence").unwrap())
        })
        .collect();
    let results: Vec<Embedding> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(provider.calls(), 1, "single-flight must collapse concurrent misses");
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn concurrent_failure_reaches_every_waiter() {
    let (engine, provider) = engine_with(
        CountingProvider::new(16)
            .with_delay(Duration::from_millis(50))
            .failing_on("broken"),
    );
    let engine = Arc::new(engine);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.embed("broken request").is_err())
        })
        .collect();

    assert!(handles.into_iter().all(|h| h.join().unwrap()));
    assert!(provider.calls() >= 1);
    assert!(!engine.cache().contains(&content_hash("broken request")));
}

#[test]
fn bounded_cache_still_serves_recent_entries() {
    let provider = Arc::new(CountingProvider::new(8));
    let engine = EmbeddingEngine::new(
        Box::new(Counted(Arc::clone(&provider))),
        Arc::new(EmbeddingCache::bounded(2)),
    );

    engine.embed("one").unwrap();
    engine.embed("one").unwrap();
    assert_eq!(provider.calls(), 1);
    assert_eq!(engine.cache().capacity(), Some(2));
}

/// Capacity must actually bound the cache, and an evicted entry must be
/// fetched again rather than served stale or reported as present.
#[test]
fn bounded_cache_evicts_past_capacity() {
    let provider = Arc::new(CountingProvider::new(8));
    let engine = EmbeddingEngine::new(
        Box::new(Counted(Arc::clone(&provider))),
        Arc::new(EmbeddingCache::bounded(2)),
    );

    let texts: Vec<String> = (0..50).map(|i| format!("scope section {i}")).collect();
    for text in &texts {
        engine.embed(text).unwrap();
    }
    assert_eq!(provider.calls(), 50);
    assert!(engine.cache().len() <= 2, "len = {}", engine.cache().len());

    let evicted = texts
        .iter()
        .find(|t| !engine.cache().contains(&content_hash(t)))
        .expect("at least 48 of 50 entries are gone");
    engine.embed(evicted).unwrap();
    assert_eq!(provider.calls(), 51);
}
