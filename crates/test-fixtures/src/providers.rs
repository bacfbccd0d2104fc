use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use scope_core::errors::{EmbeddingError, ScopeResult};
use scope_core::models::Embedding;
use scope_core::traits::IEmbeddingProvider;

/// Deterministic provider that records how often each text was requested.
///
/// Vectors are character histograms folded into `dims` buckets, so texts
/// that differ by one character get different vectors.
pub struct CountingProvider {
    dims: usize,
    calls: AtomicUsize,
    per_text: Mutex<HashMap<String, usize>>,
    delay: Option<Duration>,
    fail_on: Option<String>,
}

impl CountingProvider {
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            calls: AtomicUsize::new(0),
            per_text: Mutex::new(HashMap::new()),
            delay: None,
            fail_on: None,
        }
    }

    /// Sleep before answering, to widen race windows in concurrency tests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fail every request whose text contains `marker`.
    pub fn failing_on(mut self, marker: impl Into<String>) -> Self {
        self.fail_on = Some(marker.into());
        self
    }

    /// Total requests received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received for exactly `text`.
    pub fn calls_for(&self, text: &str) -> usize {
        self.per_text
            .lock()
            .map(|m| m.get(text).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    fn histogram(&self, text: &str) -> Embedding {
        let mut v = vec![0.0f32; self.dims];
        for (i, c) in text.chars().enumerate() {
            v[(c as usize + i) % self.dims] += 1.0;
        }
        v
    }
}

impl IEmbeddingProvider for CountingProvider {
    fn embed(&self, text: &str) -> ScopeResult<Embedding> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut m) = self.per_text.lock() {
            *m.entry(text.to_string()).or_default() += 1;
        }
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        if let Some(marker) = &self.fail_on {
            if text.contains(marker.as_str()) {
                return Err(EmbeddingError::ApiStatus {
                    status: 503,
                    body: "mock outage".to_string(),
                }
                .into());
            }
        }
        Ok(self.histogram(text))
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn model(&self) -> &str {
        "counting-mock"
    }

    fn name(&self) -> &str {
        "counting-mock"
    }
}

/// Provider with hand-written vectors. Unknown texts are an error.
pub struct FixedProvider {
    vectors: HashMap<String, Embedding>,
    dims: usize,
    calls: AtomicUsize,
}

impl FixedProvider {
    pub fn new(dims: usize) -> Self {
        Self {
            vectors: HashMap::new(),
            dims,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with(mut self, text: impl Into<String>, vector: Embedding) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IEmbeddingProvider for FixedProvider {
    fn embed(&self, text: &str) -> ScopeResult<Embedding> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.vectors.get(text).cloned().ok_or_else(|| {
            EmbeddingError::MalformedResponse {
                reason: format!("no fixed vector for {text:?}"),
            }
            .into()
        })
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn model(&self) -> &str {
        "fixed-mock"
    }

    fn name(&self) -> &str {
        "fixed-mock"
    }
}

/// Provider whose dimension `i` counts occurrences of keyword `i`.
///
/// A text mentioning none of the keywords embeds as the zero vector.
pub struct KeywordProvider {
    keywords: Vec<String>,
}

impl KeywordProvider {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.as_ref().to_lowercase()).collect(),
        }
    }
}

impl IEmbeddingProvider for KeywordProvider {
    fn embed(&self, text: &str) -> ScopeResult<Embedding> {
        let lowered = text.to_lowercase();
        Ok(self
            .keywords
            .iter()
            .map(|k| lowered.matches(k.as_str()).count() as f32)
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.keywords.len()
    }

    fn model(&self) -> &str {
        "keyword-mock"
    }

    fn name(&self) -> &str {
        "keyword-mock"
    }
}
