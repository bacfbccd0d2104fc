//! Term-hashing embedding provider.
//!
//! Deterministic fixed-dimension vectors from hashed term frequencies.
//! Needs no network access, so it backs dry runs and tests.

use std::collections::HashMap;

use scope_core::errors::ScopeResult;
use scope_core::models::Embedding;
use scope_core::traits::IEmbeddingProvider;

/// Offline embedding provider.
///
/// Terms are hashed into buckets with FNV-1a and weighted by frequency and a
/// length-based IDF approximation; the result is L2-normalized. Texts that
/// share words get positive cosine similarity.
pub struct HashingEmbeddingProvider {
    dimensions: usize,
}

impl HashingEmbeddingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    /// Lowercase alphanumeric terms of at least two characters.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.chars().count() >= 2)
            .map(str::to_lowercase)
            .collect()
    }

    fn vectorize(&self, text: &str) -> Embedding {
        let mut vec = vec![0.0f32; self.dimensions];
        let tokens = Self::tokenize(text);
        if tokens.is_empty() || self.dimensions == 0 {
            return vec;
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        for (term, count) in tf {
            let idf = 1.0 + (term.len() as f32).ln();
            vec[Self::bucket(term, self.dimensions)] += (count / total) * idf;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for HashingEmbeddingProvider {
    fn embed(&self, text: &str) -> ScopeResult<Embedding> {
        Ok(self.vectorize(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model(&self) -> &str {
        "fnv1a-term-hash"
    }

    fn name(&self) -> &str {
        "hashing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn empty_text_returns_zero_vector() {
        let p = HashingEmbeddingProvider::new(128);
        let v = p.embed("").unwrap();
        assert_eq!(v.len(), 128);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn output_is_unit_length() {
        let p = HashingEmbeddingProvider::new(128);
        let v = p.embed("The vendor will deliver a website by June.").unwrap();
        let norm = dot(&v, &v).sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn deterministic() {
        let p = HashingEmbeddingProvider::new(64);
        assert_eq!(p.embed("same words").unwrap(), p.embed("same words").unwrap());
    }

    #[test]
    fn shared_terms_score_higher() {
        let p = HashingEmbeddingProvider::new(256);
        let query = p.embed("mobile app and website").unwrap();
        let related = p.embed("deliver a website").unwrap();
        let unrelated = p.embed("hosting included yearly").unwrap();
        assert!(dot(&query, &related) > dot(&query, &unrelated));
    }
}
