//! Cosine similarity over dense embeddings.

/// Cosine similarity between two vectors, accumulated in f64.
///
/// Returns 0.0 when either vector has zero magnitude, when the lengths
/// differ, when the vectors are empty, or when a component is not finite.
/// The result is clamped to [-1, 1].
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    let sim = dot / denom;
    if denom < f64::EPSILON || !sim.is_finite() {
        0.0
    } else {
        sim.clamp(-1.0, 1.0)
    }
}
