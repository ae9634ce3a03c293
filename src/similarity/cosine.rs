// Cosine similarity over sparse weight maps.
//
// Vectors arriving from the vectorizer are already unit-length, so the
// score is effectively the dot product, but the norms are recomputed here
// so the function stands on its own, and a zero-norm (degenerate) vector is
// an explicit 0.0 rather than a division by zero.

use super::vectorizer::FeatureVector;

/// Compute the cosine similarity between two feature vectors.
///
/// Returns a score in [0, 1]: 0.0 for no shared vocabulary or a degenerate
/// (empty-document) vector, 1.0 for identical direction.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> f64 {
    // Iterate the smaller map; terms missing from either side contribute 0.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, wa)| large.get(term).map(|wb| wa * wb))
        .sum();

    let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if norm_a < f64::EPSILON || norm_b < f64::EPSILON {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
