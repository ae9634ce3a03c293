// TF-IDF vectorization over a shared two-document feature space.
//
// The corpus here is deliberately tiny: the pair under comparison IS the
// corpus, so IDF is defined over exactly those two documents. Weighting is
// the standard smoothed form:
//
//   tf(t, d)  = raw count of t in d
//   idf(t)    = ln((1 + N) / (1 + df(t))) + 1
//   weight    = tf × idf, then each vector is L2-normalized
//
// The +1 smoothing keeps every vocabulary term's IDF finite and positive;
// an empty document yields the zero vector rather than an error.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::text::normalize::CanonicalDocument;

/// Sparse term → weight map. Both vectors of a pair are drawn from the same
/// vocabulary; absent terms have weight zero. Ordered so downstream dot
/// products and norms sum in a fixed order, keeping scores reproducible
/// bit for bit across runs.
pub type FeatureVector = BTreeMap<String, f64>;

/// Fit TF-IDF over a corpus and return one weight vector per document.
///
/// Written generically over the corpus length, but the rest of the system
/// only ever feeds it two documents; the IDF values are meaningful for
/// that pair alone, and fitting more documents would change the basis.
pub fn fit(corpus: &[&CanonicalDocument]) -> Vec<FeatureVector> {
    let n = corpus.len() as f64;

    // Document frequency: in how many documents does each term appear?
    let mut document_frequency: HashMap<&str, f64> = HashMap::new();
    for doc in corpus {
        let unique: HashSet<&str> = doc.tokens.iter().map(String::as_str).collect();
        for term in unique {
            *document_frequency.entry(term).or_insert(0.0) += 1.0;
        }
    }

    corpus
        .iter()
        .map(|doc| {
            // Raw term counts
            let mut counts: HashMap<&str, f64> = HashMap::new();
            for token in &doc.tokens {
                *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
            }

            let mut vector: FeatureVector = counts
                .into_iter()
                .map(|(term, tf)| {
                    let df = document_frequency.get(term).copied().unwrap_or(0.0);
                    let idf = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
                    (term.to_string(), tf * idf)
                })
                .collect();

            // Unit length, so cosine reduces to a dot product downstream.
            let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for weight in vector.values_mut() {
                    *weight /= norm;
                }
            }
            vector
        })
        .collect()
}

/// Vectorize the document pair under comparison.
pub fn vectorize_pair(
    a: &CanonicalDocument,
    b: &CanonicalDocument,
) -> (FeatureVector, FeatureVector) {
    let mut vectors = fit(&[a, b]).into_iter();
    let first = vectors.next().unwrap_or_default();
    let second = vectors.next().unwrap_or_default();
    (first, second)
}
