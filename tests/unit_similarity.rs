// Unit tests for the similarity pipeline.
//
// Exercises the pure core over hand-built token sequences: score bounds,
// symmetry, self-similarity, degenerate documents, the exact smoothed-IDF
// reference value, and the strict threshold boundary.

use hamta::similarity::cosine::cosine_similarity;
use hamta::similarity::decision::{DecisionPolicy, Verdict};
use hamta::similarity::vectorizer::vectorize_pair;
use hamta::text::normalize::CanonicalDocument;

fn doc(tokens: &[&str]) -> CanonicalDocument {
    CanonicalDocument {
        tokens: tokens.iter().map(|t| t.to_string()).collect(),
    }
}

fn score(a: &[&str], b: &[&str]) -> f64 {
    let (va, vb) = vectorize_pair(&doc(a), &doc(b));
    cosine_similarity(&va, &vb)
}

// ============================================================
// Bounds, symmetry, determinism
// ============================================================

#[test]
fn score_is_bounded_to_unit_interval() {
    let pairs: &[(&[&str], &[&str])] = &[
        (&["a"], &["a"]),
        (&["a", "b", "c"], &["c", "d", "e"]),
        (&["a", "a", "a"], &["a", "b"]),
        (&[], &["x"]),
        (&[], &[]),
    ];
    for (a, b) in pairs {
        let s = score(a, b);
        assert!((0.0..=1.0).contains(&s), "score {s} out of bounds");
    }
}

#[test]
fn score_is_symmetric() {
    let a: &[&str] = &["economy", "oil", "export", "minister"];
    let b: &[&str] = &["oil", "export", "football"];
    let ab = score(a, b);
    let ba = score(b, a);
    assert!((ab - ba).abs() < 1e-15, "{ab} vs {ba}");
}

#[test]
fn score_is_deterministic_across_calls() {
    let a: &[&str] = &["one", "two", "three"];
    let b: &[&str] = &["two", "three", "four"];
    assert_eq!(score(a, b).to_bits(), score(a, b).to_bits());
}

// ============================================================
// Self-similarity and degenerate documents
// ============================================================

#[test]
fn identical_documents_score_one() {
    let s = score(&["a", "b", "c"], &["a", "b", "c"]);
    assert!((s - 1.0).abs() < 1e-9, "got {s}");
}

#[test]
fn identical_documents_with_repeats_score_one() {
    let s = score(&["a", "a", "b"], &["a", "a", "b"]);
    assert!((s - 1.0).abs() < 1e-9, "got {s}");
}

#[test]
fn disjoint_documents_score_zero() {
    assert_eq!(score(&["a", "b"], &["c", "d"]), 0.0);
}

#[test]
fn empty_document_scores_zero_exactly() {
    assert_eq!(score(&[], &["a", "b"]), 0.0);
    assert_eq!(score(&["a", "b"], &[]), 0.0);
    assert_eq!(score(&[], &[]), 0.0);
}

// ============================================================
// Smoothed-IDF reference value
// ============================================================

#[test]
fn reference_pair_matches_precomputed_value() {
    // d1 = {a b c d}, d2 = {a b e f}, each term once. Shared terms get
    // idf = ln(3/3)+1 = 1; unique terms idf = ln(3/2)+1. The cosine
    // collapses to 2 / (2 + 2*idf^2), roughly 0.336097. Any deviation from the
    // smoothed formula (missing +1, log base, no L2) moves this value.
    let s = score(&["a", "b", "c", "d"], &["a", "b", "e", "f"]);

    let idf = (1.5f64).ln() + 1.0;
    let expected = 2.0 / (2.0 + 2.0 * idf * idf);
    assert!((s - expected).abs() < 1e-12, "got {s}, expected {expected}");
    assert!((s - 0.3361).abs() < 1e-4);
}

#[test]
fn repeated_term_outweighs_single_occurrence() {
    // Raw-count tf: doubling a shared term pulls the vectors closer
    let single = score(&["a", "x"], &["a", "y"]);
    let repeated = score(&["a", "a", "x"], &["a", "a", "y"]);
    assert!(repeated > single, "{repeated} should exceed {single}");
}

// ============================================================
// Threshold boundary (strict inequality)
// ============================================================

#[test]
fn score_exactly_at_threshold_is_distinct() {
    let policy = DecisionPolicy::new(0.9).unwrap();
    assert_eq!(policy.decide(0.9).verdict, Verdict::Distinct);
}

#[test]
fn score_epsilon_above_threshold_is_duplicate() {
    let policy = DecisionPolicy::new(0.9).unwrap();
    assert_eq!(policy.decide(0.9000001).verdict, Verdict::Duplicate);
}

#[test]
fn perfect_score_is_duplicate_under_default_threshold() {
    let policy = DecisionPolicy::default();
    assert_eq!(policy.decide(1.0).verdict, Verdict::Duplicate);
}

#[test]
fn zero_score_is_distinct_even_at_zero_threshold() {
    // Strict >: a threshold of 0.0 still classifies a 0.0 score as distinct
    let policy = DecisionPolicy::new(0.0).unwrap();
    assert_eq!(policy.decide(0.0).verdict, Verdict::Distinct);
}
