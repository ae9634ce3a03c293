// Similarity pipeline: TF-IDF vectorization, cosine scoring, verdict policy.

pub mod cosine;
pub mod decision;
pub mod vectorizer;
