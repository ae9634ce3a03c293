// Hamta: duplicate detection for Persian news articles
//
// This is the library root. Each module corresponds to a stage of the
// comparison pipeline: fetch two articles, normalize their text, vectorize,
// score, decide.

pub mod config;
pub mod fetch;
pub mod output;
pub mod similarity;
pub mod text;
