// Suffix stemming and lemma lookup: pure functions over profile data.
//
// The stemmer is a light, rule-based affix stripper: one pass over the
// ordered rule list, each rule applied at most once. A token is never
// reduced below two remaining characters, so short function words survive
// intact rather than collapsing into single letters.

use std::collections::HashMap;

/// Strip known suffixes from a token, in rule order.
pub fn stem(token: &str, suffixes: &[String]) -> String {
    let mut word = token.to_string();
    for suffix in suffixes {
        if let Some(rest) = word.strip_suffix(suffix.as_str()) {
            if rest.chars().count() >= 2 {
                word = rest.to_string();
            }
        }
    }
    word
}

/// Map a stem to its canonical lemma, or pass it through unchanged.
pub fn lemmatize(stem: &str, lemmas: &HashMap<String, String>) -> String {
    match lemmas.get(stem) {
        Some(lemma) => lemma.clone(),
        None => stem.to_string(),
    }
}
