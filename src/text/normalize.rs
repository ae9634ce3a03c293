// Normalizer: raw article text to a canonical token sequence.
//
// Pipeline order matters and mirrors the comparison contract downstream:
// orthographic folding first (it can change character boundaries), then
// UAX#29 word segmentation, then stop-word and word-class filtering, then
// stemming and lemma lookup. Every step is a pure transformation; the
// normalizer owns its linguistic resources and compiled regex, built once.

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use super::profile::LanguageProfile;
use super::stem;

/// A normalized document: the ordered sequence of surviving tokens.
///
/// Invariant: every token is non-empty, word-like, not a stop word, and
/// reduced to its stem/lemma form. An empty document is a valid state
/// (empty input, or everything filtered away), not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalDocument {
    pub tokens: Vec<String>,
}

impl CanonicalDocument {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The whitespace-joined canonical string form.
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Long-lived text normalizer holding one language's resources.
pub struct Normalizer {
    profile: LanguageProfile,
    // Unicode \w per UTS#18: Alphabetic, Mark, Nd, Connector_Punctuation,
    // Join_Control. Join_Control keeps ZWNJ-bearing Persian compounds.
    word_pattern: Regex,
}

impl Normalizer {
    pub fn new(profile: LanguageProfile) -> Self {
        let word_pattern = Regex::new(r"^\w+$").expect("word pattern is a valid regex");
        Self {
            profile,
            word_pattern,
        }
    }

    /// Normalizer with the Persian profile.
    pub fn persian() -> Self {
        Self::new(LanguageProfile::persian())
    }

    /// Normalize raw text into its canonical token sequence.
    pub fn normalize(&self, raw: &str) -> CanonicalDocument {
        let text = self.orthographic(raw);

        let tokens = text
            .unicode_words()
            .filter(|token| !self.profile.stop_words.contains(*token))
            .filter(|token| self.word_pattern.is_match(token))
            .map(|token| stem::stem(token, &self.profile.suffixes))
            .map(|stemmed| stem::lemmatize(&stemmed, &self.profile.lemmas))
            .filter(|token| !token.is_empty())
            .collect();

        CanonicalDocument { tokens }
    }

    /// Character-level canonicalization: NFKC, profile strip set and
    /// unification map, lowercasing, whitespace collapse.
    fn orthographic(&self, raw: &str) -> String {
        let folded: String = raw
            .nfkc()
            .filter(|c| !self.profile.strip_chars.contains(c))
            .map(|c| self.profile.char_map.get(&c).copied().unwrap_or(c))
            .collect();

        folded
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn bare_normalizer() -> Normalizer {
        Normalizer::new(LanguageProfile::default())
    }

    #[test]
    fn empty_input_is_empty_document() {
        let doc = bare_normalizer().normalize("");
        assert!(doc.is_empty());
        assert_eq!(doc.joined(), "");
    }

    #[test]
    fn whitespace_only_input_is_empty_document() {
        assert!(bare_normalizer().normalize("  \t\n  ").is_empty());
    }

    #[test]
    fn lowercases_and_splits_words() {
        let doc = bare_normalizer().normalize("Hello  WORLD");
        assert_eq!(doc.tokens, vec!["hello", "world"]);
    }

    #[test]
    fn punctuation_bearing_tokens_are_dropped() {
        // UAX#29 keeps "don't" as one token; it then fails the ^\w+$ test
        let doc = bare_normalizer().normalize("don't stop");
        assert_eq!(doc.tokens, vec!["stop"]);
    }

    #[test]
    fn stop_words_are_dropped_before_stemming() {
        let profile = LanguageProfile {
            stop_words: HashSet::from(["the".to_string()]),
            suffixes: vec!["s".to_string()],
            ..Default::default()
        };
        let doc = Normalizer::new(profile).normalize("the cats");
        assert_eq!(doc.tokens, vec!["cat"]);
    }

    #[test]
    fn lemma_applies_after_stem() {
        let profile = LanguageProfile {
            suffixes: vec!["ing".to_string()],
            lemmas: HashMap::from([("runn".to_string(), "run".to_string())]),
            ..Default::default()
        };
        let doc = Normalizer::new(profile).normalize("running");
        assert_eq!(doc.tokens, vec!["run"]);
    }

    #[test]
    fn deterministic_for_identical_input() {
        let normalizer = Normalizer::persian();
        let text = "دولت برنامه اقتصادی جدید را اعلام کرد";
        assert_eq!(normalizer.normalize(text), normalizer.normalize(text));
    }

    #[test]
    fn arabic_codepoints_unify_with_persian() {
        let normalizer = Normalizer::persian();
        // Same word typed with Arabic yeh/kaf vs Farsi yeh/keheh
        let arabic = normalizer.normalize("\u{0643}\u{062A}\u{0627}\u{0628}\u{064A}");
        let persian = normalizer.normalize("\u{06A9}\u{062A}\u{0627}\u{0628}\u{06CC}");
        assert_eq!(arabic, persian);
    }

    #[test]
    fn diacritics_are_stripped() {
        let normalizer = Normalizer::persian();
        // "کتاب" with a fatha and a sukun sprinkled in
        let marked = normalizer.normalize("\u{06A9}\u{064E}\u{062A}\u{0627}\u{0628}\u{0652}");
        let plain = normalizer.normalize("کتاب");
        assert_eq!(marked, plain);
    }

    #[test]
    fn eastern_digits_fold_to_ascii() {
        let normalizer = Normalizer::persian();
        let doc = normalizer.normalize("\u{06F1}\u{06F4}\u{06F0}\u{06F3}");
        assert_eq!(doc.tokens, vec!["1403"]);
    }

    #[test]
    fn zwnj_compound_survives_filtering() {
        let normalizer = Normalizer::persian();
        // ZWNJ is Join_Control, word-like under UTS#18 and kept by UAX#29
        let doc = normalizer.normalize("\u{0628}\u{0631}\u{0646}\u{0627}\u{0645}\u{0647}\u{200C}\u{0631}\u{06CC}\u{0632}\u{06CC}");
        assert_eq!(doc.tokens.len(), 1);
    }

    #[test]
    fn persian_stop_words_removed() {
        let normalizer = Normalizer::persian();
        // "از" and "به" are function words; "خبرنگار" is content and
        // matches none of the suffix rules
        let doc = normalizer.normalize("از خبرنگار به");
        assert_eq!(doc.tokens, vec!["خبرنگار"]);
    }

    #[test]
    fn verb_lemmatized_to_infinitive() {
        let normalizer = Normalizer::persian();
        // نوشت loses its ت to the stemmer, then نوش hits the lemma table
        let doc = normalizer.normalize("نوشت");
        assert_eq!(doc.tokens, vec!["نوشتن"]);
    }
}
