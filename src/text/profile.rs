// LanguageProfile: the linguistic resource set the normalizer depends on.
//
// Stop words, character unification, stemmer rules, and the lemma table are
// data, not code: the normalizer takes a profile at construction and the
// pipeline itself stays language-agnostic. The Persian profile ships as the
// default; tests build small synthetic profiles directly.

use std::collections::{HashMap, HashSet};

use stop_words::{get, LANGUAGE};

/// Linguistic resources for one language.
#[derive(Debug, Clone, Default)]
pub struct LanguageProfile {
    /// Tokens excluded from comparison entirely
    pub stop_words: HashSet<String>,
    /// Character-level unification (applied after NFKC)
    pub char_map: HashMap<char, char>,
    /// Characters removed outright (diacritics, tatweel)
    pub strip_chars: HashSet<char>,
    /// Stemmer suffix rules, applied in order, each at most once
    pub suffixes: Vec<String>,
    /// Stem → canonical lemma; stems without an entry pass through
    pub lemmas: HashMap<String, String>,
}

impl LanguageProfile {
    /// The Persian profile.
    ///
    /// Character unification folds the Arabic codepoints that Persian news
    /// sites mix in (ي/ی, ك/ک, …) so lexically identical words compare
    /// equal regardless of which keyboard layout produced them. Suffix
    /// rules follow classic Persian light stemming: plural and comparative
    /// endings first, then possessive clitics and the ezafe marker.
    pub fn persian() -> Self {
        let stop_words: HashSet<String> = get(LANGUAGE::Persian).into_iter().collect();

        let mut char_map: HashMap<char, char> = [
            ('\u{064A}', '\u{06CC}'), // Arabic yeh → Farsi yeh
            ('\u{0649}', '\u{06CC}'), // alef maksura → Farsi yeh
            ('\u{0643}', '\u{06A9}'), // Arabic kaf → keheh
            ('\u{0629}', '\u{0647}'), // teh marbuta → heh
            ('\u{0623}', '\u{0627}'), // alef with hamza above → alef
            ('\u{0625}', '\u{0627}'), // alef with hamza below → alef
            ('\u{0671}', '\u{0627}'), // alef wasla → alef
            ('\u{06C0}', '\u{0647}'), // heh with yeh above → heh
        ]
        .into_iter()
        .collect();

        // Both Arabic-Indic digit rows fold to ASCII so numbers compare
        // equal across the two sources' typesetting conventions.
        for i in 0..10u32 {
            let ascii = char::from_digit(i, 10).unwrap_or('0');
            if let Some(c) = char::from_u32(0x0660 + i) {
                char_map.insert(c, ascii);
            }
            if let Some(c) = char::from_u32(0x06F0 + i) {
                char_map.insert(c, ascii);
            }
        }

        // Harakat and tanwin (U+064B–U+0655), superscript alef, tatweel.
        let mut strip_chars: HashSet<char> = (0x064B..=0x0655u32)
            .filter_map(char::from_u32)
            .collect();
        strip_chars.insert('\u{0670}');
        strip_chars.insert('\u{0640}');

        let suffixes = [
            "\u{0627}\u{062A}",                     // ات
            "\u{0627}\u{0646}",                     // ان
            "\u{062A}\u{0631}\u{06CC}\u{0646}",     // ترین
            "\u{062A}\u{0631}",                     // تر
            "\u{0645}",                             // م
            "\u{062A}",                             // ت
            "\u{0634}",                             // ش
            "\u{06CC}\u{06CC}",                     // یی
            "\u{06CC}",                             // ی
            "\u{0647}\u{0627}",                     // ها
            "\u{200C}\u{0627}\u{06CC}",             // ZWNJ + ای
            "\u{200C}",                             // bare ZWNJ
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        // High-frequency verb stems → infinitive. Lookup happens after
        // suffix stripping, so keys are the post-stem forms the rules
        // actually produce (e.g. گفت loses its ت and arrives as گف).
        let lemmas: HashMap<String, String> = [
            ("کرد", "کردن"),
            ("کن", "کردن"),
            ("شد", "شدن"),
            ("شو", "شدن"),
            ("بود", "بودن"),
            ("باش", "بودن"),
            ("گف", "گفتن"),
            ("گو", "گفتن"),
            ("رف", "رفتن"),
            ("رو", "رفتن"),
            ("داد", "دادن"),
            ("ده", "دادن"),
            ("دید", "دیدن"),
            ("بین", "دیدن"),
            ("آمد", "آمدن"),
            ("آی", "آمدن"),
            ("خواس", "خواستن"),
            ("خواه", "خواستن"),
            ("توانس", "توانستن"),
            ("توان", "توانستن"),
            ("گرف", "گرفتن"),
            ("گیر", "گرفتن"),
            ("زد", "زدن"),
            ("زن", "زدن"),
            ("رسید", "رسیدن"),
            ("رس", "رسیدن"),
            ("داش", "داشتن"),
            ("دار", "داشتن"),
            ("نوش", "نوشتن"),
            ("نویس", "نوشتن"),
            ("خواند", "خواندن"),
            ("خوان", "خواندن"),
            ("یاف", "یافتن"),
            ("یاب", "یافتن"),
            ("ساخ", "ساختن"),
            ("ساز", "ساختن"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            stop_words,
            char_map,
            strip_chars,
            suffixes,
            lemmas,
        }
    }
}
