// Output formatting: terminal display of comparison results.

pub mod terminal;

/// How much of each article to show in previews.
pub const PREVIEW_CHARS: usize = 500;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..500]`), this respects UTF-8 character
/// boundaries; Persian text is entirely multi-byte and byte slicing
/// would panic mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
