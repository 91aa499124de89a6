//! Dictionary parsing and word normalization

/// Canonical form of a word for insert and lookup
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Non-empty, trimmed lines of a dictionary file
///
/// Duplicates are kept; they count toward the filter's sizing.
pub fn dictionary_words(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect()
}
