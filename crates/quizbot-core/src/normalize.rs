//! Answer canonicalization.

/// Canonicalize free text for answer comparison.
///
/// Lowercases, trims, then drops every character that is not an ASCII letter
/// or digit, so `"  O( LOG n ) "` becomes `"ologn"`. Never fails.
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Whether two answers are equal after normalization.
pub fn answers_match(submitted: &str, canonical: &str) -> bool {
    normalize(submitted) == normalize(canonical)
}
