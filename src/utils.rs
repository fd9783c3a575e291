//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use tscat::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Reading"));
/// assert!(contains_alphabetic("よみ"));
/// assert!(contains_alphabetic("User Dictionary 1"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("..."));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// `"1 file"`, `"2 files"`.
pub fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
