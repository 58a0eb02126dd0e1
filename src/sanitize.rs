//! Pure normalizers for the free-text input fields.
//!
//! Each function maps raw user text to its canonical form. All of them are
//! idempotent: feeding a normalized value back in returns it unchanged.

use crate::pattern::Pattern;
use std::collections::BTreeSet;

/// Lowercase, keep a-z only, deduplicate and sort. `max_len` caps the
/// number of letters kept.
pub fn normalize_letters(raw: &str, max_len: Option<usize>) -> String {
    let letters: BTreeSet<char> = raw
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_lowercase)
        .collect();
    let cap = max_len.unwrap_or(letters.len());
    letters.into_iter().take(cap).collect()
}

/// Known letters never outnumber the positions of the word.
pub fn sanitize_known(raw: &str, length: usize) -> String {
    normalize_letters(raw, Some(length))
}

pub fn sanitize_dead(raw: &str) -> String {
    normalize_letters(raw, None)
}

/// Lowercase and keep only the characters the pattern grammar uses.
pub fn sanitize_pattern_text(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase() || matches!(c, '?' | '*' | '(' | ')'))
        .collect()
}

/// Remove from `subject` every letter that appears in `authority`.
pub fn strip_letters(subject: &str, authority: &str) -> String {
    subject.chars().filter(|c| !authority.contains(*c)).collect()
}

/// Clear literal positions spelled with any of `letters` to wildcards.
///
/// Every position stays in place, so the pattern keeps lining up with the
/// word length. Exclusion groups are left alone and can never be emptied.
pub fn strip_pattern_letters(pattern: &Pattern, letters: &str) -> Pattern {
    let mut stripped = pattern.clone();
    stripped.blank_literals(letters);
    stripped
}
