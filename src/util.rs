// src/util.rs - Shared utility functions

use std::borrow::Cow;

/// Shorten user text for log lines (UTF-8 safe).
///
/// Keeps at most `max_chars` characters and marks the cut with "...".
pub fn truncate_for_log(s: &str, max_chars: usize) -> Cow<'_, str> {
    match s.char_indices().nth(max_chars) {
        None => Cow::Borrowed(s),
        Some((cut, _)) => Cow::Owned(format!("{}...", &s[..cut])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_borrowed() {
        assert!(matches!(truncate_for_log("Paris", 10), Cow::Borrowed("Paris")));
    }

    #[test]
    fn test_exact_length_untouched() {
        assert_eq!(truncate_for_log("Paris", 5), "Paris");
    }

    #[test]
    fn test_long_text_marked() {
        assert_eq!(truncate_for_log("Paris, France", 5), "Paris...");
    }

    #[test]
    fn test_multibyte_counts_chars() {
        assert_eq!(truncate_for_log("Москва", 3), "Мос...");
    }

    #[test]
    fn test_zero_max() {
        assert_eq!(truncate_for_log("hello", 0), "...");
        assert_eq!(truncate_for_log("", 0), "");
    }
}
