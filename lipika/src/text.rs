//! Post-recognition text cleaning.
//!
//! Recognition engines emit stray symbols from image noise; everything
//! outside the two supported scripts plus printable ASCII is stripped before
//! the text reaches the caller.

/// Surfaced when cleaning strips a recognition result down to nothing.
pub const NO_TEXT_AFTER_CLEANING: &str = "No text detected. Please try a clearer image.";

/// Devanagari, Sinhala, printable ASCII, and generic whitespace.
fn is_allowed(c: char) -> bool {
    c.is_whitespace()
        || matches!(c,
            '\u{0900}'..='\u{097F}'
            | '\u{0D80}'..='\u{0DFF}'
            | '\u{0020}'..='\u{007E}')
}

/// Drop disallowed characters, collapse whitespace runs to single spaces,
/// and trim the ends.
pub fn strip_to_allowed(raw: &str) -> String {
    let kept: String = raw.chars().filter(|&c| is_allowed(c)).collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean a raw recognition result. An empty result after stripping becomes
/// the [`NO_TEXT_AFTER_CLEANING`] message rather than an empty string.
pub fn clean_recognized_text(raw: &str) -> String {
    let cleaned = strip_to_allowed(raw);
    if cleaned.is_empty() {
        NO_TEXT_AFTER_CLEANING.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_allowed_text_only_normalizes_whitespace() {
        assert_eq!(strip_to_allowed("hello   world"), "hello world");
        assert_eq!(strip_to_allowed("  नमस्ते\n\tworld  "), "नमस्ते world");
    }

    #[test]
    fn test_strips_symbols_and_collapses_spaces() {
        assert_eq!(strip_to_allowed("ab#$%कखग  test"), "ab#$%कखग test");
    }

    #[test]
    fn test_strips_characters_outside_allowed_ranges() {
        // CJK and emoji fall outside every allowed range.
        assert_eq!(strip_to_allowed("漢字 नमस्ते 🙂 ok"), "नमस्ते ok");
    }

    #[test]
    fn test_sinhala_retained() {
        assert_eq!(strip_to_allowed("★ආයුබෝවන්★"), "ආයුබෝවන්");
    }

    #[test]
    fn test_clean_returns_sentinel_for_no_allowed_characters() {
        assert_eq!(clean_recognized_text("★☆✿"), NO_TEXT_AFTER_CLEANING);
        assert_eq!(clean_recognized_text(""), NO_TEXT_AFTER_CLEANING);
        assert_eq!(clean_recognized_text("   \n  "), NO_TEXT_AFTER_CLEANING);
    }

    #[test]
    fn test_clean_passes_through_mixed_script_text() {
        assert_eq!(clean_recognized_text("abकखग  test"), "abकखग test");
    }
}
