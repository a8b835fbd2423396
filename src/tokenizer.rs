//! Raw name normalization.
//!
//! Turns a raw full-name string into an ordered sequence of clean name
//! parts. Splitting happens on whitespace; each word is stripped down to its
//! ASCII letters and lowercased, and words with no letters left are dropped.
//! Tokenization never fails: a name with no recoverable alphabetic content
//! simply yields no tokens, and the caller skips the row.

/// Ordered sequence of normalized tokens derived from one raw name.
/// Every token is non-empty and contains only lowercase ASCII letters.
pub type TokenSequence = Vec<String>;

/// Normalizes a raw full-name string into a token sequence.
///
/// Relative word order is preserved. Titles, punctuation, digits and
/// diacritics are stripped, so `"Dr. José O'Brien-Smith"` becomes
/// `["dr", "jos", "obriensmith"]`.
pub fn tokenize(raw: &str) -> TokenSequence {
    raw.split_whitespace()
        .filter_map(|word| {
            let cleaned: String = word
                .chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_lowercase())
                .collect();
            (!cleaned.is_empty()).then_some(cleaned)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_name() {
        assert_eq!(tokenize("John Smith"), vec!["john", "smith"]);
    }

    #[test]
    fn test_tokenize_lowercases_and_collapses_whitespace() {
        assert_eq!(
            tokenize("  JOHN \t  SMITH  "),
            vec!["john".to_string(), "smith".to_string()]
        );
    }

    #[test]
    fn test_tokenize_strips_punctuation_and_digits() {
        assert_eq!(
            tokenize("O'Brien, James 3rd"),
            vec!["obrien", "james", "rd"]
        );
    }

    #[test]
    fn test_tokenize_strips_non_ascii_letters() {
        // Diacritics are not transliterated, only removed
        assert_eq!(tokenize("José Muñoz"), vec!["jos", "muoz"]);
    }

    #[test]
    fn test_tokenize_preserves_word_order() {
        assert_eq!(
            tokenize("Dilanka Kaushal Hewage"),
            vec!["dilanka", "kaushal", "hewage"]
        );
    }

    #[test]
    fn test_tokenize_drops_words_with_no_letters() {
        assert_eq!(tokenize("John - 123 Smith"), vec!["john", "smith"]);
    }

    #[test]
    fn test_tokenize_empty_and_whitespace_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("123 --- !!!").is_empty());
    }
}
