use std::sync::LazyLock;

use regex::Regex;

use crate::vocabulary::{self, Category};

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Classify one word.
/// A non-empty run of ASCII digits is a QUANTITY; otherwise the word is looked
/// up verbatim in the vocabulary. Anything else is unrecognized (`None`) and
/// callers drop it without raising an error.
pub fn classify(word: &str) -> Option<Category> {
    if DECIMAL.is_match(word) {
        return Some(Category::Quantity);
    }
    vocabulary::lookup(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_are_quantity() {
        assert_eq!(classify("2"), Some(Category::Quantity));
        assert_eq!(classify("0042"), Some(Category::Quantity));
        assert_eq!(
            classify("99999999999999999999999"),
            Some(Category::Quantity)
        );
    }

    #[test]
    fn test_partial_digits_are_not_quantity() {
        assert_eq!(classify("2x"), None);
        assert_eq!(classify("-3"), None);
        assert_eq!(classify("1.5"), None);
        assert_eq!(classify("+7"), None);
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic three
        assert_eq!(classify("\u{0663}"), None);
    }

    #[test]
    fn test_empty_word_unrecognized() {
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_keywords_pass_through() {
        assert_eq!(classify("alphanumeric"), Some(Category::Rule));
        assert_eq!(classify("using"), Some(Category::Relation));
        assert_eq!(classify("slash"), Some(Category::Symbol));
    }

    #[test]
    fn test_unknown_words_dropped() {
        assert_eq!(classify("a"), None);
        assert_eq!(classify("groups'"), None);
        assert_eq!(classify("seperated"), None);
    }
}
