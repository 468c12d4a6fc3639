//! Importance keyword recognition

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

// Longer phrases listed first so "high importance" strips as one phrase
static IMPORTANCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(high importance|high priority|important|critical|urgent|asap)\b").unwrap()
});

/// Find the first importance keyword in the text, returning its byte range
pub fn recognize(text: &str) -> Option<Range<usize>> {
    IMPORTANCE_RE.find(text).map(|m| m.range())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert!(recognize("this is urgent").is_some());
        assert!(recognize("Submit taxes ASAP").is_some());
        assert!(recognize("critical fix for prod").is_some());
        assert!(recognize("an important call").is_some());
    }

    #[test]
    fn test_phrase_matches_whole() {
        let text = "Finish slides, high importance";
        let span = recognize(text).unwrap();
        assert_eq!(&text[span], "high importance");
    }

    #[test]
    fn test_case_insensitive() {
        assert!(recognize("URGENT: server down").is_some());
    }

    #[test]
    fn test_no_keyword() {
        assert!(recognize("Buy milk").is_none());
        // substring of a longer word does not count
        assert!(recognize("urgently needed").is_none());
    }
}
