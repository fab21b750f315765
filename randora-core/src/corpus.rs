//! Embedded word list used by the string generators.

use std::sync::OnceLock;

const WORDS_TXT: &str = include_str!("words.txt");

static WORDS: OnceLock<Vec<&'static str>> = OnceLock::new();

/// All words in the embedded list, in file order.
///
/// Blank lines and surrounding whitespace are ignored.
pub fn words() -> &'static [&'static str] {
    WORDS.get_or_init(|| {
        WORDS_TXT
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_is_not_empty() {
        assert!(words().len() > 100);
    }

    #[test]
    fn words_are_lowercase_single_tokens() {
        for word in words() {
            assert!(!word.contains(char::is_whitespace), "{word:?}");
            assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{word:?}");
        }
    }

    #[test]
    fn word_list_has_no_duplicates() {
        let mut sorted = words().to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), words().len());
    }
}
