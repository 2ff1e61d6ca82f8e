//! Passage tokenization.
//!
//! A passage is split on the single space character and nothing else.
//! Words are not trimmed or normalized, but a plain split on `' '` would
//! yield empty words for `"a  b"` or for leading and trailing spaces.
//! Those empty fragments are dropped instead, so every `Word` has
//! non-empty text and indices stay contiguous. An empty word could only
//! ever be matched by submitting an empty input.

use strum_macros::Display;

/// Scoring state of a single word in the passage
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum WordResult {
    Untested,
    Correct,
    Incorrect,
}

/// One token from the passage plus its scoring state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub index: usize,
    pub text: String,
    pub result: WordResult,
}

impl Word {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            result: WordResult::Untested,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.result != WordResult::Untested
    }
}

/// Split a passage into words on single spaces.
///
/// Anything that is not a space stays part of the token, so punctuation,
/// tabs and newlines are typed as written. Empty fragments from repeated
/// spaces are skipped to keep every word non-empty.
pub fn tokenize(text: &str) -> Vec<Word> {
    text.split(' ')
        .filter(|fragment| !fragment.is_empty())
        .enumerate()
        .map(|(index, fragment)| Word::new(index, fragment))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_passage() {
        let words = tokenize("a b c");

        assert_eq!(words.len(), 3);
        assert_eq!(
            words.iter().map(|w| w.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(
            words.iter().map(|w| w.text.as_str()).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert!(words.iter().all(|w| w.result == WordResult::Untested));
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_only_spaces() {
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_punctuation_and_other_whitespace() {
        let words = tokenize("Hello, world.\tnext\nline");

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text, "Hello,");
        assert_eq!(words[1].text, "world.\tnext\nline");
    }

    #[test]
    fn test_tokenize_repeated_spaces_keep_indices_contiguous() {
        let words = tokenize(" lorem  ipsum ");

        assert_eq!(words.len(), 2);
        assert_eq!(words[0], Word::new(0, "lorem"));
        assert_eq!(words[1], Word::new(1, "ipsum"));
    }

    #[test]
    fn test_tokenize_double_space_yields_no_empty_word() {
        let words = tokenize("a  b");

        assert_eq!(words, vec![Word::new(0, "a"), Word::new(1, "b")]);
        assert!(words.iter().all(|w| !w.text.is_empty()));
    }

    #[test]
    fn test_word_is_scored() {
        let mut word = Word::new(0, "cat");
        assert!(!word.is_scored());

        word.result = WordResult::Incorrect;
        assert!(word.is_scored());
    }

    #[test]
    fn test_word_result_display() {
        assert_eq!(WordResult::Untested.to_string(), "Untested");
        assert_eq!(WordResult::Correct.to_string(), "Correct");
        assert_eq!(WordResult::Incorrect.to_string(), "Incorrect");
    }
}
