use std::collections::HashMap;

/// Sentiment weights for a single lexicon word.
///
/// Polarity is in `[-1, 1]`, subjectivity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordWeight {
    pub polarity: f32,
    pub subjectivity: f32,
}

/// Word-level sentiment lexicon.
///
/// Maps words to polarity/subjectivity weights. Words are matched
/// case-insensitively. `Default` provides the built-in word list.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    words: HashMap<String, WordWeight>,
}

impl SentimentLexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Add a word with the given weights, clamped to their valid ranges
    pub fn insert(&mut self, word: &str, polarity: f32, subjectivity: f32) {
        self.words.insert(
            word.to_lowercase(),
            WordWeight {
                polarity: polarity.clamp(-1.0, 1.0),
                subjectivity: subjectivity.clamp(0.0, 1.0),
            },
        );
    }

    /// Look up the weights for a word
    pub fn get(&self, word: &str) -> Option<WordWeight> {
        self.words.get(&word.to_lowercase()).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut lexicon = SentimentLexicon::new();
        lexicon.insert("Great", 0.6, 0.7);

        let weight = lexicon.get("great").unwrap();
        assert_eq!(weight.polarity, 0.6);
        assert_eq!(weight.subjectivity, 0.7);

        // Case-insensitive on lookup too
        assert!(lexicon.contains("GREAT"));
        assert!(!lexicon.contains("terrible"));
    }

    #[test]
    fn test_insert_clamps_weights() {
        let mut lexicon = SentimentLexicon::new();
        lexicon.insert("over", 2.0, 3.0);

        let weight = lexicon.get("over").unwrap();
        assert_eq!(weight.polarity, 1.0);
        assert_eq!(weight.subjectivity, 1.0);
    }

    #[test]
    fn test_default_lexicon_is_populated() {
        let lexicon = SentimentLexicon::default();
        assert!(!lexicon.is_empty());

        assert!(lexicon.get("love").unwrap().polarity > 0.0);
        assert!(lexicon.get("hate").unwrap().polarity < 0.0);
    }
}
