use crate::domain::sentiment::Sentiment;

use super::lexicon::SentimentLexicon;

/// Words that flip the polarity of the lexicon hit that follows them.
const NEGATORS: &[&str] = &[
    "not", "never", "no", "nothing", "cannot", "cant", "can't", "dont", "don't", "doesnt",
    "doesn't", "didnt", "didn't", "isnt", "isn't", "wasnt", "wasn't", "wont", "won't", "wouldnt",
    "wouldn't", "aint", "ain't",
];

/// Words that amplify the polarity of the lexicon hit that follows them.
const INTENSIFIERS: &[&str] = &["very", "really", "extremely", "so", "totally", "absolutely"];

/// A negated word contributes at half strength with the opposite sign
/// ("not good" is mildly negative, not the mirror image of "good").
const NEGATION_FACTOR: f32 = -0.5;

const INTENSIFIER_BOOST: f32 = 1.3;

/// Lexicon-based sentiment scorer.
///
/// Pure and deterministic: the same text always yields the same score, with
/// polarity in `[-1, 1]` and subjectivity in `[0, 1]`. Text with no lexicon
/// hits scores neutral (0.0, 0.0).
pub struct SentimentAnalyzer {
    lexicon: SentimentLexicon,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: SentimentLexicon::default(),
        }
    }

    pub fn with_lexicon(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    /// Score a text: average the weights of all lexicon hits, applying
    /// negation and intensifier modifiers from the preceding tokens.
    pub fn analyze(&self, text: &str) -> Sentiment {
        let tokens = tokenize(text);

        let mut polarity_sum = 0.0f32;
        let mut subjectivity_sum = 0.0f32;
        let mut hits = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(weight) = self.lexicon.get(token) else {
                continue;
            };

            let mut polarity = weight.polarity;

            // Modifiers directly precede the hit; an intensifier may itself
            // be preceded by a negator ("not very good").
            let mut modifier_slot = i.checked_sub(1);
            if let Some(j) = modifier_slot {
                if INTENSIFIERS.contains(&tokens[j].as_str()) {
                    polarity *= INTENSIFIER_BOOST;
                    modifier_slot = j.checked_sub(1);
                }
            }
            if let Some(j) = modifier_slot {
                if NEGATORS.contains(&tokens[j].as_str()) {
                    polarity *= NEGATION_FACTOR;
                }
            }

            polarity_sum += polarity;
            subjectivity_sum += weight.subjectivity;
            hits += 1;
        }

        if hits == 0 {
            return Sentiment::neutral();
        }

        Sentiment::new(polarity_sum / hits as f32, subjectivity_sum / hits as f32)
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase word tokens, stripped of surrounding punctuation. Apostrophes
/// are kept so contractions ("don't") survive as single tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}
