// Built-in word list for the default lexicon.
//
// Weights are (polarity, subjectivity). Strongly emotional words carry high
// subjectivity; mild descriptors sit in the middle of the range.

use super::lexicon::SentimentLexicon;

impl Default for SentimentLexicon {
    fn default() -> Self {
        let mut lexicon = Self::new();

        // Strongly positive
        for word in &[
            "amazing",
            "awesome",
            "excellent",
            "wonderful",
            "fantastic",
            "brilliant",
            "incredible",
            "outstanding",
            "superb",
            "magnificent",
        ] {
            lexicon.insert(word, 0.9, 0.9);
        }
        lexicon.insert("perfect", 1.0, 0.9);
        lexicon.insert("love", 0.6, 0.7);
        lexicon.insert("loved", 0.6, 0.7);
        lexicon.insert("best", 0.8, 0.8);

        // Moderately positive
        for word in &[
            "good", "great", "happy", "nice", "fun", "beautiful", "enjoy", "enjoyed", "like",
            "liked", "cool", "excited", "exciting", "impressive", "helpful", "thanks", "thank",
            "win", "winning", "glad", "pleased",
        ] {
            lexicon.insert(word, 0.5, 0.6);
        }

        // Mildly positive
        for word in &[
            "okay",
            "fine",
            "decent",
            "interesting",
            "hope",
            "hopeful",
            "better",
            "worth",
            "useful",
            "solid",
        ] {
            lexicon.insert(word, 0.25, 0.5);
        }

        // Strongly negative
        for word in &[
            "terrible",
            "horrible",
            "awful",
            "disgusting",
            "disaster",
            "unbearable",
            "pathetic",
            "garbage",
            "trash",
            "nightmare",
        ] {
            lexicon.insert(word, -0.9, 0.9);
        }
        lexicon.insert("hate", -0.8, 0.9);
        lexicon.insert("hated", -0.8, 0.9);
        lexicon.insert("worst", -1.0, 0.9);

        // Moderately negative
        for word in &[
            "bad",
            "sad",
            "angry",
            "annoying",
            "annoyed",
            "disappointed",
            "disappointing",
            "broken",
            "fail",
            "failed",
            "failure",
            "ugly",
            "boring",
            "sucks",
            "stupid",
            "useless",
            "wrong",
            "poor",
        ] {
            lexicon.insert(word, -0.55, 0.7);
        }

        // Mildly negative
        for word in &[
            "slow",
            "meh",
            "tired",
            "confusing",
            "confused",
            "doubt",
            "unfortunately",
            "mediocre",
            "overpriced",
            "problem",
        ] {
            lexicon.insert(word, -0.25, 0.5);
        }

        lexicon
    }
}
