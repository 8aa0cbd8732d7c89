use serde::{Deserialize, Serialize};

use super::sentiment::Sentiment;

/// One processed row, ready for insertion. Created during the run and not
/// retained beyond the insert call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredTweet {
    pub text: String,
    pub polarity: f32,
    pub subjectivity: f32,
}

impl ScoredTweet {
    pub fn new(text: String, sentiment: Sentiment) -> Self {
        Self {
            text,
            polarity: sentiment.polarity,
            subjectivity: sentiment.subjectivity,
        }
    }
}
