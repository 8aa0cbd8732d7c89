// ============================================================
// SENTIMENT INFRASTRUCTURE LAYER
// ============================================================
// Lexicon-based sentiment scoring

mod analyzer;
mod default_words;
mod lexicon;

pub use analyzer::SentimentAnalyzer;
pub use lexicon::{SentimentLexicon, WordWeight};
