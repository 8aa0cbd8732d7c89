use serde::{Deserialize, Serialize};

/// Sentiment produced by a single analyzer invocation.
///
/// Polarity is in `[-1.0, 1.0]` (negative = unfavorable, positive =
/// favorable). Subjectivity is in `[0.0, 1.0]` (0 = factual, 1 = opinion).
/// Both ranges are enforced on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub polarity: f32,
    pub subjectivity: f32,
}

impl Sentiment {
    pub fn new(polarity: f32, subjectivity: f32) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    /// Score for text with no sentiment-bearing content.
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.polarity > 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.polarity < 0.0
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_ranges() {
        let s = Sentiment::new(1.7, 1.2);
        assert_eq!(s.polarity, 1.0);
        assert_eq!(s.subjectivity, 1.0);

        let s = Sentiment::new(-2.0, -0.5);
        assert_eq!(s.polarity, -1.0);
        assert_eq!(s.subjectivity, 0.0);
    }

    #[test]
    fn test_neutral() {
        let s = Sentiment::neutral();
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, 0.0);
        assert!(!s.is_positive());
        assert!(!s.is_negative());
    }

    #[test]
    fn test_sign_helpers() {
        assert!(Sentiment::new(0.4, 0.5).is_positive());
        assert!(Sentiment::new(-0.4, 0.5).is_negative());
    }
}
