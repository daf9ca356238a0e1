use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores below this are `Easy`.
const DOABLE_FROM: i64 = 30;
/// Scores at or above this are `Hard`.
const HARD_FROM: i64 = 60;

/// Display bucket for a keyword difficulty score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyLabel {
    Easy,
    Doable,
    Hard,
}

impl fmt::Display for DifficultyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DifficultyLabel::Easy => "Easy",
            DifficultyLabel::Doable => "Doable",
            DifficultyLabel::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// Classifies a difficulty score. Range validation is the caller's job.
pub fn difficulty_label(score: i64) -> DifficultyLabel {
    if score < DOABLE_FROM {
        DifficultyLabel::Easy
    } else if score < HARD_FROM {
        DifficultyLabel::Doable
    } else {
        DifficultyLabel::Hard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(difficulty_label(29), DifficultyLabel::Easy);
        assert_eq!(difficulty_label(30), DifficultyLabel::Doable);
        assert_eq!(difficulty_label(59), DifficultyLabel::Doable);
        assert_eq!(difficulty_label(60), DifficultyLabel::Hard);
    }

    #[test]
    fn test_out_of_range_scores() {
        assert_eq!(difficulty_label(-5), DifficultyLabel::Easy);
        assert_eq!(difficulty_label(250), DifficultyLabel::Hard);
    }

    #[test]
    fn test_display() {
        assert_eq!(DifficultyLabel::Doable.to_string(), "Doable");
    }
}
