//! Difficulty levels: prompt labels, pass thresholds and hint bands.

/// Label used in the topic/question prompt. Levels without a label read as "easy".
#[must_use]
pub const fn label(level: u32) -> &'static str {
    match level {
        2 => "medium",
        3 => "hard",
        _ => "easy",
    }
}

/// Similarity an answer must strictly exceed to pass at `level`.
/// Levels above 3 keep the level-3 threshold.
#[must_use]
pub const fn pass_threshold(level: u32) -> f64 {
    match level {
        0 | 1 => 0.20,
        2 => 0.50,
        _ => 0.70,
    }
}

#[must_use]
pub fn passes(similarity: f64, level: u32) -> bool {
    similarity > pass_threshold(level)
}

/// Feedback band for a failed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    VeryClose,
    GoodEffort,
    RevisitTopic,
}

impl Hint {
    #[must_use]
    pub fn for_similarity(similarity: f64) -> Self {
        if similarity > 0.7 {
            Self::VeryClose
        } else if similarity > 0.4 {
            Self::GoodEffort
        } else {
            Self::RevisitTopic
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::VeryClose => "You're very close! Consider refining your answer.",
            Self::GoodEffort => "Good effort! Try to include more relevant details.",
            Self::RevisitTopic => "It seems like your answer could be more aligned with the question. Revisit the topic for better understanding.",
        }
    }
}
