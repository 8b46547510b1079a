//! The page's one-question quiz: "How far does a billion dollars go?"
//!
//! The answer set is closed, so it is modeled as an enum rather than loose
//! strings; unrepresentable keys resolve to a fallback result instead of an
//! error.

/// One of the quiz's offered answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuizAnswer {
    /// "Across China"
    China,
    /// "Around the world"
    World,
    /// "Most of the way to the Moon" (the correct one)
    Moon,
}

impl QuizAnswer {
    /// Parse an answer key as emitted by the page markup.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "china" => Some(QuizAnswer::China),
            "world" => Some(QuizAnswer::World),
            "moon" => Some(QuizAnswer::Moon),
            _ => None,
        }
    }

    /// The markup key for this answer.
    pub fn key(&self) -> &'static str {
        match self {
            QuizAnswer::China => "china",
            QuizAnswer::World => "world",
            QuizAnswer::Moon => "moon",
        }
    }
}

/// Visual tone the host applies to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ResultTone {
    /// Cadet-blue highlight for the right answer.
    Correct,
    /// Goldenrod nudge for everything else.
    Encouragement,
}

/// Outcome of selecting a quiz answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuizResult {
    /// Message shown to the reader.
    pub message: &'static str,
    /// Whether the selected answer was the correct one.
    pub is_correct: bool,
}

impl QuizResult {
    /// Tone the host should render this result with.
    pub fn tone(&self) -> ResultTone {
        if self.is_correct {
            ResultTone::Correct
        } else {
            ResultTone::Encouragement
        }
    }
}

/// Look up the result for a recognized answer, or the fallback for `None`.
pub fn result_for(answer: Option<QuizAnswer>) -> QuizResult {
    match answer {
        Some(QuizAnswer::China) => QuizResult {
            message: "That's a good guess, but 1 billion dollars goes much further!",
            is_correct: false,
        },
        Some(QuizAnswer::World) => QuizResult {
            message: "You're getting warmer, but it's even more than that!",
            is_correct: false,
        },
        Some(QuizAnswer::Moon) => QuizResult {
            message: "Exactly! You could travel 80% of the way to the moon with 1 billion dollars.",
            is_correct: true,
        },
        None => QuizResult {
            message: "Great guess!",
            is_correct: false,
        },
    }
}
