//! Answer matching for quiz blanks.

use crate::normalize::normalize;
use crate::types::MatchConfig;
use serde::Serialize;

/// Result of comparing an entered answer to the expected word.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerCheck {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Normalized entered answer (for display).
    pub entered_normalized: String,
    /// Normalized expected word (for display).
    pub expected_normalized: String,
}

/// Compare an entered answer to the expected word.
///
/// Both sides are normalized identically under the passage's flags and
/// compared for equality. A non-empty source word never normalizes to the
/// empty string's equal, so an empty entry is always incorrect.
pub fn check_answer(entered: &str, expected: &str, config: &MatchConfig) -> AnswerCheck {
    let entered_normalized = normalize(entered, config);
    let expected_normalized = normalize(expected, config);
    AnswerCheck {
        is_correct: entered_normalized == expected_normalized,
        entered_normalized,
        expected_normalized,
    }
}

/// True iff the entered answer matches the expected word.
pub fn is_correct(entered: &str, expected: &str, config: &MatchConfig) -> bool {
    check_answer(entered, expected, config).is_correct
}
