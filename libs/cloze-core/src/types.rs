//! Core types for the memorization trainer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A stored text passage with its comparison flags and difficulty counter.
///
/// Field names serialize in camelCase; the same record shape is used for
/// the persisted collection and for import/export files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passage {
    pub id: String,
    pub title: String,
    pub text: String,
    pub case_sensitive: bool,
    pub exact_punctuation: bool,
    pub diacritic_sensitive: bool,
    /// Number of words expected to be blanked; 0 means memorized.
    /// Invariant: `0 <= kelvin <= word_count(text)`.
    pub kelvin: usize,
}

impl Passage {
    /// The passage's words in order.
    pub fn words(&self) -> Vec<&str> {
        words(&self.text)
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }

    /// The comparison strictness flags as one value.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            case_sensitive: self.case_sensitive,
            exact_punctuation: self.exact_punctuation,
            diacritic_sensitive: self.diacritic_sensitive,
        }
    }

    /// A passage is memorized once kelvin reaches zero.
    pub fn is_complete(&self) -> bool {
        self.kelvin == 0
    }
}

/// Comparison strictness flags, one independent axis each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchConfig {
    pub case_sensitive: bool,
    pub exact_punctuation: bool,
    pub diacritic_sensitive: bool,
}

/// Split passage text into words: whitespace-delimited, empty tokens dropped.
///
/// This is the source of truth for word indexing; blank positions index
/// into this sequence.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Number of words in passage text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Result of grading one blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlankResult {
    pub entered: String,
    pub is_correct: bool,
}

/// One quiz round: which word positions are hidden, and, once graded,
/// what the user entered at each.
///
/// Attempts are ephemeral: a fresh one is drawn whenever kelvin changes or
/// a round is submitted, and they are never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuizAttempt {
    /// Blanked word indices, strictly ascending, unique.
    pub blank_positions: Vec<usize>,
    /// Per-blank grading results; empty until the attempt is submitted.
    pub results: BTreeMap<usize, BlankResult>,
}

impl QuizAttempt {
    pub fn is_empty(&self) -> bool {
        self.blank_positions.is_empty()
    }

    /// Whether the word at `index` is blanked in this attempt.
    pub fn is_blank(&self, index: usize) -> bool {
        self.blank_positions.binary_search(&index).is_ok()
    }

    /// The next blank after `index` in ascending position order, if any.
    ///
    /// Input-advance affordance: when a blank is finalized, focus moves
    /// here. Has no effect on grading.
    pub fn next_blank_after(&self, index: usize) -> Option<usize> {
        self.blank_positions
            .iter()
            .copied()
            .find(|&position| position > index)
    }
}

/// Aggregate outcome of one submitted attempt.
#[derive(Debug, Clone, Serialize)]
pub struct GradeSummary {
    pub correct_count: usize,
    pub incorrect_count: usize,
    /// `correct_count - incorrect_count`; positive means kelvin dropped.
    pub delta: i64,
    pub new_kelvin: usize,
    /// The graded attempt, with per-blank results populated.
    pub graded: QuizAttempt,
}
