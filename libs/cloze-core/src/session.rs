//! Quiz session orchestration for one passage.

use std::collections::BTreeMap;

use rand::Rng;

use crate::blanks::select_blanks;
use crate::error::{QuizError, Result};
use crate::kelvin::next_kelvin;
use crate::matching::check_answer;
use crate::types::{BlankResult, GradeSummary, MatchConfig, Passage, QuizAttempt};

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No blanks drawn: not started yet, or the passage is complete.
    Idle,
    /// Blanks drawn, awaiting input.
    Active,
}

/// Drives quiz rounds for a single passage: draws attempts, grades
/// submissions, and moves the difficulty counter between rounds.
///
/// The session works on a snapshot of the passage and holds kelvin
/// locally; persisting the value after each round is the caller's job.
#[derive(Debug, Clone)]
pub struct QuizSession {
    passage_id: String,
    words: Vec<String>,
    config: MatchConfig,
    kelvin: usize,
    state: SessionState,
    attempt: QuizAttempt,
}

impl QuizSession {
    /// Create an idle session over a passage snapshot.
    pub fn new(passage: &Passage) -> Self {
        Self {
            passage_id: passage.id.clone(),
            words: passage.words().iter().map(|word| word.to_string()).collect(),
            config: passage.match_config(),
            kelvin: passage.kelvin,
            state: SessionState::Idle,
            attempt: QuizAttempt::default(),
        }
    }

    pub fn passage_id(&self) -> &str {
        &self.passage_id
    }

    pub fn kelvin(&self) -> usize {
        self.kelvin
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The current attempt. Empty while idle.
    pub fn attempt(&self) -> &QuizAttempt {
        &self.attempt
    }

    /// A passage is memorized once its kelvin reaches zero.
    pub fn is_complete(&self) -> bool {
        self.kelvin == 0
    }

    /// Draw a fresh attempt for the current kelvin.
    ///
    /// With no words or at kelvin zero the attempt is empty and the
    /// session stays idle: the passage is fully disclosed this round.
    pub fn start_attempt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &QuizAttempt {
        let blank_positions = select_blanks(self.words.len(), self.kelvin, rng);
        self.state = if blank_positions.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Active
        };
        self.attempt = QuizAttempt {
            blank_positions,
            results: BTreeMap::new(),
        };
        &self.attempt
    }

    /// Grade the current attempt and advance to the next round.
    ///
    /// Every blank is graded; a missing entry counts as an empty, and
    /// therefore incorrect, answer. Kelvin moves by correct minus
    /// incorrect (clamped), the graded attempt is returned in the
    /// summary, and a fresh attempt is drawn for the new difficulty.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        entries: &BTreeMap<usize, String>,
        rng: &mut R,
    ) -> GradeSummary {
        let mut graded = std::mem::take(&mut self.attempt);
        let mut correct_count = 0;
        let mut incorrect_count = 0;

        for &position in &graded.blank_positions {
            let entered = entries.get(&position).map(String::as_str).unwrap_or("");
            let check = check_answer(entered, &self.words[position], &self.config);
            if check.is_correct {
                correct_count += 1;
            } else {
                incorrect_count += 1;
            }
            graded.results.insert(
                position,
                BlankResult {
                    entered: entered.to_string(),
                    is_correct: check.is_correct,
                },
            );
        }

        let new_kelvin = next_kelvin(self.kelvin, self.words.len(), correct_count, incorrect_count);
        self.kelvin = new_kelvin;
        self.start_attempt(rng);

        GradeSummary {
            correct_count,
            incorrect_count,
            delta: correct_count as i64 - incorrect_count as i64,
            new_kelvin,
            graded,
        }
    }

    /// Jump the difficulty counter to an explicit target and redraw.
    ///
    /// Used by "test at K", manual overrides, and reset-to-full. Targets
    /// above the word count are rejected.
    pub fn set_kelvin<R: Rng + ?Sized>(&mut self, target: usize, rng: &mut R) -> Result<&QuizAttempt> {
        let max = self.words.len();
        if target > max {
            return Err(QuizError::OutOfRange { target, max });
        }
        self.kelvin = target;
        Ok(self.start_attempt(rng))
    }
}
