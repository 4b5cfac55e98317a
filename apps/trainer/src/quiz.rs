//! Quiz service: wires core sessions to the passage store.
//!
//! The core computes, the store persists. Grading happens synchronously;
//! the resulting kelvin write is scheduled and the caller never waits on
//! it, with the writer channel keeping updates for a passage in order.

use std::collections::BTreeMap;

use cloze_core::session::QuizSession;
use cloze_core::types::GradeSummary;
use cloze_core::QuizError;
use rand::Rng;
use thiserror::Error;

use crate::store::{PassageStore, StoreError};

/// Errors from quiz service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Start a session for a stored passage, drawing the first attempt.
pub fn start_session<R: Rng + ?Sized>(
    store: &PassageStore,
    id: &str,
    rng: &mut R,
) -> Result<QuizSession, ServiceError> {
    let passage = store.get(id)?;
    let mut session = QuizSession::new(passage);
    session.start_attempt(rng);
    Ok(session)
}

/// Grade the current attempt, persist the resulting kelvin, and return
/// the round summary.
pub fn submit_attempt<R: Rng + ?Sized>(
    store: &mut PassageStore,
    session: &mut QuizSession,
    entries: &BTreeMap<usize, String>,
    rng: &mut R,
) -> Result<GradeSummary, ServiceError> {
    let summary = session.submit(entries, rng);
    store.set_kelvin(session.passage_id(), summary.new_kelvin)?;
    tracing::debug!(
        passage = session.passage_id(),
        correct = summary.correct_count,
        incorrect = summary.incorrect_count,
        new_kelvin = summary.new_kelvin,
        "attempt graded"
    );
    Ok(summary)
}

/// Re-test at an explicit kelvin: validate, persist, redraw.
pub fn test_at_k<R: Rng + ?Sized>(
    store: &mut PassageStore,
    session: &mut QuizSession,
    target: usize,
    rng: &mut R,
) -> Result<(), ServiceError> {
    // Validation happens in the session so an out-of-range target is
    // rejected before anything is persisted.
    session.set_kelvin(target, rng)?;
    store.set_kelvin(session.passage_id(), target)?;
    Ok(())
}

/// Reset progress: kelvin back to the full word count.
pub fn reset_progress<R: Rng + ?Sized>(
    store: &mut PassageStore,
    session: &mut QuizSession,
    rng: &mut R,
) -> Result<(), ServiceError> {
    let full = session.word_count();
    test_at_k(store, session, full, rng)
}
