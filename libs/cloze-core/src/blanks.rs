//! Random blank selection for quiz attempts.

use rand::seq::SliceRandom;
use rand::Rng;

/// Number of blanks one attempt shows for a given difficulty.
///
/// Full difficulty shows a single blank: an all-blank passage would give
/// the user nothing to anchor recall on, so at `kelvin >= word_count` the
/// attempt self-tests one word at a time while the stored kelvin stays
/// untouched.
pub fn blank_count(word_count: usize, kelvin: usize) -> usize {
    if word_count == 0 || kelvin == 0 {
        0
    } else if kelvin >= word_count {
        1
    } else {
        kelvin
    }
}

/// Pick which word positions are blanked for one attempt.
///
/// Uniform sample without replacement (Fisher–Yates shuffle, truncated);
/// the returned indices are unique and ascending. The RNG is an explicit
/// parameter so tests can seed it.
pub fn select_blanks<R: Rng + ?Sized>(
    word_count: usize,
    kelvin: usize,
    rng: &mut R,
) -> Vec<usize> {
    let count = blank_count(word_count, kelvin);
    if count == 0 {
        return Vec::new();
    }

    let mut indices: Vec<usize> = (0..word_count).collect();
    indices.shuffle(rng);
    indices.truncate(count);
    indices.sort_unstable();
    indices
}
