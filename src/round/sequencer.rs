//! Yomifuda draw sequencing.
//!
//! Each reading phase draws one yomifuda uniformly from the cards still
//! on the tatami. Draw order is therefore a random permutation of the
//! layout revealed one card at a time, and every remaining card is
//! equally likely to be read next regardless of history.

use im::Vector;

use crate::cards::CardId;
use crate::core::GameRng;

/// Draw the next yomifuda from the remaining pool.
///
/// Returns `None` when the pool is exhausted, which is the round
/// completion signal: with no cards left to read, the round is over.
///
/// The pool keeps the tatami's stable order, so the draw depends only on
/// the pool contents and the RNG state.
#[must_use]
pub fn next_yomifuda(remaining: &Vector<CardId>, rng: &mut GameRng) -> Option<CardId> {
    if remaining.is_empty() {
        return None;
    }
    let index = rng.gen_range_usize(0..remaining.len());
    Some(remaining[index])
}
