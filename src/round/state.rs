//! Round state: the observable snapshot of one round in progress.
//!
//! ## RoundState
//!
//! Everything a presentation layer needs to render a round:
//! - The recipe and the full tatami layout (stable order)
//! - Cards still in play vs. captured mochifuda
//! - The yomifuda currently being read
//! - Score and phase
//!
//! Uses `im` persistent data structures, so cloning a snapshot for an
//! observer is O(1) regardless of tatami size.
//!
//! ## Invariant
//!
//! `remaining` and `mochifuda` partition the tatami at all times: every
//! laid-out card is in exactly one of the two, and no other card is in
//! either. Mutation goes through [`RoundState::capture`] to keep it that
//! way.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

use super::recipe::TatamiSize;
use super::tatami::Tatami;

/// Where a round is in its life cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// A yomifuda has been read; waiting for the player to pick a card.
    AwaitingSelection,
    /// Every tatami card has been captured; no further input is accepted.
    Complete,
}

/// Snapshot of one round.
///
/// Cheap to clone; observers receive owned copies and cannot perturb the
/// live round through them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundState {
    recipe: TatamiSize,
    tatami: Tatami,
    remaining: Vector<CardId>,
    yomifuda: Option<CardId>,
    mochifuda: Vector<CardId>,
    score: u32,
    phase: RoundPhase,
}

impl RoundState {
    /// Start-of-round state for a freshly laid tatami.
    ///
    /// All cards begin in `remaining` (in tatami order), the mochifuda
    /// pile is empty and no yomifuda has been drawn yet. An empty tatami
    /// completes immediately.
    pub(crate) fn new(recipe: TatamiSize, tatami: Tatami) -> Self {
        let remaining: Vector<CardId> = tatami.cards().iter().copied().collect();
        let phase = if remaining.is_empty() {
            RoundPhase::Complete
        } else {
            RoundPhase::AwaitingSelection
        };

        Self {
            recipe,
            tatami,
            remaining,
            yomifuda: None,
            mochifuda: Vector::new(),
            score: 0,
            phase,
        }
    }

    /// The recipe this round was laid out with.
    #[must_use]
    pub fn recipe(&self) -> TatamiSize {
        self.recipe
    }

    /// The full layout, including captured cards (stable order).
    #[must_use]
    pub fn tatami(&self) -> &Tatami {
        &self.tatami
    }

    /// Cards still face-up and selectable, in tatami order.
    #[must_use]
    pub fn remaining(&self) -> &Vector<CardId> {
        &self.remaining
    }

    /// The yomifuda currently being read, if the round is live.
    #[must_use]
    pub fn yomifuda(&self) -> Option<CardId> {
        self.yomifuda
    }

    /// Captured cards in capture order.
    #[must_use]
    pub fn mochifuda(&self) -> &Vector<CardId> {
        &self.mochifuda
    }

    /// Correct matches so far. Equals `mochifuda().len()`.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Whether the round has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == RoundPhase::Complete
    }

    /// Whether `id` was laid out this round and has been captured.
    ///
    /// Cards that were never on the tatami report `false`; the
    /// presentation layer uses this to render gaps in the grid.
    #[must_use]
    pub fn is_captured(&self, id: CardId) -> bool {
        self.tatami.contains(id) && !self.remaining.contains(&id)
    }

    /// Set the yomifuda for the next reading phase.
    pub(crate) fn set_yomifuda(&mut self, card: CardId) {
        self.yomifuda = Some(card);
    }

    /// Move `card` from the remaining pool to the mochifuda pile.
    ///
    /// Panics if `card` is not in the remaining pool; callers verify the
    /// match before capturing. Clears the yomifuda so the next reading
    /// phase starts clean.
    pub(crate) fn capture(&mut self, card: CardId) {
        let index = self
            .remaining
            .index_of(&card)
            .unwrap_or_else(|| panic!("capture of {card} which is not in play"));

        self.remaining.remove(index);
        self.mochifuda.push_back(card);
        self.score += 1;
        self.yomifuda = None;
    }

    /// Mark the round complete.
    pub(crate) fn complete(&mut self) {
        self.yomifuda = None;
        self.phase = RoundPhase::Complete;
    }
}
