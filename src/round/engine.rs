//! The match engine: one round's reading/selection loop.
//!
//! ## Life cycle
//!
//! A round starts with a freshly laid tatami and its own forked RNG. The
//! engine draws a yomifuda, waits for a selection, and on a correct
//! match captures the card and draws the next yomifuda. When the pool
//! runs dry the round completes. There is no failure exit: a round ends
//! only when every card has been captured.
//!
//! ## Selection rules
//!
//! - Correct match: card is captured, score increments, play advances.
//! - Wrong card (but still in play): rejected with no state change; the
//!   same yomifuda stays active and the player may try again.
//! - Card not in play (captured already, or never laid out): refused as
//!   [`KarutaError::InvalidSelection`]. Double-clicking a card that was
//!   just captured lands here rather than scoring twice.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cards::CardId;
use crate::core::{GameRng, KarutaError};

use super::recipe::TatamiSize;
use super::sequencer::next_yomifuda;
use super::state::RoundState;
use super::tatami::Tatami;

/// What a selection did to the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// The card matched the yomifuda and was captured.
    Correct {
        /// The captured card.
        card: CardId,
        /// The next yomifuda, or `None` when the capture ended the round.
        next: Option<CardId>,
    },
    /// The card is in play but does not match the yomifuda.
    Incorrect {
        /// The card the player picked.
        selected: CardId,
    },
}

/// A single round in progress: state machine plus its private RNG.
///
/// Deliberately not `Clone`: duplicating a live round would duplicate
/// its RNG stream. Use [`Round::snapshot`] for an observable copy.
#[derive(Debug)]
pub struct Round {
    state: RoundState,
    rng: GameRng,
}

impl Round {
    /// Begin a round over `tatami`, drawing the first yomifuda.
    ///
    /// Takes ownership of a forked RNG so the round's draw sequence is
    /// insulated from everything else the session does.
    #[must_use]
    pub fn start(recipe: TatamiSize, tatami: Tatami, mut rng: GameRng) -> Self {
        let mut state = RoundState::new(recipe, tatami);
        if let Some(card) = next_yomifuda(state.remaining(), &mut rng) {
            state.set_yomifuda(card);
        }
        Self { state, rng }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Owned snapshot of the current state (O(1) clone).
    #[must_use]
    pub fn snapshot(&self) -> RoundState {
        self.state.clone()
    }

    /// Whether the round has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Correct matches so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    /// Judge a selection against the active yomifuda.
    ///
    /// Correct matches capture the card and advance play; incorrect ones
    /// leave the round untouched so the player can try again. Selections
    /// of cards not in the remaining pool, or after the round completed,
    /// are errors rather than outcomes.
    pub fn submit_selection(&mut self, selected: CardId) -> Result<MatchOutcome, KarutaError> {
        if self.state.is_complete() {
            warn!(%selected, "selection after round completion");
            return Err(KarutaError::RoundOver);
        }

        if !self.state.remaining().contains(&selected) {
            warn!(%selected, "selection outside the remaining tatami");
            return Err(KarutaError::InvalidSelection { card: selected });
        }

        let yomifuda = self
            .state
            .yomifuda()
            .expect("awaiting selection requires an active yomifuda");

        if selected != yomifuda {
            return Ok(MatchOutcome::Incorrect { selected });
        }

        self.state.capture(selected);

        match next_yomifuda(self.state.remaining(), &mut self.rng) {
            Some(card) => {
                self.state.set_yomifuda(card);
                Ok(MatchOutcome::Correct { card: selected, next: Some(card) })
            }
            None => {
                self.state.complete();
                Ok(MatchOutcome::Correct { card: selected, next: None })
            }
        }
    }
}
