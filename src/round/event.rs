//! Round events delivered to observers.
//!
//! Events are emitted synchronously, in the order the underlying state
//! changes happen, and always after the change they describe has been
//! applied. An observer that re-reads the round state sees the
//! post-event world.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Something observable happened to the active round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// The selected card matched the yomifuda and was captured.
    Correct {
        /// The captured card.
        card: CardId,
    },

    /// The selected card did not match the yomifuda; nothing changed.
    Incorrect {
        /// The card the player picked.
        selected: CardId,
    },

    /// The last card was captured; the round is over.
    RoundComplete {
        /// Final score (equals the tatami size).
        score: u32,
        /// Captured cards in capture order.
        mochifuda: Vec<CardId>,
    },

    /// A fresh round was laid out with the same recipe.
    Replay,

    /// The session left round play and returned to the top screen.
    BackToTop,
}
