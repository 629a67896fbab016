//! Error types surfaced by the game engine.
//!
//! Mis-matches are deliberately absent here: selecting the wrong card is a
//! normal gameplay outcome reported through `MatchOutcome::Incorrect`, not
//! an error. Errors cover round-start failures and selections the
//! presentation layer should never have produced.

use crate::cards::CardId;

/// Errors returned by round construction and selection handling.
///
/// Every variant is returned synchronously to the caller; the engine never
/// swallows one. User-visible messaging is the presentation layer's job.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KarutaError {
    /// The requested tatami size exceeds the deck. Fatal to round start;
    /// the round is never silently downsized.
    #[error("cannot lay out {requested} cards from a deck of {available}")]
    InsufficientDeckSize { requested: usize, available: usize },

    /// The selected card is not in the remaining tatami pool: either it
    /// was never laid out, or it has already been captured. Well-formed
    /// presentation input only offers the remaining cards, so this is an
    /// integration error.
    #[error("selection {card} is not part of the remaining tatami")]
    InvalidSelection { card: CardId },

    /// A selection was submitted after the round completed.
    #[error("the round is already complete")]
    RoundOver,

    /// A controller operation that needs a round found none.
    #[error("no round has been started")]
    NoActiveRound,
}
