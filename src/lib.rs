//! # karuta-engine
//!
//! A karuta card-matching game engine: lay out a tatami of face-up
//! cards, read them one at a time, and judge the player's picks.
//!
//! ## How a session flows
//!
//! 1. Build a [`Deck`] from card records and hand it to a
//!    [`RoundController`].
//! 2. `start_round` samples a tatami of 4-20 cards (a [`TatamiSize`]
//!    recipe) and draws the first yomifuda.
//! 3. The player picks cards; `submit_selection` judges each pick.
//!    Correct picks are captured into the mochifuda pile and the next
//!    yomifuda is drawn; wrong picks leave the round untouched.
//! 4. When the last card is captured the round completes. `replay`
//!    restarts with the same recipe; `back_to_top` leaves round play.
//!
//! ## Design
//!
//! - **Deterministic**: All randomness flows through a seeded
//!   [`GameRng`]; per-round RNGs are forked from the session RNG, so a
//!   seed reproduces a whole session.
//! - **Synchronous**: One round at a time, driven entirely by the
//!   caller's thread. Observers are plain callbacks, not channels.
//! - **Persistent Data Structures**: Round snapshots clone in O(1) via
//!   `im-rs`, so observers and UIs can keep cheap copies.
//!
//! ## Glossary
//!
//! - *tatami*: the face-up layout the player picks from
//! - *yomifuda*: the card currently being read out
//! - *mochifuda*: the pile of cards the player has captured
//!
//! ## Modules
//!
//! - `core`: RNG and the error taxonomy
//! - `cards`: Card records, IDs, and the deck
//! - `round`: Tatami selection, yomifuda sequencing, match judging
//! - `controller`: Session orchestration and observers

pub mod core;
pub mod cards;
pub mod round;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{GameRng, KarutaError};

pub use crate::cards::{Card, CardId, Deck, DeckStats};

pub use crate::round::{
    select_tatami, MatchOutcome, Round, RoundEvent, RoundPhase, RoundState, Tatami, TatamiSize,
};

pub use crate::controller::{Intent, RoundController, RoundObserver};
