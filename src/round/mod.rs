//! Round play: tatami selection, yomifuda sequencing and match judging.

pub mod engine;
pub mod event;
pub mod recipe;
pub mod sequencer;
pub mod state;
pub mod tatami;

pub use engine::{MatchOutcome, Round};
pub use event::RoundEvent;
pub use recipe::TatamiSize;
pub use sequencer::next_yomifuda;
pub use state::{RoundPhase, RoundState};
pub use tatami::{select_tatami, Tatami, MAX_TATAMI};
