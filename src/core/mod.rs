//! Core engine plumbing: deterministic RNG and the error taxonomy.
//!
//! Everything game-shaped (cards, tatami, rounds) builds on top of this
//! module without it knowing about them.

pub mod error;
pub mod rng;

pub use error::KarutaError;
pub use rng::GameRng;
