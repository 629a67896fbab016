//! Session orchestration: the round controller and its observers.

pub mod observer;
pub mod session;

pub use observer::RoundObserver;
pub use session::{Intent, RoundController};
