//! Card system: prototype records and the deck they live in.
//!
//! ## Key Types
//!
//! - `CardId`: identifier matching the upstream prototype id
//! - `Card`: immutable showcase entry (name, summary, image, comment)
//! - `Deck`: session-scoped id-to-card mapping, never mutated by a round
//! - `DeckStats`: display-only summary counts

pub mod card;
pub mod deck;

pub use card::{Card, CardId};
pub use deck::{Deck, DeckStats};
