//! Deck: the session-scoped pool of cards a round draws from.
//!
//! The deck is built once from the fetched catalogue and never mutated by
//! gameplay. Rounds sample card ids out of it; the presentation layer
//! materializes ids back into cards for display.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};

/// Immutable mapping from card id to card.
///
/// ## Example
///
/// ```
/// use karuta_engine::cards::{Card, CardId, Deck};
///
/// let deck = Deck::from_cards([
///     Card::new(CardId::new(1), "Plant Bot", "Tends the herb garden"),
///     Card::new(CardId::new(2), "Door Chime", "Plays a melody on entry"),
/// ]);
///
/// assert_eq!(deck.len(), 2);
/// assert!(deck.contains(CardId::new(1)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: FxHashMap<CardId, Card>,
}

impl Deck {
    /// Build a deck from an iterator of cards.
    ///
    /// Ids are unique by construction: a later card with a duplicate id
    /// replaces the earlier entry, mirroring how the catalogue itself
    /// treats re-published prototypes.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().map(|card| (card.id, card)).collect(),
        }
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check whether an id is in the deck.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All card ids in ascending order.
    ///
    /// Sampling works over this sorted listing so that a seeded deal
    /// depends only on deck contents, never on map iteration order.
    #[must_use]
    pub fn ids_sorted(&self) -> Vec<CardId> {
        let mut ids: Vec<CardId> = self.cards.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Materialize ids into cards, preserving the order of `ids`.
    ///
    /// Ids not present in the deck are skipped. The results view uses
    /// this to display the mochifuda pile in capture order.
    #[must_use]
    pub fn cards_by_ids(&self, ids: &[CardId]) -> Vec<&Card> {
        ids.iter().filter_map(|id| self.cards.get(id)).collect()
    }

    /// Iterate over all cards (no particular order).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Display metadata about the deck.
    #[must_use]
    pub fn stats(&self) -> DeckStats {
        DeckStats {
            total: self.cards.len(),
            with_image: self.cards.values().filter(|c| c.has_image()).count(),
            with_comment: self.cards.values().filter(|c| c.free_comment.is_some()).count(),
        }
    }
}

/// Summary counts shown outside the game itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStats {
    /// Total cards in the deck.
    pub total: usize,
    /// Cards with a main image.
    pub with_image: usize,
    /// Cards with a builder comment.
    pub with_comment: usize,
}
