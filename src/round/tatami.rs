//! Tatami: the face-up layout for one round, and its selection.
//!
//! The tatami's card order is assigned once at selection time and never
//! reshuffled; the presentation layer relies on stable positions so the
//! player can memorize the grid. Captured cards leave gaps rather than
//! compacting the layout.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, Deck};
use crate::core::{GameRng, KarutaError};

use super::recipe::TatamiSize;

/// The largest layout a recipe can produce.
pub const MAX_TATAMI: usize = 20;

/// The face-up cards of one round, in stable presentation order.
///
/// Holds at most [`MAX_TATAMI`] distinct ids inline; a valid tatami never
/// heap-allocates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tatami {
    ids: SmallVec<[CardId; MAX_TATAMI]>,
}

impl Tatami {
    /// Build a tatami from an ordered sequence of distinct ids.
    ///
    /// Panics if the sequence contains a duplicate id; layouts always
    /// come from distinct sampling, so a duplicate is a programming
    /// error.
    #[must_use]
    pub fn new(ids: impl IntoIterator<Item = CardId>) -> Self {
        let ids: SmallVec<[CardId; MAX_TATAMI]> = ids.into_iter().collect();

        for (i, id) in ids.iter().enumerate() {
            if ids[..i].contains(id) {
                panic!("duplicate {id} in tatami layout");
            }
        }

        Self { ids }
    }

    /// Number of cards laid out.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the layout is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` was laid out this round (captured or not).
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.ids.contains(&id)
    }

    /// The layout in stable presentation order.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.ids
    }
}

/// Lay out a fresh tatami: a uniform random sample of `recipe.size()`
/// distinct ids from the deck.
///
/// Deck keys are sorted before sampling, so the result depends only on
/// the deck contents, the recipe and the RNG state - never on map
/// iteration order. The sampled order becomes the round's presentation
/// order.
///
/// Returns [`KarutaError::InsufficientDeckSize`] when the deck holds
/// fewer cards than the recipe asks for; the layout is never silently
/// downsized.
pub fn select_tatami(
    deck: &Deck,
    recipe: TatamiSize,
    rng: &mut GameRng,
) -> Result<Tatami, KarutaError> {
    let requested = recipe.size();
    let available = deck.len();

    if requested > available {
        return Err(KarutaError::InsufficientDeckSize { requested, available });
    }

    let pool = deck.ids_sorted();
    Ok(Tatami::new(rng.sample_distinct(&pool, requested)))
}
