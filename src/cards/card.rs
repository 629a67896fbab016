//! Card records - immutable prototype entries.
//!
//! A `Card` is one entry from the maker-prototype showcase catalogue. The
//! engine never mutates a card; everything that changes during play
//! (captured or not, current prompt) lives in the round state and refers
//! to cards by `CardId`.
//!
//! Serde field names follow the upstream catalogue JSON (`prototypeNm`,
//! `mainUrl`, `freeComment`), so a fetched record deserializes directly.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within a deck.
///
/// Matches the upstream prototype id, so the presentation layer can link
/// a captured card back to its showcase page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One prototype entry from the showcase catalogue.
///
/// The summary doubles as the yomifuda text: it is read aloud and the
/// player matches it to the card named `name` on the tatami.
///
/// ## Example
///
/// ```
/// use karuta_engine::cards::{Card, CardId};
///
/// let card = Card::new(CardId::new(101), "Smart Planter", "Waters itself when the soil dries out")
///     .with_main_url("https://example.com/images/101.png");
///
/// assert!(card.has_image());
/// assert!(card.free_comment.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier within the deck.
    pub id: CardId,

    /// Prototype name shown on the face-up card.
    #[serde(rename = "prototypeNm")]
    pub name: String,

    /// Short description; the text read aloud as the yomifuda.
    pub summary: String,

    /// Main image URL, when the prototype has one.
    pub main_url: Option<String>,

    /// Free-form builder comment, when present.
    pub free_comment: Option<String>,
}

impl Card {
    /// Create a card with the required fields.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            summary: summary.into(),
            main_url: None,
            free_comment: None,
        }
    }

    /// Set the main image URL (builder pattern).
    #[must_use]
    pub fn with_main_url(mut self, url: impl Into<String>) -> Self {
        self.main_url = Some(url.into());
        self
    }

    /// Set the builder comment (builder pattern).
    #[must_use]
    pub fn with_free_comment(mut self, comment: impl Into<String>) -> Self {
        self.free_comment = Some(comment.into());
        self
    }

    /// Whether the prototype carries an image.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.main_url.is_some()
    }
}
