//! Tatami size recipes.
//!
//! The layout sizes a player can pick form a closed set; representing
//! them as an enum makes an invalid size unrepresentable instead of a
//! runtime lookup failure.

use serde::{Deserialize, Serialize};

/// How many cards are laid face-up for one round.
///
/// ## Example
///
/// ```
/// use karuta_engine::round::TatamiSize;
///
/// assert_eq!(TatamiSize::default(), TatamiSize::Eight);
/// assert_eq!(TatamiSize::Twelve.size(), 12);
/// assert_eq!(TatamiSize::from_size(16), Some(TatamiSize::Sixteen));
/// assert_eq!(TatamiSize::from_size(5), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TatamiSize {
    /// 4-card layout, the quickest round.
    Four,
    /// 8-card layout, the default.
    #[default]
    Eight,
    /// 12-card layout.
    Twelve,
    /// 16-card layout.
    Sixteen,
    /// 20-card layout, the full spread.
    Twenty,
}

impl TatamiSize {
    /// Every selectable size, smallest first, for menu presentation.
    pub const ALL: [TatamiSize; 5] = [
        TatamiSize::Four,
        TatamiSize::Eight,
        TatamiSize::Twelve,
        TatamiSize::Sixteen,
        TatamiSize::Twenty,
    ];

    /// The number of cards this recipe lays out.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            TatamiSize::Four => 4,
            TatamiSize::Eight => 8,
            TatamiSize::Twelve => 12,
            TatamiSize::Sixteen => 16,
            TatamiSize::Twenty => 20,
        }
    }

    /// Menu label for this recipe.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TatamiSize::Four => "4 cards",
            TatamiSize::Eight => "8 cards",
            TatamiSize::Twelve => "12 cards",
            TatamiSize::Sixteen => "16 cards",
            TatamiSize::Twenty => "20 cards",
        }
    }

    /// Look up a recipe by its card count.
    #[must_use]
    pub const fn from_size(size: usize) -> Option<Self> {
        match size {
            4 => Some(TatamiSize::Four),
            8 => Some(TatamiSize::Eight),
            12 => Some(TatamiSize::Twelve),
            16 => Some(TatamiSize::Sixteen),
            20 => Some(TatamiSize::Twenty),
            _ => None,
        }
    }
}

impl std::fmt::Display for TatamiSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
