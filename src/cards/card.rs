//! The card value type.
//!
//! A card is nothing but its mana cost, which is also the damage it deals.
//! Cards of equal cost are interchangeable.

use serde::{Deserialize, Serialize};

/// A card with a mana cost.
///
/// Equality, ordering and hashing all go through the cost.
///
/// ```
/// use rust_tcg::cards::Card;
///
/// let card = Card::new(4);
/// assert_eq!(card.mana_cost(), 4);
/// assert_eq!(card.damage(), 4);
/// assert!(Card::new(2) < card);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(u32);

impl Card {
    /// Create a card with the given mana cost.
    #[must_use]
    pub const fn new(mana_cost: u32) -> Self {
        Self(mana_cost)
    }

    /// Mana needed to play this card.
    #[must_use]
    pub const fn mana_cost(self) -> u32 {
        self.0
    }

    /// Damage dealt to the opponent when played. Always equals the cost.
    #[must_use]
    pub const fn damage(self) -> u32 {
        self.0
    }

    /// Build a list of cards from mana costs.
    #[must_use]
    pub fn list(mana_costs: &[u32]) -> Vec<Card> {
        mana_costs.iter().copied().map(Card::new).collect()
    }
}

impl From<u32> for Card {
    fn from(mana_cost: u32) -> Self {
        Self::new(mana_cost)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
