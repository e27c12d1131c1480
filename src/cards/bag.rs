//! Unordered multisets of cards.
//!
//! Decks and hands are bags: order carries no meaning and removal works by
//! value. `CardBag` stores cards in a `SmallVec` and removes with
//! `swap_remove`, so any card equal to the one asked for may be the one
//! that leaves.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use crate::core::rng::RandomSource;

/// An unordered multiset of cards.
///
/// Two bags are equal when they hold the same cards, in any order.
///
/// ## Usage
///
/// ```
/// use rust_tcg::cards::{Card, CardBag};
/// use rust_tcg::core::GameRng;
///
/// let mut bag = CardBag::from_costs([1, 2, 2]);
/// assert_eq!(bag.count_with_cost(2), 2);
///
/// assert!(bag.remove_one(Card::new(2)));
/// assert_eq!(bag.count_with_cost(2), 1);
///
/// let mut rng = GameRng::new(42);
/// let drawn = bag.take_random(&mut rng);
/// assert!(drawn.is_some());
/// assert_eq!(bag.len(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardBag {
    /// Hands hold at most five cards, so most bags stay inline.
    cards: SmallVec<[Card; 8]>,
}

impl CardBag {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bag holding one card per mana cost.
    pub fn from_costs(costs: impl IntoIterator<Item = u32>) -> Self {
        costs.into_iter().map(Card::new).collect()
    }

    /// Number of cards in the bag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Add a card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return a uniformly chosen card.
    ///
    /// Consumes exactly one index from `rng`, or none when the bag is empty.
    pub fn take_random(&mut self, rng: &mut dyn RandomSource) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let index = rng.next_index(self.cards.len());
        Some(self.cards.swap_remove(index))
    }

    /// Remove one card equal to `card`.
    ///
    /// Returns `false` if no such card was present.
    pub fn remove_one(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(index) => {
                self.cards.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Check whether a card of equal cost is present.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Count the cards with the given mana cost.
    #[must_use]
    pub fn count_with_cost(&self, mana_cost: u32) -> usize {
        self.cards.iter().filter(|c| c.mana_cost() == mana_cost).count()
    }

    /// Card counts keyed by mana cost.
    #[must_use]
    pub fn cost_histogram(&self) -> FxHashMap<u32, usize> {
        let mut histogram = FxHashMap::default();
        for card in &self.cards {
            *histogram.entry(card.mana_cost()).or_insert(0) += 1;
        }
        histogram
    }

    /// Total mana cost of all cards.
    #[must_use]
    pub fn total_cost(&self) -> u32 {
        self.cards.iter().map(|c| c.mana_cost()).sum()
    }

    /// Check whether any card costs at most `mana`.
    #[must_use]
    pub fn any_affordable(&self, mana: u32) -> bool {
        self.cards.iter().any(|c| c.mana_cost() <= mana)
    }

    /// View the cards as a slice. The order is unspecified.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over the cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl PartialEq for CardBag {
    fn eq(&self, other: &Self) -> bool {
        if self.cards.len() != other.cards.len() {
            return false;
        }
        let mut left = self.cards.clone();
        let mut right = other.cards.clone();
        left.sort_unstable();
        right.sort_unstable();
        left == right
    }
}

impl Eq for CardBag {}

impl FromIterator<Card> for CardBag {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Card>> for CardBag {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: SmallVec::from_vec(cards),
        }
    }
}

impl Extend<Card> for CardBag {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CardBag {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl std::fmt::Display for CardBag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
        }
        write!(f, "]")
    }
}
