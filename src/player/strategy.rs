//! Card choice strategies.
//!
//! A strategy answers one question: given the current mana and hand, which
//! card (if any) should be played next? Returning `None` means abstain.
//!
//! Any `Fn(u32, &[Card]) -> Option<Card>` is a strategy, so tests can pass
//! a closure instead of writing a type:
//!
//! ```
//! use rust_tcg::cards::Card;
//! use rust_tcg::player::Strategy;
//!
//! let always_first = |_mana: u32, hand: &[Card]| hand.first().copied();
//! assert_eq!(always_first.next_card(0, &[Card::new(3)]), Some(Card::new(3)));
//! ```

use crate::cards::Card;

/// Chooses the next card to play.
///
/// Implementations only read their inputs. They are expected to pick
/// affordable cards, but the player re-validates every choice.
pub trait Strategy {
    /// Pick a card from `hand` to play with `mana` available.
    fn next_card(&self, mana: u32, hand: &[Card]) -> Option<Card>;
}

impl<F> Strategy for F
where
    F: Fn(u32, &[Card]) -> Option<Card>,
{
    fn next_card(&self, mana: u32, hand: &[Card]) -> Option<Card> {
        self(mana, hand)
    }
}

/// Never plays anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Abstain;

impl Strategy for Abstain {
    fn next_card(&self, _mana: u32, _hand: &[Card]) -> Option<Card> {
        None
    }
}

/// Plays the most expensive affordable card.
///
/// Since damage equals cost, this deals the most damage per card.
#[derive(Clone, Copy, Debug, Default)]
pub struct HighestAffordable;

impl Strategy for HighestAffordable {
    fn next_card(&self, mana: u32, hand: &[Card]) -> Option<Card> {
        hand.iter().copied().filter(|c| c.mana_cost() <= mana).max()
    }
}

/// Plays the cheapest affordable card.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowestAffordable;

impl Strategy for LowestAffordable {
    fn next_card(&self, mana: u32, hand: &[Card]) -> Option<Card> {
        hand.iter().copied().filter(|c| c.mana_cost() <= mana).min()
    }
}
