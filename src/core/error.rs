//! Errors raised by card play.
//!
//! `IllegalMove` is the only failure in the turn economy. It marks a
//! contract violation by the caller (playing an unaffordable card, or
//! forcing a play when the strategy abstains), so it is never retried.
//! A rejected move leaves both players untouched.

use thiserror::Error;

use crate::cards::{Card, CardBag};

/// A play the rules do not allow.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    /// The player cannot pay for the card.
    #[error("Insufficient Mana ({mana}) to pay for card {card}.")]
    InsufficientMana { mana: u32, card: Card },

    /// The strategy found nothing to play.
    #[error("No card can be played from hand {hand} with ({mana}) mana.")]
    NoPlayableCard { mana: u32, hand: CardBag },
}

/// Result of a move that may be rejected.
pub type MoveResult<T = ()> = Result<T, IllegalMove>;
