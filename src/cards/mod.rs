//! Cards and card collections.
//!
//! - `Card`: a mana cost that doubles as damage
//! - `CardBag`: the unordered multiset used for decks and hands

pub mod bag;
pub mod card;

pub use bag::CardBag;
pub use card::Card;
