//! # rust-tcg
//!
//! Turn economy of a two-player trading card game.
//!
//! Players draw cards from a randomized deck, gain one mana slot per turn
//! and spend mana to play cards. A card's mana cost is also the damage it
//! deals to the opponent.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: Draws go through a `RandomSource`. Seed a
//!    `GameRng` for reproducible games or script indices in tests.
//!
//! 2. **Pluggable Decisions**: Which card to play is a `Strategy`, and any
//!    closure `(mana, hand) -> Option<Card>` qualifies.
//!
//! 3. **No Hidden Sharing**: Playing a card borrows the opponent mutably for
//!    that call only. Sequencing whole turns and games is left to the caller.
//!
//! ## Example
//!
//! ```
//! use rust_tcg::core::GameRng;
//! use rust_tcg::player::{HighestAffordable, Player};
//!
//! let mut rng = GameRng::new(42);
//! let mut alice = Player::new("Alice", HighestAffordable, rng.fork());
//! let mut bob = Player::new("Bob", HighestAffordable, rng.fork());
//!
//! alice.draw_starting_hand();
//! bob.draw_starting_hand();
//!
//! // Alice's turn
//! alice.give_mana_slot();
//! alice.refill_mana();
//! alice.draw_card();
//! while alice.can_play_cards() {
//!     alice.play_chosen_card(&mut bob).unwrap();
//! }
//!
//! assert!(bob.health() <= 30);
//! ```
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card values and card bags
//! - `player`: Player state machine, builder, strategies, snapshots

pub mod cards;
pub mod core;
pub mod player;

// Re-export commonly used types
pub use crate::cards::{Card, CardBag};
pub use crate::core::{
    GameRng, GameRngState, IllegalMove, MoveResult, PlayerConfig, RandomSource, ScriptedRng,
};
pub use crate::player::{
    Abstain, DrawOutcome, HighestAffordable, LowestAffordable, Player, PlayerBuilder,
    PlayerSnapshot, Strategy,
};
