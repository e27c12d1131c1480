//! Builder for players in arbitrary states.
//!
//! `Player::new` always starts from the standard fresh state. The builder
//! can set every field directly, which is what tests and checkpoint
//! restores need. No consistency is enforced: mana may exceed the mana
//! slots and hands may start above the hand limit.

use super::player::Player;
use super::snapshot::PlayerSnapshot;
use super::strategy::{Abstain, Strategy};
use crate::cards::{Card, CardBag};
use crate::core::config::PlayerConfig;
use crate::core::rng::{GameRng, RandomSource};

/// Builder for creating a `Player`.
///
/// Defaults to a fresh standard player that abstains from every play and
/// draws from an entropy-seeded `GameRng`.
///
/// ```
/// use rust_tcg::player::PlayerBuilder;
///
/// let player = PlayerBuilder::new("Bob")
///     .with_mana(10)
///     .with_hand_costs([8, 1])
///     .with_no_cards_in_deck()
///     .build();
///
/// assert_eq!(player.mana(), 10);
/// assert_eq!(player.mana_slots(), 0);
/// assert_eq!(player.hand_size(), 2);
/// assert_eq!(player.deck_size(), 0);
/// ```
pub struct PlayerBuilder {
    name: String,
    health: i64,
    mana_slots: u32,
    mana: u32,
    deck: CardBag,
    hand: CardBag,
    max_hand_size: usize,
    starting_hand_size: usize,
    strategy: Option<Box<dyn Strategy>>,
    rng: Option<Box<dyn RandomSource>>,
}

impl PlayerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_config(name, &PlayerConfig::default())
    }

    /// Start from the fresh state described by `config`.
    pub fn from_config(name: impl Into<String>, config: &PlayerConfig) -> Self {
        Self {
            name: name.into(),
            health: config.starting_health,
            mana_slots: 0,
            mana: 0,
            deck: CardBag::from(config.deck_cards()),
            hand: CardBag::new(),
            max_hand_size: config.max_hand_size,
            starting_hand_size: config.starting_hand_size,
            strategy: None,
            rng: None,
        }
    }

    /// Start from a saved snapshot.
    ///
    /// Snapshots carry no strategy or RNG, so set them before building.
    pub fn from_snapshot(snapshot: PlayerSnapshot) -> Self {
        Self {
            name: snapshot.name,
            health: snapshot.health,
            mana_slots: snapshot.mana_slots,
            mana: snapshot.mana,
            deck: snapshot.deck,
            hand: snapshot.hand,
            max_hand_size: snapshot.max_hand_size,
            starting_hand_size: snapshot.starting_hand_size,
            strategy: None,
            rng: None,
        }
    }

    pub fn with_health(mut self, health: i64) -> Self {
        self.health = health;
        self
    }

    pub fn with_mana_slots(mut self, mana_slots: u32) -> Self {
        self.mana_slots = mana_slots;
        self
    }

    pub fn with_mana(mut self, mana: u32) -> Self {
        self.mana = mana;
        self
    }

    pub fn with_deck(mut self, deck: impl IntoIterator<Item = Card>) -> Self {
        self.deck = deck.into_iter().collect();
        self
    }

    pub fn with_deck_costs(mut self, costs: impl IntoIterator<Item = u32>) -> Self {
        self.deck = CardBag::from_costs(costs);
        self
    }

    pub fn with_no_cards_in_deck(mut self) -> Self {
        self.deck = CardBag::new();
        self
    }

    pub fn with_hand(mut self, hand: impl IntoIterator<Item = Card>) -> Self {
        self.hand = hand.into_iter().collect();
        self
    }

    pub fn with_hand_costs(mut self, costs: impl IntoIterator<Item = u32>) -> Self {
        self.hand = CardBag::from_costs(costs);
        self
    }

    pub fn with_no_cards_in_hand(mut self) -> Self {
        self.hand = CardBag::new();
        self
    }

    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    pub fn with_strategy(mut self, strategy: impl Strategy + 'static) -> Self {
        self.strategy = Some(Box::new(strategy));
        self
    }

    pub fn with_rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Seed a deterministic `GameRng` for draws.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(GameRng::new(seed))
    }

    pub fn build(self) -> Player {
        Player {
            name: self.name,
            health: self.health,
            mana_slots: self.mana_slots,
            mana: self.mana,
            deck: self.deck,
            hand: self.hand,
            max_hand_size: self.max_hand_size,
            starting_hand_size: self.starting_hand_size,
            strategy: self.strategy.unwrap_or_else(|| Box::new(Abstain)),
            rng: self.rng.unwrap_or_else(|| Box::new(GameRng::from_entropy())),
        }
    }
}
