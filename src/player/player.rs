//! The player state machine.
//!
//! A `Player` owns its deck, hand, health and mana. Each turn an outside
//! sequencer calls into it:
//!
//! 1. `give_mana_slot` then `refill_mana`
//! 2. `draw_card`
//! 3. `play_card` / `play_chosen_card` while `can_play_cards` holds
//!
//! ## Draw Rules
//!
//! - Empty deck: the player bleeds out for 1 health, nothing is drawn.
//! - Full hand: the drawn card is discarded (overload). It never returns.
//! - Otherwise the drawn card moves to the hand.
//!
//! ## Playing Cards
//!
//! Playing spends the card's cost and deals the same amount of damage to
//! the opponent. The opponent is borrowed mutably for the duration of the
//! call only, so a player can never target itself.

use log::{debug, info, warn};

use super::builder::PlayerBuilder;
use super::strategy::Strategy;
use crate::cards::{Card, CardBag};
use crate::core::config::PlayerConfig;
use crate::core::error::{IllegalMove, MoveResult};
use crate::core::rng::RandomSource;

/// What happened during a single draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The card moved from deck to hand.
    Drawn(Card),
    /// The card left the deck but the hand was full, so it was discarded.
    Overload(Card),
    /// The deck was empty and the player lost 1 health.
    BleedOut,
}

impl DrawOutcome {
    /// The card taken from the deck, if any.
    #[must_use]
    pub fn card(self) -> Option<Card> {
        match self {
            DrawOutcome::Drawn(card) | DrawOutcome::Overload(card) => Some(card),
            DrawOutcome::BleedOut => None,
        }
    }
}

/// A player in a two-player match.
pub struct Player {
    pub(super) name: String,
    pub(super) health: i64,
    pub(super) mana_slots: u32,
    pub(super) mana: u32,
    pub(super) deck: CardBag,
    pub(super) hand: CardBag,
    pub(super) max_hand_size: usize,
    pub(super) starting_hand_size: usize,
    pub(super) strategy: Box<dyn Strategy>,
    pub(super) rng: Box<dyn RandomSource>,
}

impl Player {
    /// Create a fresh player with the standard deck and 30 health.
    ///
    /// ```
    /// use rust_tcg::core::GameRng;
    /// use rust_tcg::player::{HighestAffordable, Player};
    ///
    /// let player = Player::new("Alice", HighestAffordable, GameRng::new(7));
    /// assert_eq!(player.health(), 30);
    /// assert_eq!(player.deck_size(), 20);
    /// assert_eq!(player.hand_size(), 0);
    /// ```
    pub fn new(
        name: impl Into<String>,
        strategy: impl Strategy + 'static,
        rng: impl RandomSource + 'static,
    ) -> Self {
        Self::with_config(name, strategy, rng, &PlayerConfig::default())
    }

    /// Create a fresh player from a configuration.
    pub fn with_config(
        name: impl Into<String>,
        strategy: impl Strategy + 'static,
        rng: impl RandomSource + 'static,
        config: &PlayerConfig,
    ) -> Self {
        PlayerBuilder::from_config(name, config)
            .with_strategy(strategy)
            .with_rng(rng)
            .build()
    }

    // === Queries ===

    /// Player name. Not required to be unique.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn health(&self) -> i64 {
        self.health
    }

    /// Currently spendable mana.
    #[must_use]
    pub fn mana(&self) -> u32 {
        self.mana
    }

    /// Permanent mana capacity.
    #[must_use]
    pub fn mana_slots(&self) -> u32 {
        self.mana_slots
    }

    #[must_use]
    pub fn deck(&self) -> &CardBag {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &CardBag {
        &self.hand
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn deck_cards_with_cost(&self, mana_cost: u32) -> usize {
        self.deck.count_with_cost(mana_cost)
    }

    #[must_use]
    pub fn hand_cards_with_cost(&self, mana_cost: u32) -> usize {
        self.hand.count_with_cost(mana_cost)
    }

    /// Hand capacity; draws beyond it overload.
    #[must_use]
    pub fn max_hand_size(&self) -> usize {
        self.max_hand_size
    }

    /// Check whether health has dropped to zero or below.
    ///
    /// Purely informational: nothing in the player stops acting at 0 health.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Check whether any card in hand is affordable with the current mana.
    #[must_use]
    pub fn can_play_cards(&self) -> bool {
        self.hand.any_affordable(self.mana)
    }

    // === Deck and Hand ===

    /// Draw one card from the deck.
    pub fn draw_card(&mut self) -> DrawOutcome {
        let Some(card) = self.deck.take_random(&mut *self.rng) else {
            self.health = self.health.saturating_sub(1);
            info!("{} bleeds out! (health {})", self.name, self.health);
            return DrawOutcome::BleedOut;
        };

        info!("{} draws card: {}", self.name, card);
        if self.hand.len() < self.max_hand_size {
            self.hand.push(card);
            DrawOutcome::Drawn(card)
        } else {
            info!("{} drops card {} from overload!", self.name, card);
            DrawOutcome::Overload(card)
        }
    }

    /// Draw the starting hand (3 draws with the standard configuration).
    pub fn draw_starting_hand(&mut self) -> Vec<DrawOutcome> {
        (0..self.starting_hand_size).map(|_| self.draw_card()).collect()
    }

    // === Mana ===

    /// Gain one permanent mana slot.
    pub fn give_mana_slot(&mut self) {
        self.mana_slots = self.mana_slots.saturating_add(1);
        debug!("{} now has {} mana slots", self.name, self.mana_slots);
    }

    /// Reset mana to full capacity, discarding any unspent mana.
    pub fn refill_mana(&mut self) {
        self.mana = self.mana_slots;
        debug!("{} refills mana to {}", self.name, self.mana);
    }

    // === Card Play ===

    /// Play a specific card against `opponent`.
    ///
    /// Fails without changing either player if the card is unaffordable.
    /// One card of equal cost leaves the hand; if none is held the mana is
    /// still spent and the damage still dealt.
    pub fn play_card(&mut self, card: Card, opponent: &mut Player) -> MoveResult {
        if self.mana < card.mana_cost() {
            warn!("{} cannot afford card {} with {} mana", self.name, card, self.mana);
            return Err(IllegalMove::InsufficientMana {
                mana: self.mana,
                card,
            });
        }

        info!("{} plays card: {}", self.name, card);
        self.mana -= card.mana_cost();
        if !self.hand.remove_one(card) {
            debug!("{} plays card {} without holding it", self.name, card);
        }
        opponent.receive_damage(card.damage());
        Ok(())
    }

    /// Ask the strategy for a card and play it against `opponent`.
    ///
    /// Returns the card played. Fails with `NoPlayableCard` if the strategy
    /// abstains, or with the `play_card` error if its choice is illegal.
    pub fn play_chosen_card(&mut self, opponent: &mut Player) -> MoveResult<Card> {
        match self.strategy.next_card(self.mana, self.hand.as_slice()) {
            Some(card) => {
                self.play_card(card, opponent)?;
                Ok(card)
            }
            None => {
                warn!("{} has no card to play", self.name);
                Err(IllegalMove::NoPlayableCard {
                    mana: self.mana,
                    hand: self.hand.clone(),
                })
            }
        }
    }

    fn receive_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(i64::from(damage));
        debug!("{} takes {} damage (health {})", self.name, damage, self.health);
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("health", &self.health)
            .field("mana_slots", &self.mana_slots)
            .field("mana", &self.mana)
            .field("deck", &self.deck)
            .field("hand", &self.hand)
            .field("max_hand_size", &self.max_hand_size)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player:{}{{health={}, mana={}/{}, hand={}, deck={}}}",
            self.name, self.health, self.mana, self.mana_slots, self.hand, self.deck
        )
    }
}
