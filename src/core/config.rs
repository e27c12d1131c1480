//! Player configuration.
//!
//! `PlayerConfig` holds the numbers that define a fresh player: starting
//! health, hand limits and the deck's mana curve. The default is the
//! standard game; custom values can be set with the `with_*` builders or
//! loaded from any serde format.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Health a fresh player starts with.
pub const STARTING_HEALTH: i64 = 30;

/// Cards drawn by `draw_starting_hand`.
pub const STARTING_HAND_SIZE: usize = 3;

/// Hand capacity. Cards drawn beyond it are discarded.
pub const MAXIMUM_HAND_SIZE: usize = 5;

/// Mana costs of the standard 20-card deck.
pub const STANDARD_DECK: [u32; 20] = [0, 0, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 5, 5, 6, 6, 7, 8];

/// Configuration for a fresh player.
///
/// ## Example
///
/// ```
/// use rust_tcg::core::PlayerConfig;
///
/// let config = PlayerConfig::default()
///     .with_starting_health(20)
///     .with_deck([1, 1, 2]);
///
/// assert_eq!(config.starting_health, 20);
/// assert_eq!(config.deck_cards().len(), 3);
/// assert_eq!(config.max_hand_size, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Initial health.
    pub starting_health: i64,

    /// Number of draws made by the starting hand.
    pub starting_hand_size: usize,

    /// Maximum number of cards held in hand.
    pub max_hand_size: usize,

    /// Mana cost of every card in the starting deck.
    pub deck: Vec<u32>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            starting_health: STARTING_HEALTH,
            starting_hand_size: STARTING_HAND_SIZE,
            max_hand_size: MAXIMUM_HAND_SIZE,
            deck: STANDARD_DECK.to_vec(),
        }
    }
}

impl PlayerConfig {
    /// Set the starting health.
    #[must_use]
    pub fn with_starting_health(mut self, health: i64) -> Self {
        self.starting_health = health;
        self
    }

    /// Set how many cards the starting hand draws.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the hand capacity.
    #[must_use]
    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    /// Replace the deck with cards of the given costs.
    #[must_use]
    pub fn with_deck(mut self, costs: impl IntoIterator<Item = u32>) -> Self {
        self.deck = costs.into_iter().collect();
        self
    }

    /// Materialize the deck as cards.
    #[must_use]
    pub fn deck_cards(&self) -> Vec<Card> {
        Card::list(&self.deck)
    }

    /// Sum of all mana costs in the deck.
    #[must_use]
    pub fn deck_total_cost(&self) -> u32 {
        self.deck.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_standard_game() {
        let config = PlayerConfig::default();

        assert_eq!(config.starting_health, 30);
        assert_eq!(config.starting_hand_size, 3);
        assert_eq!(config.max_hand_size, 5);
        assert_eq!(config.deck.len(), 20);
        assert_eq!(config.deck_total_cost(), 69);
    }

    #[test]
    fn test_builder() {
        let config = PlayerConfig::default()
            .with_starting_health(10)
            .with_starting_hand_size(4)
            .with_max_hand_size(7)
            .with_deck([3, 3]);

        assert_eq!(config.starting_health, 10);
        assert_eq!(config.starting_hand_size, 4);
        assert_eq!(config.max_hand_size, 7);
        assert_eq!(config.deck_cards(), vec![Card::new(3), Card::new(3)]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PlayerConfig = serde_json::from_str(r#"{"starting_health": 25}"#).unwrap();

        assert_eq!(config.starting_health, 25);
        assert_eq!(config.max_hand_size, MAXIMUM_HAND_SIZE);
        assert_eq!(config.deck, STANDARD_DECK.to_vec());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PlayerConfig::default().with_deck([0, 8]);
        let json = serde_json::to_string(&config).unwrap();
        let back: PlayerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
