//! Plain-data player snapshots.
//!
//! A `PlayerSnapshot` captures everything about a player except its
//! strategy and RNG. It serializes with serde and encodes to compact bytes
//! with bincode for checkpoints.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::cards::CardBag;

/// Serializable player state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub health: i64,
    pub mana_slots: u32,
    pub mana: u32,
    pub deck: CardBag,
    pub hand: CardBag,
    pub max_hand_size: usize,
    pub starting_hand_size: usize,
}

impl PlayerSnapshot {
    /// Encode to bincode bytes.
    pub fn encode(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode from bincode bytes.
    pub fn decode(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}

impl Player {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            name: self.name.clone(),
            health: self.health,
            mana_slots: self.mana_slots,
            mana: self.mana,
            deck: self.deck.clone(),
            hand: self.hand.clone(),
            max_hand_size: self.max_hand_size,
            starting_hand_size: self.starting_hand_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::rng::ScriptedRng;
    use crate::player::PlayerBuilder;

    #[test]
    fn test_snapshot_captures_state() {
        let player = PlayerBuilder::new("Alice")
            .with_health(17)
            .with_mana_slots(4)
            .with_mana(2)
            .with_deck_costs([1, 2])
            .with_hand_costs([6])
            .build();

        let snapshot = player.snapshot();

        assert_eq!(snapshot.name, "Alice");
        assert_eq!(snapshot.health, 17);
        assert_eq!(snapshot.mana_slots, 4);
        assert_eq!(snapshot.mana, 2);
        assert_eq!(snapshot.deck, CardBag::from_costs([2, 1]));
        assert_eq!(snapshot.hand, CardBag::from_costs([6]));
        assert_eq!(snapshot.max_hand_size, 5);
    }

    #[test]
    fn test_bincode_restore() {
        let mut player = PlayerBuilder::new("Alice")
            .with_deck_costs([3, 4, 5])
            .with_rng(ScriptedRng::new([0]))
            .build();
        player.draw_card();

        let bytes = player.snapshot().encode().unwrap();
        let decoded = PlayerSnapshot::decode(&bytes).unwrap();
        let restored = PlayerBuilder::from_snapshot(decoded).build();

        assert_eq!(restored.snapshot(), player.snapshot());
        assert_eq!(restored.hand_cards_with_cost(3), 1);
        assert!(!restored.deck().contains(Card::new(3)));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(PlayerSnapshot::decode(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_json_shape() {
        let snapshot = PlayerBuilder::new("Bob")
            .with_no_cards_in_deck()
            .with_hand_costs([2])
            .build()
            .snapshot();

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["hand"], serde_json::json!([2]));
        assert_eq!(json["deck"], serde_json::json!([]));
        assert_eq!(json["health"], 30);
    }
}
