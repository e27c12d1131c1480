//! Players: the turn economy state machine and its collaborators.
//!
//! - `Player`: deck, hand, health and mana, with draw and play rules
//! - `PlayerBuilder`: construct players in any state
//! - `Strategy`: the pluggable "which card next" decision
//! - `PlayerSnapshot`: serializable player state

#[allow(clippy::module_inception)]
pub mod player;
pub mod builder;
pub mod snapshot;
pub mod strategy;

pub use builder::PlayerBuilder;
pub use player::{DrawOutcome, Player};
pub use snapshot::PlayerSnapshot;
pub use strategy::{Abstain, HighestAffordable, LowestAffordable, Strategy};
