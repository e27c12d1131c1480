//! Core types: randomness, configuration, errors.
//!
//! Everything here is independent of the player state machine and can be
//! used on its own, e.g. to load a `PlayerConfig` or checkpoint a `GameRng`.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{PlayerConfig, MAXIMUM_HAND_SIZE, STANDARD_DECK, STARTING_HAND_SIZE, STARTING_HEALTH};
pub use error::{IllegalMove, MoveResult};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
