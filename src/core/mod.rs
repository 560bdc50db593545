//! Core engine types: configuration, RNG, errors.
//!
//! Nothing here knows about turns or piles. Colors, hand size and the pile
//! progression rule all come from `GameConfig`.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{ColorConfig, ColorId, GameConfig, PileOrder, MAX_RANK, MIN_RANK};
pub use error::{ConfigError, GameError};
pub use rng::{GameRng, GameRngState};
