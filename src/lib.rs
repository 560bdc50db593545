//! # expedition-rules
//!
//! Rules engine for a single-player expedition card game.
//!
//! The player holds a hand of cards and builds one pile per color. Within a
//! pile, numbered cards climb in rank and investment cards (rank 0) may only
//! open a pile. Every play must be followed by a draw before the next play.
//!
//! The engine is pure state and rules. It knows nothing about pixels,
//! images or input devices: a presentation layer translates gestures into
//! `select_card`, `play_selected` and `draw_card`, and renders from
//! `snapshot`.
//!
//! ## Modules
//!
//! - `core`: configuration, deterministic RNG, errors
//! - `cards`: card values and the deck
//! - `zones`: hand and expedition piles
//! - `rules`: turn state machine and the `Game` aggregate

pub mod cards;
pub mod core;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ColorConfig, ColorId, ConfigError, GameConfig, GameError, GameRng, GameRngState, PileOrder,
};

pub use crate::cards::{Card, Deck, Rank};

pub use crate::zones::{is_valid_play, ExpeditionBoard, Hand, Selection};

pub use crate::rules::{
    new_game, Action, ActionRecord, Game, PileView, PlayOutcome, Snapshot, TurnState,
};
