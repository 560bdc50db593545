//! Committed actions and their outcomes.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::ColorId;

/// A committed player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A card was placed on an expedition pile.
    Play { card: Card, color: ColorId },
    /// A card was drawn from the deck.
    Draw { card: Card },
}

/// A committed action with its position in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Turn number (starts at 1, advances after each draw).
    pub turn: u32,

    /// Position in the game's history.
    pub sequence: u32,

    pub action: Action,
}

/// Result of a successful play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// The card played.
    pub card: Card,

    /// Pile it went on.
    pub color: ColorId,

    /// Pile size after the play.
    pub pile_size: usize,
}
