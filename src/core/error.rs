//! Error taxonomy for rejected commands.
//!
//! Every error is a caller-correctable condition. A command that returns
//! `Err` has left the game exactly as it found it.

use crate::cards::Card;
use crate::core::ColorId;

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("at least one color must be configured")]
    NoColors,
    #[error("{0} colors configured, at most 255 supported")]
    TooManyColors(usize),
    #[error("color {0:?} configured twice")]
    DuplicateColor(String),
    #[error("color at position {position} carries id {id}")]
    ColorIdMismatch { position: usize, id: ColorId },
    #[error("hand size must be at least 1")]
    EmptyHand,
    #[error("hand size {hand_size} exceeds deck size {deck_size}")]
    HandExceedsDeck { hand_size: usize, deck_size: usize },
}

/// A rejected game command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no cards left in the deck")]
    EmptyDeck,
    #[error("hand index {index} out of range for hand of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("selection no longer matches the hand")]
    StaleSelection,
    #[error("{card} cannot go on the {pile} pile")]
    WrongPile { pile: ColorId, card: Card },
    #[error("{card} cannot be played on {top}")]
    IllegalMove { card: Card, top: Card },
    #[error("command not valid in the current turn state")]
    InvalidTurnState,
    #[error("a card must be drawn before playing again")]
    MustDrawFirst,
    #[error("hand is already full")]
    HandFull,
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl GameError {
    /// Turn-order violations.
    #[must_use]
    pub fn is_turn_order(&self) -> bool {
        matches!(
            self,
            GameError::InvalidTurnState | GameError::MustDrawFirst | GameError::HandFull
        )
    }

    /// Bad or outdated selection references.
    #[must_use]
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            GameError::IndexOutOfRange { .. } | GameError::StaleSelection
        )
    }

    /// Plays rejected by the expedition rules.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, GameError::WrongPile { .. } | GameError::IllegalMove { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn test_classification() {
        assert!(GameError::MustDrawFirst.is_turn_order());
        assert!(GameError::HandFull.is_turn_order());
        assert!(GameError::StaleSelection.is_selection());
        assert!(GameError::IndexOutOfRange { index: 9, len: 8 }.is_selection());

        let card = Card::new(ColorId(0), Rank::new(4).unwrap());
        assert!(GameError::WrongPile { pile: ColorId(1), card }.is_move());
        assert!(!GameError::EmptyDeck.is_move());
        assert!(!GameError::EmptyDeck.is_turn_order());
    }

    #[test]
    fn test_messages() {
        let err = GameError::IndexOutOfRange { index: 9, len: 8 };
        assert_eq!(err.to_string(), "hand index 9 out of range for hand of 8");

        let err = GameError::from(ConfigError::NoColors);
        assert_eq!(
            err.to_string(),
            "invalid configuration: at least one color must be configured"
        );
    }
}
