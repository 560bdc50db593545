//! Turn state machine.
//!
//! ```text
//!                 select                 play
//! AwaitingSelection ──────► CardSelected ──────► MustDraw
//!        ▲      ◄──────────   │  ▲  select             │
//!        │      clear         └──┘                     │
//!        └─────────────────────────────────────────────┘
//!                             draw
//! ```
//!
//! There is no terminal state: running out of deck simply leaves the game in
//! `MustDraw` with every draw rejected.

use serde::{Deserialize, Serialize};

use crate::zones::Selection;

/// Where the player is in the play-then-draw cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Nothing selected, free to select.
    #[default]
    AwaitingSelection,
    /// A card is selected and may be played.
    CardSelected(Selection),
    /// A card was played; the next command must be a draw.
    MustDraw,
}

impl TurnState {
    #[must_use]
    pub fn must_draw(&self) -> bool {
        matches!(self, TurnState::MustDraw)
    }

    /// Pending selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            TurnState::CardSelected(selection) => Some(selection),
            _ => None,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TurnState::AwaitingSelection => "AwaitingSelection",
            TurnState::CardSelected(_) => "CardSelected",
            TurnState::MustDraw => "MustDraw",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank};
    use crate::core::ColorId;
    use crate::zones::Hand;

    #[test]
    fn test_default_awaits_selection() {
        let state = TurnState::default();
        assert_eq!(state, TurnState::AwaitingSelection);
        assert!(!state.must_draw());
        assert!(state.selection().is_none());
    }

    #[test]
    fn test_selection_accessor() {
        let mut hand = Hand::new();
        hand.insert_drawn(Card::new(ColorId(0), Rank::new(4).unwrap()));
        let sel = hand.select(0).unwrap();

        let state = TurnState::CardSelected(sel);
        assert_eq!(state.selection(), Some(&sel));
        assert_eq!(state.name(), "CardSelected");
        assert!(TurnState::MustDraw.must_draw());
    }
}
