//! Read-only view of a game for rendering.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::ColorId;

/// One expedition pile as the presentation layer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileView {
    pub color: ColorId,
    pub top: Option<Card>,
    pub len: usize,
}

/// Everything needed to draw the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Hand in display order. Indices here are what `select_card` takes.
    pub ordered_hand: Vec<Card>,

    /// One entry per configured color, in priority order.
    pub piles: Vec<PileView>,

    pub deck_remaining: usize,

    pub must_draw: bool,

    /// Ordered-view index of the pending selection.
    pub selected_index: Option<usize>,

    pub turn: u32,
}

impl Snapshot {
    /// Top card of a color's pile.
    #[must_use]
    pub fn top_of(&self, color: ColorId) -> Option<Card> {
        self.piles.iter().find(|p| p.color == color)?.top
    }
}
