//! Where cards live once they leave the deck.
//!
//! ## Key Types
//!
//! - `Hand`: cards held by the player, with an ordered display view
//! - `Selection`: revision-stamped reference into the ordered view
//! - `ExpeditionBoard`: one ascending pile per color

pub mod expedition;
pub mod hand;

pub use expedition::{is_valid_play, ExpeditionBoard};
pub use hand::{Hand, Selection};
