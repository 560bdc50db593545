//! Turn cycle and the command interface.
//!
//! `Game` is the only mutable entry point: it owns every zone and rejects
//! any command issued out of turn order without side effects.

pub mod action;
pub mod game;
pub mod snapshot;
pub mod turn;

pub use action::{Action, ActionRecord, PlayOutcome};
pub use game::{new_game, Game};
pub use snapshot::{PileView, Snapshot};
pub use turn::TurnState;
