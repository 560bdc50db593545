//! The game aggregate and its command interface.
//!
//! `Game` owns the deck, hand, expedition board and turn state. The
//! presentation layer drives it with three commands:
//!
//! - `select_card(index)`: pick a card from the ordered hand
//! - `play_selected()`: put the selected card on its color's pile
//! - `draw_card()`: refill the hand after a play
//!
//! and reads it back through `snapshot()`.
//!
//! ## Rejected commands
//!
//! A command that returns `Err` leaves the game equal to what it was before
//! the call. Plays check the hand selection and the pile before touching
//! either, so the hand removal and the pile push commit together or not at
//! all.
//!
//! ```
//! use expedition_rules::rules::new_game;
//!
//! let mut game = new_game(["red", "green"], 7).unwrap();
//! assert_eq!(game.hand().len(), 8);
//!
//! game.select_card(0).unwrap();
//! let outcome = game.play_selected().unwrap();
//! assert_eq!(outcome.pile_size, 1);
//! assert!(game.snapshot().must_draw);
//!
//! game.draw_card().unwrap();
//! assert_eq!(game.hand().len(), 8);
//! ```

use crate::cards::{Card, Deck};
use crate::core::{GameConfig, GameError, GameRng, GameRngState};
use crate::zones::{ExpeditionBoard, Hand, Selection};

use super::action::{Action, ActionRecord, PlayOutcome};
use super::snapshot::{PileView, Snapshot};
use super::turn::TurnState;

/// Start a game over the named colors with default rules.
pub fn new_game<I, S>(colors: I, seed: u64) -> Result<Game, GameError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Game::new(GameConfig::new(colors), seed)
}

/// A single-player game session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    config: GameConfig,
    /// Shuffle stream, kept so the session's position can be captured.
    rng: GameRng,
    deck: Deck,
    hand: Hand,
    board: ExpeditionBoard,
    turn: TurnState,
    turn_number: u32,
    history: Vec<ActionRecord>,
}

impl Game {
    /// Shuffle a fresh deck from `seed` and deal the opening hand.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let mut deck = Deck::build(&config, &mut rng);
        let hand = Hand::deal(&mut deck, config.hand_size)?;
        let board = ExpeditionBoard::new(&config);

        log::debug!(
            "new game: {} colors, seed {}, {} cards left after deal",
            config.color_count(),
            seed,
            deck.len()
        );

        Ok(Self {
            config,
            rng,
            deck,
            hand,
            board,
            turn: TurnState::default(),
            turn_number: 1,
            history: Vec::new(),
        })
    }

    // === Commands ===

    /// Select the card at `index` of the ordered hand.
    ///
    /// Replaces any pending selection.
    pub fn select_card(&mut self, index: usize) -> Result<Selection, GameError> {
        self.try_select(index)
            .inspect_err(|e| log::trace!("select {} rejected: {}", index, e))
    }

    fn try_select(&mut self, index: usize) -> Result<Selection, GameError> {
        if self.turn.must_draw() {
            return Err(GameError::MustDrawFirst);
        }
        let selection = self.hand.select(index)?;
        self.turn = TurnState::CardSelected(selection);
        log::debug!("selected {} at index {}", selection.card(), index);
        Ok(selection)
    }

    /// Drop the pending selection.
    pub fn clear_selection(&mut self) -> Result<(), GameError> {
        match self.turn {
            TurnState::CardSelected(_) => {
                self.turn = TurnState::AwaitingSelection;
                Ok(())
            }
            _ => Err(GameError::InvalidTurnState),
        }
    }

    /// Play the selected card onto its color's pile.
    pub fn play_selected(&mut self) -> Result<PlayOutcome, GameError> {
        self.try_play()
            .inspect_err(|e| log::trace!("play rejected in {}: {}", self.turn.name(), e))
    }

    fn try_play(&mut self) -> Result<PlayOutcome, GameError> {
        let selection = match self.turn {
            TurnState::CardSelected(selection) => selection,
            TurnState::MustDraw => return Err(GameError::MustDrawFirst),
            TurnState::AwaitingSelection => return Err(GameError::InvalidTurnState),
        };
        let color = selection.card().color;

        // Check both sides before mutating either.
        self.hand.validate(&selection)?;
        self.board.check(color, selection.card())?;

        let card = self.hand.remove_selected(&selection)?;
        let pile_size = self.board.push(color, card)?;

        self.turn = TurnState::MustDraw;
        self.record(Action::Play { card, color });
        log::debug!("played {} (pile size {})", card, pile_size);

        Ok(PlayOutcome {
            card,
            color,
            pile_size,
        })
    }

    /// Draw the card owed after a play.
    pub fn draw_card(&mut self) -> Result<Card, GameError> {
        self.try_draw()
            .inspect_err(|e| log::trace!("draw rejected in {}: {}", self.turn.name(), e))
    }

    fn try_draw(&mut self) -> Result<Card, GameError> {
        if !self.turn.must_draw() {
            return Err(GameError::InvalidTurnState);
        }
        if self.hand.len() >= self.config.hand_size {
            return Err(GameError::HandFull);
        }
        let card = self.deck.draw_one()?;
        self.hand.insert_drawn(card);

        self.turn = TurnState::AwaitingSelection;
        self.record(Action::Draw { card });
        self.turn_number += 1;
        log::debug!("drew {} ({} left)", card, self.deck.len());

        Ok(card)
    }

    fn record(&mut self, action: Action) {
        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history.push(ActionRecord {
            turn: self.turn_number,
            sequence,
            action,
        });
    }

    // === Queries ===

    /// Ordered-view indices of cards that could be played right now.
    ///
    /// Empty while a draw is owed.
    #[must_use]
    pub fn playable_indices(&self) -> Vec<usize> {
        if self.turn.must_draw() {
            return Vec::new();
        }
        self.hand
            .ordered_view()
            .into_iter()
            .enumerate()
            .filter(|(_, card)| self.board.check(card.color, *card).is_ok())
            .map(|(i, _)| i)
            .collect()
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let piles = self
            .config
            .color_ids()
            .map(|color| PileView {
                color,
                top: self.board.top_of(color),
                len: self.board.pile_len(color),
            })
            .collect();

        Snapshot {
            ordered_hand: self.hand.ordered_view(),
            piles,
            deck_remaining: self.deck.len(),
            must_draw: self.turn.must_draw(),
            selected_index: self.turn.selection().map(Selection::index),
            turn: self.turn_number,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Position of the session's shuffle stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn board(&self) -> &ExpeditionBoard {
        &self.board
    }

    #[must_use]
    pub fn turn_state(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Committed actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }
}
