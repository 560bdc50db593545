//! Game configuration types.
//!
//! The active color set is data, not an enumeration: early table layouts used
//! four expeditions, later ones six. Each configured color gets a `ColorId`
//! equal to its position in the configuration, and that position is also the
//! color's display priority when a hand is laid out.
//!
//! ```
//! use expedition_rules::core::{GameConfig, PileOrder};
//!
//! let config = GameConfig::new(["red", "green"])
//!     .with_hand_size(6)
//!     .with_pile_order(PileOrder::StrictlyAscending);
//!
//! assert_eq!(config.color_count(), 2);
//! assert_eq!(config.deck_size(), 24);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Lowest numbered (non-investment) rank.
pub const MIN_RANK: u8 = 2;

/// Highest numbered rank.
pub const MAX_RANK: u8 = 10;

/// Color identifier. Index into `GameConfig::colors`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColorId(pub u8);

impl ColorId {
    /// Create a new color ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Position in the configured color list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

/// A configured expedition color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    pub id: ColorId,

    /// Presentation name ("red", "purple", ...). Asset lookup is keyed on it.
    pub name: String,
}

/// How ranks must progress within an expedition pile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PileOrder {
    /// Each numbered card must be at least the rank of the one below it.
    /// Equal consecutive ranks are accepted.
    #[default]
    NonDecreasing,
    /// House rule: each numbered card must be strictly higher than the one
    /// below it.
    StrictlyAscending,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Colors in display priority order.
    pub colors: Vec<ColorConfig>,

    /// Cards dealt at the start, and the most a hand may hold.
    pub hand_size: usize,

    /// Rank-0 investment cards per color.
    pub investments_per_color: u8,

    /// Rank progression rule for expedition piles.
    pub pile_order: PileOrder,
}

impl GameConfig {
    /// Create a configuration over the given colors with default rules.
    ///
    /// Colors are numbered in the order given. Call [`GameConfig::validate`]
    /// (or let `Game::new` do it) before use.
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors = colors
            .into_iter()
            .enumerate()
            .map(|(i, name)| ColorConfig {
                id: ColorId(u8::try_from(i).unwrap_or(u8::MAX)),
                name: name.into(),
            })
            .collect();

        Self {
            colors,
            hand_size: 8,
            investments_per_color: 3,
            pile_order: PileOrder::default(),
        }
    }

    /// Six expeditions.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(["red", "green", "blue", "yellow", "white", "purple"])
    }

    /// The four-expedition layout.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(["red", "green", "blue", "yellow"])
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the number of investment cards per color.
    #[must_use]
    pub fn with_investments_per_color(mut self, count: u8) -> Self {
        self.investments_per_color = count;
        self
    }

    /// Set the pile progression rule.
    #[must_use]
    pub fn with_pile_order(mut self, order: PileOrder) -> Self {
        self.pile_order = order;
        self
    }

    /// Number of configured colors.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Cards contributed by each color.
    #[must_use]
    pub fn cards_per_color(&self) -> usize {
        usize::from(self.investments_per_color) + usize::from(MAX_RANK - MIN_RANK + 1)
    }

    /// Full deck size before any card is dealt.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.color_count() * self.cards_per_color()
    }

    /// Color IDs in priority order.
    pub fn color_ids(&self) -> impl Iterator<Item = ColorId> + '_ {
        self.colors.iter().map(|c| c.id)
    }

    /// Look up a color's name.
    #[must_use]
    pub fn color_name(&self, id: ColorId) -> Option<&str> {
        self.colors.get(id.index()).map(|c| c.name.as_str())
    }

    /// Look up a color by name.
    #[must_use]
    pub fn color_by_name(&self, name: &str) -> Option<ColorId> {
        self.colors.iter().find(|c| c.name == name).map(|c| c.id)
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors.is_empty() {
            return Err(ConfigError::NoColors);
        }
        if self.colors.len() > usize::from(u8::MAX) {
            return Err(ConfigError::TooManyColors(self.colors.len()));
        }
        for (i, color) in self.colors.iter().enumerate() {
            // Ids double as pile keys and display priority.
            if color.id.index() != i {
                return Err(ConfigError::ColorIdMismatch {
                    position: i,
                    id: color.id,
                });
            }
            if self.colors[..i].iter().any(|c| c.name == color.name) {
                return Err(ConfigError::DuplicateColor(color.name.clone()));
            }
        }
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        if self.hand_size > self.deck_size() {
            return Err(ConfigError::HandExceedsDeck {
                hand_size: self.hand_size,
                deck_size: self.deck_size(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
