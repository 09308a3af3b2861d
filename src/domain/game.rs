use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::board::Board;
use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::domain::stock::Stock;
use crate::domain::tile::{PipValue, TileId};
use crate::layout::{AnimationConfig, LayoutConfig};

/// Вариант набора костей.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DeckVariant {
    /// 21 кость, от 1 до 6 точек.
    DoubleSix,
    /// 28 костей, от 1 до 7 точек.
    #[default]
    DoubleSeven,
}

impl DeckVariant {
    pub fn max_pips(self) -> PipValue {
        match self {
            DeckVariant::DoubleSix => 6,
            DeckVariant::DoubleSeven => 7,
        }
    }

    pub fn tile_count(self) -> usize {
        Deck::expected_len(self.max_pips())
    }
}

/// Конфиг партии: набор, размер руки, экран, раскладка и анимации.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub variant: DeckVariant,
    /// Сколько костей раздаётся в руку в начале.
    pub hand_size: usize,
    /// Ширина области отображения (для раскладки руки и прикупа).
    pub viewport_width: f64,
    pub layout: LayoutConfig,
    pub animation: AnimationConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            variant: DeckVariant::DoubleSeven,
            hand_size: 5,
            viewport_width: 500.0,
            layout: LayoutConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

/// Ошибки конфигурации партии.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

impl GameConfig {
    /// Прочитать конфиг из JSON; отсутствующие поля берутся по умолчанию.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig =
            serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::Invalid("GameConfig: hand_size = 0".into()));
        }

        if self.hand_size > self.variant.tile_count() {
            return Err(ConfigError::Invalid(format!(
                "GameConfig: hand_size {} exceeds deck size {}",
                self.hand_size,
                self.variant.tile_count()
            )));
        }

        if !(self.viewport_width > 0.0) {
            return Err(ConfigError::Invalid(
                "GameConfig: viewport_width must be positive".into(),
            ));
        }

        let l = &self.layout;
        if !(l.tile_length > 0.0) || !(l.tile_width > 0.0) {
            return Err(ConfigError::Invalid(
                "LayoutConfig: tile dimensions must be positive".into(),
            ));
        }
        if l.tile_width > l.tile_length {
            return Err(ConfigError::Invalid(
                "LayoutConfig: tile_width > tile_length".into(),
            ));
        }
        if l.max_column_tiles == 0 {
            return Err(ConfigError::Invalid(
                "LayoutConfig: max_column_tiles = 0".into(),
            ));
        }

        let min_viewport = l.hand_padding * 2.0 + l.tile_width;
        if self.viewport_width < min_viewport {
            return Err(ConfigError::Invalid(format!(
                "GameConfig: viewport_width {} is narrower than one hand tile with padding ({})",
                self.viewport_width, min_viewport
            )));
        }

        let a = &self.animation;
        let durations = [
            a.board_secs,
            a.hand_secs,
            a.return_secs,
            a.flip_secs,
            a.deal_delay_secs,
            a.deal_stagger_secs,
            a.deal_secs,
        ];
        if durations.iter().any(|d| !(*d >= 0.0)) {
            return Err(ConfigError::Invalid(
                "AnimationConfig: durations must be non-negative".into(),
            ));
        }

        Ok(())
    }
}

/// Где сейчас находится кость.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TileLocation {
    Stock,
    Hand,
    Board,
}

/// Состояние одной партии. Меняется только движком.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub deck: Deck,
    pub stock: Stock,
    pub hand: Hand,
    pub board: Board,
}

impl GameState {
    /// Все кости колоды лежат в прикупе, рука и стол пусты.
    pub fn new(deck: Deck) -> Self {
        let stock = Stock::new(deck.ids());
        Self {
            deck,
            stock,
            hand: Hand::new(),
            board: Board::new(),
        }
    }

    pub fn location(&self, id: TileId) -> Option<TileLocation> {
        if self.board.contains(id) {
            Some(TileLocation::Board)
        } else if self.hand.contains(id) {
            Some(TileLocation::Hand)
        } else if self.stock.contains(id) {
            Some(TileLocation::Stock)
        } else {
            None
        }
    }
}
