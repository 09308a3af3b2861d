use serde::{Deserialize, Serialize};

use crate::domain::game::{DeckVariant, TileLocation};
use crate::domain::{DropZone, GameId, TileId};

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Новая партия началась.
    GameStarted {
        game_id: GameId,
        variant: DeckVariant,
        tile_count: usize,
    },

    /// Кости розданы в руку.
    HandDealt { tiles: Vec<TileId> },

    /// Движок перевернул кость, чтобы она подошла к концу цепочки.
    TileFlipped { tile_id: TileId },

    /// Кость выложена на стол.
    TilePlaced {
        tile_id: TileId,
        zone: DropZone,
        flipped: bool,
        from: TileLocation,
    },

    /// Ход не подошёл.
    MoveRejected { tile_id: TileId, zone: DropZone },

    /// Кость из прикупа перенесена в руку.
    TileDrawn { tile_id: TileId },

    /// Кость вернулась на своё место в руке.
    TileReturned { tile_id: TileId },
}

/// Событие в партии с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Сколько костей выложено на стол за партию.
    pub fn placements(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, GameEventKind::TilePlaced { .. }))
            .count()
    }
}
