use serde::{Deserialize, Serialize};

use crate::domain::game::TileLocation;
use crate::domain::{DropZone, GameId, PipValue, TileId};
use crate::engine::game_history::GameEvent;
use crate::engine::{DealOutcome, DragFeedback, ReleaseOutcome};
use crate::layout::TransformBatch;

/// DTO кости.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TileDto {
    pub tile_id: TileId,
    pub end_values: [PipValue; 2],
    /// (левое, правое) с учётом ориентации.
    pub normalized: (PipValue, PipValue),
    pub rotated: bool,
    pub compensate: bool,
    pub location: TileLocation,
}

/// DTO партии для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameViewDto {
    pub game_id: GameId,
    pub max_pips: PipValue,
    /// Цепочка слева направо.
    pub board: Vec<TileDto>,
    pub hand: Vec<TileDto>,
    /// Прикуп закрыт – только количество.
    pub stock_count: usize,
    /// Открытые значения на концах цепочки.
    pub left_value: Option<PipValue>,
    pub right_value: Option<PipValue>,
    pub active_zones: Vec<DropZone>,
    /// Нет ни одного хода из руки.
    pub blocked: bool,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Новая партия: состояние + стартовая анимация раздачи.
    GameStarted {
        game: GameViewDto,
        deal: DealOutcome,
    },

    /// Подсветка зон при перетаскивании.
    DragFeedback(DragFeedback),

    /// Кость отпущена.
    Released {
        outcome: ReleaseOutcome,
        game: GameViewDto,
    },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Game(GameViewDto),
    ActiveZones(Vec<DropZone>),
    Transforms(TransformBatch),
    LegalMoves(Vec<(TileId, DropZone)>),
    History(Vec<GameEvent>),
}
