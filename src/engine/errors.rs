use crate::domain::game::ConfigError;
use crate::domain::tile::TileId;

use thiserror::Error;

/// Ошибки движка домино.
///
/// Недопустимый ход сюда НЕ входит: это обычный исход `Rejected`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Tile {0} not found in deck")]
    UnknownTile(TileId),

    #[error("Tile {0} is already on the board")]
    TileAlreadyOnBoard(TileId),

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
