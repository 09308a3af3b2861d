use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::TileId;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Кость с таким id не существует.
    #[error("Unknown tile: {0}")]
    UnknownTile(TileId),

    /// Команда не может быть выполнена в текущем состоянии.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Ошибка движка.
    #[error("Engine error: {0}")]
    EngineError(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::UnknownTile(id) => ApiError::UnknownTile(id),
            EngineError::TileAlreadyOnBoard(_) => ApiError::InvalidCommand(err.to_string()),
            other => ApiError::EngineError(other.to_string()),
        }
    }
}
