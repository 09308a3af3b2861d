use serde::{Deserialize, Serialize};

use crate::api::dto::CommandResponse;
use crate::api::errors::ApiError;
use crate::domain::{DropZone, TileId};
use crate::engine::{GameSession, RandomSource};
use crate::infra::mapping::map_game_to_dto;

/// Команда верхнего уровня (всё, что меняет состояние).
///
/// Слой ввода присылает их в JSON; hit-test зон делает он же.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Начать новую партию с тем же конфигом.
    NewGame,

    /// Кость перетаскивается; `zone` — зона под ней (если есть).
    DragOver {
        tile_id: TileId,
        zone: Option<DropZone>,
    },

    /// Кость отпущена.
    Release {
        tile_id: TileId,
        zone: Option<DropZone>,
    },
}

/// Разобрать команду из JSON.
pub fn parse_command(json: &str) -> Result<Command, ApiError> {
    serde_json::from_str(json).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Выполнить команду над сессией.
pub fn execute_command<R: RandomSource>(
    session: &mut GameSession,
    command: Command,
    rng: &mut R,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::NewGame => {
            let deal = session.restart(rng)?;
            Ok(CommandResponse::GameStarted {
                game: map_game_to_dto(session.game_id(), session.state()),
                deal,
            })
        }

        Command::DragOver { tile_id, zone } => {
            let feedback = session.drag_over(tile_id, zone)?;
            Ok(CommandResponse::DragFeedback(feedback))
        }

        Command::Release { tile_id, zone } => {
            let outcome = session.release(tile_id, zone)?;
            Ok(CommandResponse::Released {
                outcome,
                game: map_game_to_dto(session.game_id(), session.state()),
            })
        }
    }
}
