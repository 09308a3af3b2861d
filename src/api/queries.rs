use serde::{Deserialize, Serialize};

use crate::api::dto::QueryResponse;
use crate::engine::{active_zones, GameSession};
use crate::infra::mapping::map_game_to_dto;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Получить состояние партии.
    GetGame,

    /// Какие зоны сброса сейчас показывать.
    ActiveZones,

    /// Текущая раскладка стола.
    BoardTransforms,

    /// Текущая раскладка руки.
    HandTransforms,

    /// Текущая раскладка прикупа.
    StockTransforms,

    /// Все допустимые ходы из руки.
    LegalMoves,

    /// История партии.
    History,
}

/// Выполнить запрос. Состояние не меняется.
pub fn run_query(session: &GameSession, query: &Query) -> QueryResponse {
    match query {
        Query::GetGame => QueryResponse::Game(map_game_to_dto(session.game_id(), session.state())),
        Query::ActiveZones => {
            QueryResponse::ActiveZones(active_zones(session.state()).into_iter().collect())
        }
        Query::BoardTransforms => QueryResponse::Transforms(session.board_transforms()),
        Query::HandTransforms => QueryResponse::Transforms(session.hand_transforms()),
        Query::StockTransforms => QueryResponse::Transforms(session.stock_transforms()),
        Query::LegalMoves => QueryResponse::LegalMoves(session.legal_moves()),
        Query::History => QueryResponse::History(session.history().events.clone()),
    }
}
