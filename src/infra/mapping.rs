use crate::api::dto::{GameViewDto, TileDto};
use crate::domain::game::{GameState, TileLocation};
use crate::domain::{GameId, Side, TileId};
use crate::engine::validation::{active_zones, boundary_value, is_blocked};

/// Утилита: маппинг одной кости в DTO.
///
/// `id` должен быть взят из самого состояния.
pub fn map_tile_to_dto(state: &GameState, id: TileId) -> TileDto {
    let tile = state.deck.tile(id);
    TileDto {
        tile_id: id,
        end_values: tile.end_values(),
        normalized: tile.normalized_end_values(),
        rotated: tile.rotated,
        compensate: tile.compensate,
        location: state.location(id).unwrap_or(TileLocation::Stock),
    }
}

/// Утилита: маппинг GameState -> GameViewDto.
///
/// Кости прикупа закрыты: отдаём только их количество.
pub fn map_game_to_dto(game_id: GameId, state: &GameState) -> GameViewDto {
    let board = state
        .board
        .tiles
        .iter()
        .map(|&id| map_tile_to_dto(state, id))
        .collect();

    let hand = state
        .hand
        .tiles
        .iter()
        .map(|&id| map_tile_to_dto(state, id))
        .collect();

    GameViewDto {
        game_id,
        max_pips: state.deck.max_pips,
        board,
        hand,
        stock_count: state.stock.len(),
        left_value: boundary_value(state, Side::Left),
        right_value: boundary_value(state, Side::Right),
        active_zones: active_zones(state).into_iter().collect(),
        blocked: is_blocked(state),
    }
}
