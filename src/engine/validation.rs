use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::board::Side;
use crate::domain::game::GameState;
use crate::domain::tile::{normalize_end_values, PipValue, Tile, TileId};
use crate::domain::zone::DropZone;

/// В какой ориентации кость подходит к концу цепочки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Orientation {
    /// Подходит как лежит: второе нормализованное значение = значение на конце.
    AsIs,
    /// Подходит после переворота (совпадает первое значение).
    Flipped,
}

/// Открытое значение на конце цепочки. None — стол пуст.
pub fn boundary_value(state: &GameState, side: Side) -> Option<PipValue> {
    let end_id = state.board.end(side)?;
    let (left, right) = normalize_end_values(state.deck.tile(end_id));
    Some(match side {
        Side::Left => left,
        Side::Right => right,
    })
}

/// Можно ли приставить кость к концу цепочки и в какой ориентации.
///
/// К концу цепочки всегда прикладывается второе нормализованное значение
/// кандидата; если совпадает первое, кость нужно перевернуть.
/// На пустом столе ходы влево/вправо невозможны: только через `DropZone::Opening`.
pub fn check_placement(state: &GameState, tile: &Tile, side: Side) -> Option<Orientation> {
    let target = boundary_value(state, side)?;
    let (cand_left, cand_right) = normalize_end_values(tile);

    if cand_right == target {
        Some(Orientation::AsIs)
    } else if cand_left == target {
        Some(Orientation::Flipped)
    } else {
        None
    }
}

pub fn can_place(state: &GameState, tile: &Tile, side: Side) -> bool {
    check_placement(state, tile, side).is_some()
}

/// Можно ли отпустить кость в эту зону при текущем состоянии.
pub fn can_drop(state: &GameState, tile: &Tile, zone: DropZone) -> bool {
    match zone.side() {
        None => state.board.is_empty(),
        Some(side) => can_place(state, tile, side),
    }
}

/// Зоны, которые сейчас показываются игроку.
pub fn active_zones(state: &GameState) -> BTreeSet<DropZone> {
    [DropZone::Opening, DropZone::Left, DropZone::Right]
        .into_iter()
        .filter(|z| z.is_active(state.board.len()))
        .collect()
}

/// Все допустимые ходы костями из руки (в порядке руки).
pub fn legal_moves(state: &GameState) -> Vec<(TileId, DropZone)> {
    let zones = active_zones(state);
    let mut moves = Vec::new();
    for &id in &state.hand.tiles {
        let tile = state.deck.tile(id);
        for &zone in &zones {
            if can_drop(state, tile, zone) {
                moves.push((id, zone));
            }
        }
    }
    moves
}

/// Ни одна кость из руки не подходит ни к одному концу.
pub fn is_blocked(state: &GameState) -> bool {
    legal_moves(state).is_empty()
}
