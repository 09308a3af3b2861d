use serde::{Deserialize, Serialize};

use crate::domain::{DropZone, TileId};

/// Что сообщает слой ввода при перетаскивании.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DragPhase {
    /// Кость двигается (для подсветки зон).
    Move,
    /// Кость отпущена.
    Release,
}

/// Событие перетаскивания кости.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DragEvent {
    pub tile_id: TileId,
    /// Зона, которую кость перекрывает (None — ни одна).
    pub zone: Option<DropZone>,
    pub phase: DragPhase,
}

impl DragEvent {
    pub fn moved(tile_id: TileId, zone: Option<DropZone>) -> Self {
        Self {
            tile_id,
            zone,
            phase: DragPhase::Move,
        }
    }

    pub fn released(tile_id: TileId, zone: Option<DropZone>) -> Self {
        Self {
            tile_id,
            zone,
            phase: DragPhase::Release,
        }
    }
}
