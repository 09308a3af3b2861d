use std::collections::BTreeMap;

use crate::domain::deck::Deck;
use crate::domain::tile::TileId;
use crate::layout::{LayoutConfig, Transform};

/// Шаг между соседними костями в руке.
///
/// Не больше ширины кости; если рука не помещается в экран, шаг сжимается
/// (но не меньше нуля: порядок в руке всегда слева направо).
pub fn hand_step(hand_len: usize, viewport_width: f64, cfg: &LayoutConfig) -> f64 {
    if hand_len < 2 {
        return cfg.tile_width;
    }
    let available = (viewport_width - cfg.hand_padding * 2.0 - cfg.tile_width).max(0.0);
    cfg.tile_width.min(available / (hand_len - 1) as f64)
}

/// Позиция `index`-й кости в руке из `hand_len` костей (без поворота).
pub fn hand_slot(index: usize, hand_len: usize, viewport_width: f64, cfg: &LayoutConfig) -> (f64, f64) {
    let step = hand_step(hand_len, viewport_width, cfg);
    let half = (hand_len as f64 - 1.0) / 2.0;
    (step * (index as f64 - half), cfg.hand_y)
}

/// Трансформации всех костей руки: веер по горизонтали с центром в 0.
pub fn compute_hand_transforms(
    deck: &Deck,
    hand: &[TileId],
    viewport_width: f64,
    cfg: &LayoutConfig,
) -> BTreeMap<TileId, Transform> {
    hand.iter()
        .enumerate()
        .map(|(index, &id)| {
            let (x, y) = hand_slot(index, hand.len(), viewport_width, cfg);
            let rotation = if deck.tile(id).rotated { 180.0 } else { 0.0 };
            (id, Transform::new(x, y, rotation))
        })
        .collect()
}
