use std::collections::BTreeMap;

use crate::domain::deck::Deck;
use crate::domain::tile::TileId;
use crate::domain::zone::DropZone;
use crate::layout::{LayoutConfig, Transform};

/// Точка, где лежит прикуп (закрытые кости).
pub fn stock_position(viewport_width: f64, cfg: &LayoutConfig) -> (f64, f64) {
    let screen = viewport_width.min(cfg.stock_max_screen);
    (-screen * cfg.stock_x_ratio, cfg.stock_y)
}

/// Все кости прикупа лежат стопкой в одной точке.
pub fn compute_stock_transforms(
    deck: &Deck,
    stock: &[TileId],
    viewport_width: f64,
    cfg: &LayoutConfig,
) -> BTreeMap<TileId, Transform> {
    let (x, y) = stock_position(viewport_width, cfg);
    stock
        .iter()
        .map(|&id| {
            let rotation = if deck.tile(id).rotated { 180.0 } else { 0.0 };
            (id, Transform::new(x, y, rotation))
        })
        .collect()
}

/// Центр зоны сброса.
pub fn zone_position(zone: DropZone, cfg: &LayoutConfig) -> (f64, f64) {
    match zone {
        DropZone::Opening => (0.0, 0.0),
        DropZone::Left => (-cfg.zone_offset, 0.0),
        DropZone::Right => (cfg.zone_offset, 0.0),
    }
}
