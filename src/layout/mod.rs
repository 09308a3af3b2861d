//! Раскладка костей на экране: цепочка на столе, рука, прикуп, зоны сброса.
//!
//! Все функции чистые: на вход состояние, на выход целевые трансформации.
//! Анимацию к этим целям делает внешний слой отображения.
//!
//! Соглашение по повороту: 0° — кость стоит вертикально, второе значение
//! `end_values` сверху; поворот по часовой стрелке.

pub mod board;
pub mod hand;
pub mod table;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::tile::TileId;

pub use board::compute_board_transforms;
pub use hand::{compute_hand_transforms, hand_slot, hand_step};
pub use table::{compute_stock_transforms, stock_position, zone_position};

/// Целевое положение кости.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub rotation_degrees: f64,
}

impl Transform {
    pub fn new(x: f64, y: f64, rotation_degrees: f64) -> Self {
        Self {
            x,
            y,
            rotation_degrees: normalize_degrees(rotation_degrees),
        }
    }
}

/// Привести угол к [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid может вернуть 360.0 из-за округления
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Пакет трансформаций для слоя анимации.
///
/// Кость с порядковым номером `i` в `order` стартует через `delay_secs + i * stagger_secs`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TransformBatch {
    pub transforms: BTreeMap<TileId, Transform>,
    /// Порядок запуска анимаций (для `stagger_secs`).
    pub order: Vec<TileId>,
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub stagger_secs: f64,
}

impl TransformBatch {
    pub fn new(transforms: BTreeMap<TileId, Transform>, duration_secs: f64) -> Self {
        Self {
            transforms,
            order: Vec::new(),
            duration_secs,
            delay_secs: 0.0,
            stagger_secs: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn get(&self, id: TileId) -> Option<&Transform> {
        self.transforms.get(&id)
    }
}

/// Геометрические константы раскладки (в пикселях).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Длинная сторона кости.
    pub tile_length: f64,
    /// Короткая сторона кости; она же максимальный шаг в руке.
    pub tile_width: f64,
    /// Сколько вертикальных костей помещается в одну колонку "плеча".
    pub max_column_tiles: usize,
    /// Вертикальная позиция руки.
    pub hand_y: f64,
    /// Отступ руки от краёв экрана.
    pub hand_padding: f64,
    /// Смещение левой/правой зоны от центра.
    pub zone_offset: f64,
    /// Вертикальная позиция прикупа.
    pub stock_y: f64,
    /// Доля ширины экрана, на которую прикуп сдвинут влево.
    pub stock_x_ratio: f64,
    /// Ширина экрана, больше которой прикуп не отодвигается.
    pub stock_max_screen: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tile_length: 94.0,
            tile_width: 50.0,
            max_column_tiles: 4,
            hand_y: 170.0,
            hand_padding: 16.0,
            zone_offset: 120.0,
            stock_y: -160.0,
            stock_x_ratio: 0.4,
            stock_max_screen: 500.0,
        }
    }
}

/// Длительности анимаций (в секундах).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub board_secs: f64,
    pub hand_secs: f64,
    pub return_secs: f64,
    pub flip_secs: f64,
    pub deal_delay_secs: f64,
    pub deal_stagger_secs: f64,
    pub deal_secs: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            board_secs: 0.15,
            hand_secs: 0.25,
            return_secs: 0.4,
            flip_secs: 0.25,
            deal_delay_secs: 0.5,
            deal_stagger_secs: 0.1,
            deal_secs: 0.5,
        }
    }
}
