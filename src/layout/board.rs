use std::collections::BTreeMap;

use crate::domain::deck::Deck;
use crate::domain::tile::TileId;
use crate::layout::{LayoutConfig, Transform};

/// Положение кости в "плече" относительно центра.
struct ArmSlot {
    /// Расстояние от оси X = 0 (всегда >= 0, знак задаёт сторона).
    x_out: f64,
    y: f64,
    kind: ArmSlotKind,
}

enum ArmSlotKind {
    /// Вертикальная кость. `down` — цепочка удаляется от центра вниз.
    Column { down: bool },
    /// Горизонтальная перемычка между колонками.
    Bridge,
}

/// Целевые трансформации всех костей на столе.
///
/// Цепочка выкладывается "змейкой": в центре горизонтальный ряд из 2 или 3 костей,
/// по бокам симметричные вертикальные плечи. Плечо длиннее `max_column_tiles`
/// продолжается наружу: перемычка, колонка в обратную сторону, снова перемычка и т.д.
pub fn compute_board_transforms(
    deck: &Deck,
    board: &[TileId],
    cfg: &LayoutConfig,
) -> BTreeMap<TileId, Transform> {
    let mut out = BTreeMap::new();

    let count = board.len();
    if count == 0 {
        return out;
    }

    let len = cfg.tile_length;
    let wid = cfg.tile_width;

    let is_even = count % 2 == 0;
    let center_tiles = count.min(if is_even { 2 } else { 3 });
    let shoulder = (count - center_tiles) / 2;
    let depth = shoulder.min(cfg.max_column_tiles.max(1));

    // Центральный ряд.
    let big_gaps = !is_even && shoulder > 0;
    let extra = if count > 3 {
        wid / 2.0 + if is_even { 0.0 } else { -wid } - if big_gaps { 1.0 } else { 0.0 }
    } else {
        0.0
    };
    let spacing = len + if big_gaps { 3.0 } else { 0.0 };
    let center_half = center_tiles as f64 / 2.0;

    for i in 0..center_tiles {
        let id = board[shoulder + i];
        let tile = deck.tile(id);
        out.insert(
            id,
            Transform::new(
                spacing * (i as f64 - center_half + 0.5),
                -len * depth as f64 + extra,
                90.0 + tile.flag_rotation(),
            ),
        );
    }

    // Плечи: k — расстояние от центрального ряда.
    for k in 0..shoulder {
        let slot = arm_slot(k, depth, cfg);

        let left_id = board[shoulder - 1 - k];
        let left_base = match slot.kind {
            ArmSlotKind::Column { down: true } => 0.0,
            ArmSlotKind::Column { down: false } => 180.0,
            ArmSlotKind::Bridge => 90.0,
        };
        let left = deck.tile(left_id);
        out.insert(
            left_id,
            Transform::new(-slot.x_out, slot.y, left_base + left.flag_rotation()),
        );

        let right_id = board[shoulder + center_tiles + k];
        let right_base = match slot.kind {
            ArmSlotKind::Column { down: true } => 180.0,
            ArmSlotKind::Column { down: false } => 0.0,
            ArmSlotKind::Bridge => 90.0,
        };
        let right = deck.tile(right_id);
        out.insert(
            right_id,
            Transform::new(slot.x_out, slot.y, right_base + right.flag_rotation()),
        );
    }

    out
}

/// Геометрия k-й кости плеча (для левого плеча x берётся со знаком минус).
///
/// Колонка 1 идёт вниз от центрального ряда и заканчивается на y = 0.
/// Нечётные колонки занимают [-L*depth, 0], чётные [-L*depth - W, -W];
/// перемычки после нечётных колонок лежат внизу, после чётных — вверху.
fn arm_slot(k: usize, depth: usize, cfg: &LayoutConfig) -> ArmSlot {
    let len = cfg.tile_length;
    let wid = cfg.tile_width;
    let d = depth as f64;

    let column = |c: usize, t: usize| {
        let down = c % 2 == 1;
        let y = if down {
            -len * d + len * t as f64 + len / 2.0
        } else {
            -wid - len * t as f64 - len / 2.0
        };
        ArmSlot {
            x_out: len + wid / 2.0 + len * (c - 1) as f64,
            y,
            kind: ArmSlotKind::Column { down },
        }
    };

    if k < depth {
        return column(1, k);
    }

    let m = k - depth;
    let segment = m / (depth + 1);
    let r = m % (depth + 1);

    if r == 0 {
        // перемычка после колонки c
        let c = segment + 1;
        let y = if c % 2 == 1 {
            -wid / 2.0
        } else {
            -len * d - wid / 2.0
        };
        ArmSlot {
            x_out: len + wid + len * (c - 1) as f64 + len / 2.0,
            y,
            kind: ArmSlotKind::Bridge,
        }
    } else {
        column(segment + 2, r - 1)
    }
}
