use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Количество точек на половинке кости (от 1 до `max_pips`).
pub type PipValue = u8;

/// Стабильный идентификатор кости внутри одной партии.
///
/// Выдаётся при генерации колоды и больше никогда не переиспользуется.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    /// Формат вида `tile:12`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile:{}", self.0)
    }
}

/// Парсинг строки вида "tile:12" (или просто "12").
impl FromStr for TileId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("tile:").unwrap_or(s);
        raw.parse::<u32>()
            .map(TileId)
            .map_err(|_| format!("Invalid tile id: {s}"))
    }
}

/// Одна физическая кость домино.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    /// Точки на двух половинках. Не меняются после создания.
    end_values: [PipValue; 2],
    /// Кость перевёрнута игроком или движком.
    pub rotated: bool,
    /// Выставляется один раз при добавлении кости в правый конец цепочки.
    pub compensate: bool,
}

impl Tile {
    pub fn new(id: TileId, end_values: [PipValue; 2], rotated: bool) -> Self {
        Self {
            id,
            end_values,
            rotated,
            compensate: false,
        }
    }

    pub fn end_values(&self) -> [PipValue; 2] {
        self.end_values
    }

    pub fn is_double(&self) -> bool {
        self.end_values[0] == self.end_values[1]
    }

    /// Перевернуть кость (меняет только ориентацию).
    pub fn flip(&mut self) {
        self.rotated = !self.rotated;
    }

    /// Пометить кость как добавленную справа. Повторный вызов ничего не меняет.
    pub fn mark_compensated(&mut self) {
        self.compensate = true;
    }

    /// (левое, правое) значения с учётом `rotated` и `compensate`.
    pub fn normalized_end_values(&self) -> (PipValue, PipValue) {
        normalize_end_values(self)
    }

    /// Дополнительный поворот (в градусах), который дают флаги кости.
    pub fn flag_rotation(&self) -> f64 {
        let mut extra = 0.0;
        if self.rotated {
            extra += 180.0;
        }
        if self.compensate {
            extra -= 180.0;
        }
        extra
    }
}

/// Нормализованные значения концов кости.
///
/// Флаги `rotated` и `compensate` взаимно гасят друг друга:
/// если выставлен ровно один из них, пара разворачивается.
pub fn normalize_end_values(tile: &Tile) -> (PipValue, PipValue) {
    let [a, b] = tile.end_values;
    if tile.rotated ^ tile.compensate {
        (b, a)
    } else {
        (a, b)
    }
}

impl fmt::Display for Tile {
    /// Формат вида `[3|5]` в нормализованном порядке.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (l, r) = self.normalized_end_values();
        write!(f, "[{l}|{r}]")
    }
}
