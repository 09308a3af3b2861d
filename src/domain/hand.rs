use serde::{Deserialize, Serialize};

use crate::domain::tile::TileId;

/// Рука игрока: кости, которые ещё не сыграны.
/// Порядок в векторе = порядок раскладки слева направо.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub tiles: Vec<TileId>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.contains(&id)
    }

    /// Индекс кости в руке (если она там есть).
    pub fn position(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|&t| t == id)
    }

    /// Добавить кость в конец руки.
    pub fn push(&mut self, id: TileId) {
        self.tiles.push(id);
    }

    /// Убрать кость из руки. Возвращает true, если она там была.
    pub fn remove(&mut self, id: TileId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.tiles.remove(idx);
                true
            }
            None => false,
        }
    }
}
