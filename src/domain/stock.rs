use serde::{Deserialize, Serialize};

use crate::domain::tile::TileId;

/// Прикуп: кости, которые ещё не розданы. Верх прикупа = конец вектора.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stock {
    pub tiles: Vec<TileId>,
}

impl Stock {
    pub fn new(tiles: Vec<TileId>) -> Self {
        Self { tiles }
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

    /// Взять n костей сверху (первая взятая идёт первой в результате).
    pub fn draw_n(&mut self, n: usize) -> Vec<TileId> {
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            if let Some(id) = self.tiles.pop() {
                taken.push(id);
            } else {
                break;
            }
        }
        taken
    }

    /// Убрать конкретную кость (её вытянули перетаскиванием).
    pub fn remove(&mut self, id: TileId) -> bool {
        let before = self.tiles.len();
        self.tiles.retain(|&t| t != id);
        self.tiles.len() != before
    }
}
