use serde::{Deserialize, Serialize};

use crate::domain::tile::TileId;

/// Конец цепочки, к которому приставляют кость.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Цепочка сыгранных костей слева направо.
///
/// Меняется только добавлением одной кости в начало или в конец;
/// никогда не переупорядочивается и не укорачивается.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    pub tiles: Vec<TileId>,
}

impl Board {
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

    /// Крайняя кость с нужной стороны.
    pub fn end(&self, side: Side) -> Option<TileId> {
        match side {
            Side::Left => self.tiles.first().copied(),
            Side::Right => self.tiles.last().copied(),
        }
    }

    pub fn push(&mut self, side: Side, id: TileId) {
        match side {
            Side::Left => self.tiles.insert(0, id),
            Side::Right => self.tiles.push(id),
        }
    }
}
