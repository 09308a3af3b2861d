use serde::{Deserialize, Serialize};

use crate::domain::tile::{PipValue, Tile, TileId};

/// Набор костей одной партии.
///
/// Состав колоды не меняется после создания: кости только переезжают
/// между прикупом, рукой и столом. Перемешивание делает engine (через RNG), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub max_pips: PipValue,
    pub tiles: Vec<Tile>,
}

impl Deck {
    /// Полный набор "дубль-N" в порядке (1,1), (1,2) … (N,N).
    /// Все кости неперевёрнутые, id берутся из `next_id`.
    pub fn ordered(max_pips: PipValue, mut next_id: impl FnMut() -> TileId) -> Self {
        let mut tiles = Vec::with_capacity(Self::expected_len(max_pips));
        for low in 1..=max_pips {
            for high in low..=max_pips {
                tiles.push(Tile::new(next_id(), [low, high], false));
            }
        }
        Deck { max_pips, tiles }
    }

    /// Сколько костей в наборе "дубль-N": N(N+1)/2.
    pub fn expected_len(max_pips: PipValue) -> usize {
        let n = max_pips as usize;
        n * (n + 1) / 2
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Id всех костей в текущем порядке колоды.
    pub fn ids(&self) -> Vec<TileId> {
        self.tiles.iter().map(|t| t.id).collect()
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.iter().any(|t| t.id == id)
    }

    /// Найти кость по id (для id, пришедших снаружи).
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.iter_mut().find(|t| t.id == id)
    }

    /// Кость по id, который взят из самого состояния игры.
    ///
    /// # Panics
    /// Если такой кости нет: это нарушение инварианта, а не ошибка хода.
    pub fn tile(&self, id: TileId) -> &Tile {
        match self.get(id) {
            Some(tile) => tile,
            None => panic!("Tile with id {id} not found"),
        }
    }

    /// См. [`Deck::tile`].
    pub fn tile_mut(&mut self, id: TileId) -> &mut Tile {
        match self.get_mut(id) {
            Some(tile) => tile,
            None => panic!("Tile with id {id} not found"),
        }
    }
}
