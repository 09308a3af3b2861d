use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use crate::domain::{GameId, TileId};

/// Простая генерация ID на основе монотонных счётчиков.
///
/// Id костей уникальны в пределах генератора: новая колода той же сессии
/// получает новые id, старые никогда не переиспользуются.
#[derive(Debug)]
pub struct IdGenerator {
    tile_counter: AtomicU32,
    game_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            tile_counter: AtomicU32::new(1),
            game_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_tile_id(&self) -> TileId {
        TileId(self.tile_counter.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn next_game_id(&self) -> GameId {
        self.game_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
