//! Доменная модель домино: кости, колода, рука, прикуп, цепочка на столе, зоны.

pub mod board;
pub mod deck;
pub mod game;
pub mod hand;
pub mod stock;
pub mod tile;
pub mod zone;

/// Идентификатор партии.
pub type GameId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Tile и т.п.
pub use board::*;
pub use deck::*;
pub use game::*;
pub use hand::*;
pub use stock::*;
pub use tile::*;
pub use zone::*;
