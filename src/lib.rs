//! Движок домино для одного экрана: игрок перетаскивает кости из руки на стол.
//!
//! Здесь нет отрисовки и анимации: движок принимает события "кость над зоной" /
//! "кость отпущена", проверяет ход, меняет состояние и отдаёт целевые
//! трансформации костей для слоя отображения.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod layout;

pub use api::{Command, CommandResponse, Query, QueryResponse};
pub use domain::{DropZone, GameConfig, GameState, Tile, TileId};
pub use engine::{EngineError, GameSession};
