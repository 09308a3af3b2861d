//! Движок домино: проверка ходов, выкладка костей, подсветка зон.
//!
//! Высокоуровневый объект: `GameSession`
//! Основные операции:
//!   - `start_game` – сгенерировать колоду и раздать руку
//!   - `drag_over` – подсветить зоны, при необходимости перевернуть кость
//!   - `release` – положить кость или вернуть её в руку

pub mod actions;
pub mod errors;
pub mod game_history;
pub mod game_loop;
pub mod session;
pub mod validation;

pub use actions::{DragEvent, DragPhase};
pub use errors::EngineError;
pub use game_history::{GameEvent, GameEventKind, GameHistory};
pub use game_loop::{
    drag_over, generate_deck, place, release, start_game, DealOutcome, DragFeedback,
    FlipFeedback, PlacedTile, Placement, ReleaseOutcome,
};
pub use session::{DragResponse, GameSession};
pub use validation::{
    active_zones, boundary_value, can_drop, can_place, check_placement, is_blocked, legal_moves,
    Orientation,
};

/// Источник случайности для движка.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Честная монетка.
    fn coin_flip(&mut self) -> bool;
}
