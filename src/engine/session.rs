// src/engine/session.rs

use log::{debug, warn};

use crate::domain::game::{GameConfig, GameState};
use crate::domain::{DropZone, GameId, TileId};
use crate::engine::actions::{DragEvent, DragPhase};
use crate::engine::errors::EngineError;
use crate::engine::game_history::{GameEventKind, GameHistory};
use crate::engine::game_loop::{
    self, board_batch, hand_batch, stock_batch, DealOutcome, DragFeedback, ReleaseOutcome,
};
use crate::engine::validation;
use crate::engine::RandomSource;
use crate::infra::ids::IdGenerator;
use crate::layout::TransformBatch;

/// Ответ сессии на событие перетаскивания.
#[derive(Clone, Debug, PartialEq)]
pub enum DragResponse {
    Feedback(DragFeedback),
    Released(ReleaseOutcome),
}

/// Одна партия в памяти: конфиг + состояние + история.
///
/// Единственный владелец `GameState`; все изменения идут через `&mut self`.
pub struct GameSession {
    ids: IdGenerator,
    game_id: GameId,
    config: GameConfig,
    state: GameState,
    history: GameHistory,
}

impl GameSession {
    /// Начать новую партию с раздачей.
    pub fn start<R: RandomSource>(
        config: GameConfig,
        rng: &mut R,
    ) -> Result<(Self, DealOutcome), EngineError> {
        let ids = IdGenerator::new();
        let game_id = ids.next_game_id();
        let (state, deal) = game_loop::start_game(&config, rng, &ids)?;

        let mut session = Self {
            ids,
            game_id,
            config,
            state,
            history: GameHistory::new(),
        };
        session.record_start(&deal);
        Ok((session, deal))
    }

    /// Начать заново с тем же конфигом. Id костей новой колоды не пересекаются со старыми.
    pub fn restart<R: RandomSource>(&mut self, rng: &mut R) -> Result<DealOutcome, EngineError> {
        let (state, deal) = game_loop::start_game(&self.config, rng, &self.ids)?;
        self.game_id = self.ids.next_game_id();
        self.state = state;
        self.history = GameHistory::new();
        self.record_start(&deal);
        Ok(deal)
    }

    fn record_start(&mut self, deal: &DealOutcome) {
        self.history.push(GameEventKind::GameStarted {
            game_id: self.game_id,
            variant: self.config.variant,
            tile_count: self.state.deck.len(),
        });
        self.history.push(GameEventKind::HandDealt {
            tiles: deal.dealt.clone(),
        });
        debug!("session {} started", self.game_id);
    }

    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Обработать событие от слоя ввода.
    pub fn handle(&mut self, event: DragEvent) -> Result<DragResponse, EngineError> {
        match event.phase {
            DragPhase::Move => self.drag_over(event.tile_id, event.zone).map(DragResponse::Feedback),
            DragPhase::Release => self.release(event.tile_id, event.zone).map(DragResponse::Released),
        }
    }

    /// Кость двигается над зоной.
    pub fn drag_over(
        &mut self,
        tile_id: TileId,
        zone: Option<DropZone>,
    ) -> Result<DragFeedback, EngineError> {
        let feedback = game_loop::drag_over(&mut self.state, &self.config, tile_id, zone)
            .map_err(|e| {
                warn!("drag_over rejected: {e}");
                e
            })?;
        if feedback.flip.is_some() {
            self.history.push(GameEventKind::TileFlipped { tile_id });
        }
        Ok(feedback)
    }

    /// Кость отпущена.
    pub fn release(
        &mut self,
        tile_id: TileId,
        zone: Option<DropZone>,
    ) -> Result<ReleaseOutcome, EngineError> {
        let outcome = game_loop::release(&mut self.state, &self.config, tile_id, zone)
            .map_err(|e| {
                warn!("release rejected: {e}");
                e
            })?;

        match &outcome {
            ReleaseOutcome::Placed { placed, .. } => {
                self.history.push(GameEventKind::TilePlaced {
                    tile_id: placed.tile_id,
                    zone: placed.zone,
                    flipped: placed.flipped,
                    from: placed.from,
                });
            }
            ReleaseOutcome::ReturnedToHand { rejected_zone, .. } => {
                if let Some(z) = rejected_zone {
                    self.history.push(GameEventKind::MoveRejected { tile_id, zone: *z });
                }
                self.history.push(GameEventKind::TileReturned { tile_id });
            }
            ReleaseOutcome::DrawnToHand { rejected_zone, .. } => {
                if let Some(z) = rejected_zone {
                    self.history.push(GameEventKind::MoveRejected { tile_id, zone: *z });
                }
                self.history.push(GameEventKind::TileDrawn { tile_id });
            }
        }

        Ok(outcome)
    }

    pub fn board_transforms(&self) -> TransformBatch {
        board_batch(&self.state, &self.config)
    }

    pub fn hand_transforms(&self) -> TransformBatch {
        hand_batch(&self.state, &self.config)
    }

    pub fn stock_transforms(&self) -> TransformBatch {
        stock_batch(&self.state, &self.config)
    }

    pub fn legal_moves(&self) -> Vec<(TileId, DropZone)> {
        validation::legal_moves(&self.state)
    }

    pub fn is_blocked(&self) -> bool {
        validation::is_blocked(&self.state)
    }
}
