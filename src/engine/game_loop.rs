use std::collections::BTreeSet;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::domain::board::Side;
use crate::domain::deck::Deck;
use crate::domain::game::{GameConfig, GameState, TileLocation};
use crate::domain::tile::{PipValue, TileId};
use crate::domain::zone::DropZone;
use crate::engine::errors::EngineError;
use crate::engine::validation::{active_zones, check_placement, Orientation};
use crate::engine::RandomSource;
use crate::infra::ids::IdGenerator;
use crate::layout::{
    compute_board_transforms, compute_hand_transforms, compute_stock_transforms, hand_slot,
    Transform, TransformBatch,
};

/// Результат раздачи в начале партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DealOutcome {
    /// Кости, попавшие в руку (в порядке руки).
    pub dealt: Vec<TileId>,
    /// Стартовая позиция всех костей: стопка прикупа, без анимации.
    pub initial: TransformBatch,
    /// Выезд розданных костей в руку (с задержкой и "лесенкой").
    pub hand: TransformBatch,
}

/// Кость, успешно выложенная на стол.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedTile {
    pub tile_id: TileId,
    pub zone: DropZone,
    /// Куда реально добавлена кость (первая кость идёт в конец).
    pub side: Side,
    /// Движок перевернул кость перед тем, как положить.
    pub flipped: bool,
    /// Откуда кость пришла.
    pub from: TileLocation,
}

/// Исход попытки положить кость.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Placement {
    Placed(PlacedTile),
    /// Ход невозможен; состояние не менялось.
    Rejected,
}

/// Исход отпускания кости.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum ReleaseOutcome {
    /// Ход принят: новая раскладка стола и (если рука изменилась) руки.
    Placed {
        placed: PlacedTile,
        board: TransformBatch,
        hand: Option<TransformBatch>,
    },
    /// Кость была в руке и возвращается на своё место.
    ReturnedToHand {
        tile_id: TileId,
        rejected_zone: Option<DropZone>,
        transform: Transform,
        duration_secs: f64,
    },
    /// Кость из прикупа отпущена мимо зон и забрана в руку.
    DrawnToHand {
        tile_id: TileId,
        rejected_zone: Option<DropZone>,
        hand: TransformBatch,
    },
}

/// Переворот кости во время перетаскивания.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct FlipFeedback {
    pub rotation_degrees: f64,
    pub duration_secs: f64,
}

/// Ответ на движение кости: какие зоны показать и подсветить.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DragFeedback {
    pub tile_id: TileId,
    /// Зоны, видимые при текущем состоянии стола.
    pub active_zones: BTreeSet<DropZone>,
    /// Активная зона под костью.
    pub hovered: Option<DropZone>,
    /// Зоны, куда кость можно отпустить прямо сейчас.
    pub highlighted: BTreeSet<DropZone>,
    /// Кость перевернули, чтобы она подошла.
    pub flip: Option<FlipFeedback>,
}

/// Сгенерировать перемешанную колоду "дубль-`max_pips`".
///
/// Каждая кость получает случайную начальную ориентацию.
pub fn generate_deck<R: RandomSource>(max_pips: PipValue, rng: &mut R, ids: &IdGenerator) -> Deck {
    let mut deck = Deck::ordered(max_pips, || ids.next_tile_id());
    for tile in deck.tiles.iter_mut() {
        tile.rotated = rng.coin_flip();
    }
    rng.shuffle(&mut deck.tiles);
    deck
}

/// Старт новой партии:
/// - проверяет конфиг;
/// - генерирует колоду, все кости кладёт в прикуп;
/// - раздаёт `hand_size` костей сверху прикупа в руку.
pub fn start_game<R: RandomSource>(
    config: &GameConfig,
    rng: &mut R,
    ids: &IdGenerator,
) -> Result<(GameState, DealOutcome), EngineError> {
    config.validate()?;

    let deck = generate_deck(config.variant.max_pips(), rng, ids);
    let mut state = GameState::new(deck);

    let dealt = state.stock.draw_n(config.hand_size);
    for &id in &dealt {
        state.hand.push(id);
    }

    debug!(
        "game started: variant={:?}, tiles={}, dealt={}",
        config.variant,
        state.deck.len(),
        dealt.len()
    );

    let all_ids = state.deck.ids();
    let initial = TransformBatch::new(
        compute_stock_transforms(&state.deck, &all_ids, config.viewport_width, &config.layout),
        0.0,
    );

    let mut hand = hand_batch(&state, config);
    hand.duration_secs = config.animation.deal_secs;
    hand.delay_secs = config.animation.deal_delay_secs;
    hand.stagger_secs = config.animation.deal_stagger_secs;
    hand.order = dealt.clone();

    Ok((
        state,
        DealOutcome {
            dealt,
            initial,
            hand,
        },
    ))
}

/// Где лежит кость, которую можно двигать (рука или прикуп).
fn movable_location(state: &GameState, tile_id: TileId) -> Result<TileLocation, EngineError> {
    match state.location(tile_id) {
        Some(TileLocation::Board) => Err(EngineError::TileAlreadyOnBoard(tile_id)),
        Some(loc) => Ok(loc),
        None => Err(EngineError::UnknownTile(tile_id)),
    }
}

/// Положить кость в зону.
///
/// Если ход невозможен, возвращается `Placement::Rejected` и состояние не меняется.
/// При успехе кость убирается из руки/прикупа, при необходимости переворачивается;
/// добавленная справа кость получает флаг `compensate`.
pub fn place(state: &mut GameState, tile_id: TileId, zone: DropZone) -> Result<Placement, EngineError> {
    let from = movable_location(state, tile_id)?;

    if !zone.is_active(state.board.len()) {
        return Ok(Placement::Rejected);
    }

    let (side, flipped) = match zone.side() {
        None => (Side::Right, false),
        Some(side) => match check_placement(state, state.deck.tile(tile_id), side) {
            Some(Orientation::AsIs) => (side, false),
            Some(Orientation::Flipped) => (side, true),
            None => return Ok(Placement::Rejected),
        },
    };

    if flipped {
        state.deck.tile_mut(tile_id).flip();
    }

    match from {
        TileLocation::Hand => {
            state.hand.remove(tile_id);
        }
        TileLocation::Stock => {
            state.stock.remove(tile_id);
        }
        TileLocation::Board => {}
    }

    state.board.push(side, tile_id);
    if zone == DropZone::Right {
        state.deck.tile_mut(tile_id).mark_compensated();
    }

    debug!(
        "placed {} via {} zone (flipped={}), board len={}",
        state.deck.tile(tile_id),
        zone,
        flipped,
        state.board.len()
    );

    Ok(Placement::Placed(PlacedTile {
        tile_id,
        zone,
        side,
        flipped,
        from,
    }))
}

/// Кость отпущена над `zone` (или мимо всех зон).
pub fn release(
    state: &mut GameState,
    config: &GameConfig,
    tile_id: TileId,
    zone: Option<DropZone>,
) -> Result<ReleaseOutcome, EngineError> {
    movable_location(state, tile_id)?;

    if let Some(z) = zone {
        if let Placement::Placed(placed) = place(state, tile_id, z)? {
            let hand = if placed.from == TileLocation::Hand {
                Some(hand_batch(state, config))
            } else {
                None
            };
            return Ok(ReleaseOutcome::Placed {
                placed,
                board: board_batch(state, config),
                hand,
            });
        }
    }

    match state.hand.position(tile_id) {
        Some(index) => {
            let (x, y) = hand_slot(index, state.hand.len(), config.viewport_width, &config.layout);
            let rotation = if state.deck.tile(tile_id).rotated { 180.0 } else { 0.0 };
            Ok(ReleaseOutcome::ReturnedToHand {
                tile_id,
                rejected_zone: zone,
                transform: Transform::new(x, y, rotation),
                duration_secs: config.animation.return_secs,
            })
        }
        None => {
            state.stock.remove(tile_id);
            state.hand.push(tile_id);
            debug!("drew {} into hand, hand len={}", tile_id, state.hand.len());
            Ok(ReleaseOutcome::DrawnToHand {
                tile_id,
                rejected_zone: zone,
                hand: hand_batch(state, config),
            })
        }
    }
}

/// Кость двигается над `zone`: вычислить подсветку.
///
/// Если кость подходит к концу только в перевёрнутом виде, она переворачивается сразу.
pub fn drag_over(
    state: &mut GameState,
    config: &GameConfig,
    tile_id: TileId,
    zone: Option<DropZone>,
) -> Result<DragFeedback, EngineError> {
    movable_location(state, tile_id)?;

    let active = active_zones(state);
    let hovered = zone.filter(|z| active.contains(z));

    let mut highlighted = BTreeSet::new();
    let mut flip = None;

    if let Some(z) = hovered {
        match z.side() {
            None => {
                highlighted.insert(z);
            }
            Some(side) => match check_placement(state, state.deck.tile(tile_id), side) {
                Some(Orientation::AsIs) => {
                    highlighted.insert(z);
                }
                Some(Orientation::Flipped) => {
                    let tile = state.deck.tile_mut(tile_id);
                    tile.flip();
                    flip = Some(FlipFeedback {
                        rotation_degrees: if tile.rotated { 180.0 } else { 0.0 },
                        duration_secs: config.animation.flip_secs,
                    });
                    highlighted.insert(z);
                }
                None => {}
            },
        }
    }

    trace!(
        "drag {} over {:?}: highlighted={:?}, flipped={}",
        tile_id,
        hovered,
        highlighted,
        flip.is_some()
    );

    Ok(DragFeedback {
        tile_id,
        active_zones: active,
        hovered,
        highlighted,
        flip,
    })
}

/// Пересчитанная раскладка стола.
pub fn board_batch(state: &GameState, config: &GameConfig) -> TransformBatch {
    TransformBatch::new(
        compute_board_transforms(&state.deck, &state.board.tiles, &config.layout),
        config.animation.board_secs,
    )
}

/// Пересчитанная раскладка руки.
pub fn hand_batch(state: &GameState, config: &GameConfig) -> TransformBatch {
    TransformBatch::new(
        compute_hand_transforms(
            &state.deck,
            &state.hand.tiles,
            config.viewport_width,
            &config.layout,
        ),
        config.animation.hand_secs,
    )
}

/// Раскладка прикупа (без анимации).
pub fn stock_batch(state: &GameState, config: &GameConfig) -> TransformBatch {
    TransformBatch::new(
        compute_stock_transforms(
            &state.deck,
            &state.stock.tiles,
            config.viewport_width,
            &config.layout,
        ),
        0.0,
    )
}
