//! Интеграционные тесты для GameSession: раздача, история, полная партия.

use std::collections::HashSet;

use domino_engine::domain::*;
use domino_engine::engine::*;
use domino_engine::infra::DeterministicRng;

/// RNG без случайности: колода не перемешивается, кости не переворачиваются.
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}

    fn coin_flip(&mut self) -> bool {
        false
    }
}

#[test]
fn start_deals_hand_from_top_of_stock() {
    let config = GameConfig::default();
    let (session, deal) = GameSession::start(config.clone(), &mut DummyRng).unwrap();
    let state = session.state();

    assert_eq!(session.game_id(), 1);
    assert_eq!(state.deck.len(), 28);
    assert_eq!(state.hand.len(), 5);
    assert_eq!(state.stock.len(), 23);
    assert!(state.board.is_empty());

    // неперемешанная колода: сверху прикупа лежат последние кости
    let expected: Vec<TileId> = (24..=28).rev().map(TileId).collect();
    assert_eq!(deal.dealt, expected);
    assert_eq!(state.hand.tiles, expected);

    assert_eq!(deal.initial.len(), 28);
    assert_eq!(deal.initial.duration_secs, 0.0);
    assert_eq!(deal.hand.len(), 5);
    assert_eq!(deal.hand.order, expected);
    assert_eq!(deal.hand.delay_secs, config.animation.deal_delay_secs);
    assert_eq!(deal.hand.stagger_secs, config.animation.deal_stagger_secs);

    let kinds: Vec<_> = session.history().events.iter().map(|e| e.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            GameEventKind::GameStarted {
                game_id: 1,
                variant: DeckVariant::DoubleSeven,
                tile_count: 28,
            },
            GameEventKind::HandDealt { tiles: expected },
        ]
    );
}

#[test]
fn start_rejects_invalid_config() {
    let mut config = GameConfig::default();
    config.hand_size = 0;
    let err = GameSession::start(config, &mut DummyRng).err();
    assert!(matches!(err, Some(EngineError::InvalidConfig(_))));
}

#[test]
fn seeded_decks_are_reproducible() {
    let config = GameConfig {
        variant: DeckVariant::DoubleSix,
        ..GameConfig::default()
    };
    let (a, _) = GameSession::start(config.clone(), &mut DeterministicRng::from_seed(42)).unwrap();
    let (b, _) = GameSession::start(config, &mut DeterministicRng::from_seed(42)).unwrap();

    assert_eq!(a.state(), b.state());
    assert_eq!(a.state().deck.len(), 21);

    let pairs: HashSet<[PipValue; 2]> = a.state().deck.tiles.iter().map(|t| t.end_values()).collect();
    assert_eq!(pairs.len(), 21);
}

#[test]
fn restart_uses_fresh_ids() {
    let (mut session, first) = GameSession::start(GameConfig::default(), &mut DummyRng).unwrap();
    let old_ids: HashSet<TileId> = session.state().deck.ids().into_iter().collect();

    let second = session.restart(&mut DummyRng).unwrap();
    let new_ids: HashSet<TileId> = session.state().deck.ids().into_iter().collect();

    assert_eq!(session.game_id(), 2);
    assert!(old_ids.is_disjoint(&new_ids));
    assert_ne!(first.dealt, second.dealt);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn handle_routes_drag_events_and_records_history() {
    let (mut session, deal) = GameSession::start(GameConfig::default(), &mut DummyRng).unwrap();
    let first = deal.dealt[0];

    let resp = session
        .handle(DragEvent::moved(first, Some(DropZone::Opening)))
        .unwrap();
    match resp {
        DragResponse::Feedback(fb) => assert!(fb.highlighted.contains(&DropZone::Opening)),
        other => panic!("unexpected response: {other:?}"),
    }

    let resp = session
        .handle(DragEvent::released(first, Some(DropZone::Opening)))
        .unwrap();
    assert!(matches!(
        resp,
        DragResponse::Released(ReleaseOutcome::Placed { .. })
    ));
    assert_eq!(session.history().placements(), 1);

    // второй раз ту же кость не положить
    assert_eq!(
        session.handle(DragEvent::released(first, Some(DropZone::Left))),
        Err(EngineError::TileAlreadyOnBoard(first))
    );

    let last = session.history().events.last().unwrap();
    assert_eq!(last.index as usize, session.history().len() - 1);
    assert!(matches!(
        last.kind,
        GameEventKind::TilePlaced {
            zone: DropZone::Opening,
            from: TileLocation::Hand,
            ..
        }
    ));
}

#[test]
fn rejected_release_is_recorded() {
    let (mut session, _) = GameSession::start(GameConfig::default(), &mut DummyRng).unwrap();
    let tile = session.state().hand.tiles[0];

    // на пустом столе левая зона неактивна
    let out = session.release(tile, Some(DropZone::Left)).unwrap();
    assert!(matches!(out, ReleaseOutcome::ReturnedToHand { .. }));

    let kinds: Vec<_> = session.history().events.iter().skip(2).map(|e| e.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            GameEventKind::MoveRejected {
                tile_id: tile,
                zone: DropZone::Left
            },
            GameEventKind::TileReturned { tile_id: tile },
        ]
    );
}

/// Жадный бот доигрывает партию; инварианты держатся на каждом шаге.
#[test]
fn greedy_game_keeps_invariants() {
    for seed in 0..20u64 {
        let mut rng = DeterministicRng::from_seed(seed);
        let (mut session, _) = GameSession::start(GameConfig::default(), &mut rng).unwrap();

        for _ in 0..60 {
            let next = session.legal_moves().first().copied();
            match next {
                Some((tile_id, zone)) => {
                    session.drag_over(tile_id, Some(zone)).unwrap();
                    let out = session.release(tile_id, Some(zone)).unwrap();
                    assert!(matches!(out, ReleaseOutcome::Placed { .. }));
                }
                None => match session.state().stock.tiles.last().copied() {
                    Some(id) => {
                        let out = session.release(id, None).unwrap();
                        assert!(matches!(out, ReleaseOutcome::DrawnToHand { .. }));
                    }
                    None => break,
                },
            }

            let state = session.state();
            assert_eq!(
                state.board.len() + state.hand.len() + state.stock.len(),
                state.deck.len()
            );

            // соседние кости цепочки сходятся одинаковыми значениями
            for pair in state.board.tiles.windows(2) {
                let (_, right) = state.deck.tile(pair[0]).normalized_end_values();
                let (left, _) = state.deck.tile(pair[1]).normalized_end_values();
                assert_eq!(right, left, "seed {seed}: chain broken");
            }

            assert_eq!(session.board_transforms().len(), state.board.len());
            assert_eq!(session.hand_transforms().len(), state.hand.len());
            assert_eq!(session.stock_transforms().len(), state.stock.len());

            if state.hand.is_empty() {
                break;
            }
        }

        assert_eq!(
            session.history().placements(),
            session.state().board.len()
        );
    }
}
