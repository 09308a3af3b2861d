//! Интеграционные тесты для infra: ID, RNG, маппинг в DTO.

use std::collections::HashSet;

use domino_engine::domain::*;
use domino_engine::engine::{generate_deck, RandomSource};
use domino_engine::infra::*;

use proptest::prelude::*;

#[test]
fn id_generator_is_monotonic() {
    let ids = IdGenerator::new();
    assert_eq!(ids.next_tile_id(), TileId(1));
    assert_eq!(ids.next_tile_id(), TileId(2));
    assert_eq!(ids.next_game_id(), 1);
    assert_eq!(ids.next_game_id(), 2);
    assert_eq!(ids.next_tile_id(), TileId(3));
}

#[test]
fn deterministic_rng_repeats_sequence() {
    let mut a = DeterministicRng::from_seed(7);
    let mut b = DeterministicRng::from_seed(7);

    let mut xs: Vec<u32> = (0..50).collect();
    let mut ys = xs.clone();
    a.shuffle(&mut xs);
    b.shuffle(&mut ys);
    assert_eq!(xs, ys);

    let flips_a: Vec<bool> = (0..32).map(|_| a.coin_flip()).collect();
    let flips_b: Vec<bool> = (0..32).map(|_| b.coin_flip()).collect();
    assert_eq!(flips_a, flips_b);
}

#[test]
fn generated_deck_is_complete_and_shuffled() {
    let ids = IdGenerator::new();
    let mut rng = DeterministicRng::from_seed(1);
    let deck = generate_deck(7, &mut rng, &ids);

    assert_eq!(deck.len(), 28);
    let pairs: HashSet<[PipValue; 2]> = deck.tiles.iter().map(|t| t.end_values()).collect();
    assert_eq!(pairs.len(), 28);
    let tile_ids: HashSet<TileId> = deck.tiles.iter().map(|t| t.id).collect();
    assert_eq!(tile_ids.len(), 28);

    assert!(deck.tiles.iter().any(|t| t.rotated));
    assert!(deck.tiles.iter().any(|t| !t.rotated));
    assert!(deck.tiles.iter().all(|t| !t.compensate));

    let ordered: Vec<TileId> = (1..=28).map(TileId).collect();
    assert_ne!(deck.ids(), ordered);
}

#[test]
fn system_rng_keeps_elements() {
    let mut rng = SystemRng;
    let mut xs: Vec<u32> = (0..20).collect();
    rng.shuffle(&mut xs);
    xs.sort();
    assert_eq!(xs, (0..20).collect::<Vec<_>>());
}

#[test]
fn map_game_hides_stock() {
    let ids = IdGenerator::new();
    let mut state = GameState::new(Deck::ordered(6, || ids.next_tile_id()));

    let opening = TileId(20);
    state.stock.remove(opening);
    state.board.push(Side::Right, opening);
    let in_hand = TileId(3);
    state.stock.remove(in_hand);
    state.hand.push(in_hand);

    let view = map_game_to_dto(9, &state);
    assert_eq!(view.game_id, 9);
    assert_eq!(view.stock_count, 19);
    assert_eq!(view.board.len(), 1);
    assert_eq!(view.hand.len(), 1);

    let opening_values = state.deck.tile(opening).end_values();
    assert_eq!(view.board[0].end_values, opening_values);
    assert_eq!(view.left_value, Some(opening_values[0]));
    assert_eq!(view.right_value, Some(opening_values[1]));

    let dto = map_tile_to_dto(&state, in_hand);
    assert_eq!(dto.location, TileLocation::Hand);
    assert_eq!(dto.normalized, (1, 3));
}

proptest! {
    /// Для любого N колода = все пары 1 <= i <= j <= N, по одной, с разными id.
    #[test]
    fn generated_deck_matches_enumerated_pairs(max_pips in 1u8..=9, seed: u64) {
        let ids = IdGenerator::new();
        let mut rng = DeterministicRng::from_seed(seed);
        let deck = generate_deck(max_pips, &mut rng, &ids);

        let n = max_pips as usize;
        prop_assert_eq!(deck.len(), n * (n + 1) / 2);
        prop_assert_eq!(deck.len(), Deck::expected_len(max_pips));
        prop_assert_eq!(deck.max_pips, max_pips);

        let mut got: Vec<[PipValue; 2]> = deck.tiles.iter().map(|t| t.end_values()).collect();
        got.sort();
        let mut expected = Vec::new();
        for i in 1..=max_pips {
            for j in i..=max_pips {
                expected.push([i, j]);
            }
        }
        prop_assert_eq!(got, expected);

        let tile_ids: HashSet<TileId> = deck.tiles.iter().map(|t| t.id).collect();
        prop_assert_eq!(tile_ids.len(), deck.len());
        prop_assert!(deck.tiles.iter().all(|t| !t.compensate));
    }
}
