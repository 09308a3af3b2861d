//! Интеграционные тесты для внешнего API: команды, запросы, ошибки.

use domino_engine::api::*;
use domino_engine::domain::*;
use domino_engine::engine::*;

struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}

    fn coin_flip(&mut self) -> bool {
        false
    }
}

fn new_session() -> GameSession {
    let (session, _) = GameSession::start(GameConfig::default(), &mut DummyRng).unwrap();
    session
}

#[test]
fn parse_command_from_json() {
    let cmd = parse_command(r#"{ "Release": { "tile_id": 7, "zone": "Left" } }"#).unwrap();
    assert_eq!(
        cmd,
        Command::Release {
            tile_id: TileId(7),
            zone: Some(DropZone::Left),
        }
    );

    let cmd = parse_command(r#"{ "DragOver": { "tile_id": 3, "zone": null } }"#).unwrap();
    assert_eq!(
        cmd,
        Command::DragOver {
            tile_id: TileId(3),
            zone: None,
        }
    );

    assert_eq!(parse_command(r#""NewGame""#).unwrap(), Command::NewGame);

    assert!(matches!(
        parse_command(r#"{ "Explode": {} }"#),
        Err(ApiError::BadRequest(_))
    ));
}

#[test]
fn execute_release_returns_updated_view() {
    let mut session = new_session();
    let tile = session.state().hand.tiles[0];

    let resp = execute_command(
        &mut session,
        Command::Release {
            tile_id: tile,
            zone: Some(DropZone::Opening),
        },
        &mut DummyRng,
    )
    .unwrap();

    match resp {
        CommandResponse::Released { outcome, game } => {
            assert!(matches!(outcome, ReleaseOutcome::Placed { .. }));
            assert_eq!(game.board.len(), 1);
            assert_eq!(game.board[0].tile_id, tile);
            assert_eq!(game.board[0].location, TileLocation::Board);
            assert_eq!(game.hand.len(), 4);
            assert_eq!(game.stock_count, 23);
            assert_eq!(game.active_zones, vec![DropZone::Left, DropZone::Right]);
            assert!(game.left_value.is_some() && game.right_value.is_some());
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn execute_drag_over_and_new_game() {
    let mut session = new_session();
    let tile = session.state().hand.tiles[0];

    let resp = execute_command(
        &mut session,
        Command::DragOver {
            tile_id: tile,
            zone: Some(DropZone::Opening),
        },
        &mut DummyRng,
    )
    .unwrap();
    assert!(matches!(resp, CommandResponse::DragFeedback(_)));

    let resp = execute_command(&mut session, Command::NewGame, &mut DummyRng).unwrap();
    match resp {
        CommandResponse::GameStarted { game, deal } => {
            assert_eq!(game.game_id, 2);
            assert_eq!(game.hand.len(), 5);
            assert!(game.board.is_empty());
            assert_eq!(game.active_zones, vec![DropZone::Opening]);
            assert_eq!(deal.dealt.len(), 5);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn engine_errors_map_to_api_errors() {
    let mut session = new_session();

    let err = execute_command(
        &mut session,
        Command::Release {
            tile_id: TileId(999),
            zone: None,
        },
        &mut DummyRng,
    )
    .unwrap_err();
    assert_eq!(err, ApiError::UnknownTile(TileId(999)));

    let tile = session.state().hand.tiles[0];
    session.release(tile, Some(DropZone::Opening)).unwrap();
    let err = execute_command(
        &mut session,
        Command::DragOver {
            tile_id: tile,
            zone: None,
        },
        &mut DummyRng,
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidCommand(_)));

    let config_err: ApiError = EngineError::InvalidConfig(ConfigError::Invalid("x".into())).into();
    assert!(matches!(config_err, ApiError::EngineError(_)));
}

#[test]
fn queries_do_not_change_state() {
    let session = new_session();
    let before = session.state().clone();

    match run_query(&session, &Query::GetGame) {
        QueryResponse::Game(game) => {
            assert_eq!(game.game_id, 1);
            assert_eq!(game.max_pips, 7);
            assert_eq!(game.left_value, None);
            assert!(!game.blocked);
        }
        other => panic!("unexpected response: {other:?}"),
    }

    assert_eq!(
        run_query(&session, &Query::ActiveZones),
        QueryResponse::ActiveZones(vec![DropZone::Opening])
    );

    match run_query(&session, &Query::HandTransforms) {
        QueryResponse::Transforms(batch) => assert_eq!(batch.len(), 5),
        other => panic!("unexpected response: {other:?}"),
    }
    match run_query(&session, &Query::StockTransforms) {
        QueryResponse::Transforms(batch) => assert_eq!(batch.len(), 23),
        other => panic!("unexpected response: {other:?}"),
    }
    match run_query(&session, &Query::BoardTransforms) {
        QueryResponse::Transforms(batch) => assert!(batch.is_empty()),
        other => panic!("unexpected response: {other:?}"),
    }
    match run_query(&session, &Query::LegalMoves) {
        // на пустой стол можно выложить любую кость
        QueryResponse::LegalMoves(moves) => assert_eq!(moves.len(), 5),
        other => panic!("unexpected response: {other:?}"),
    }
    match run_query(&session, &Query::History) {
        QueryResponse::History(events) => assert_eq!(events.len(), 2),
        other => panic!("unexpected response: {other:?}"),
    }

    assert_eq!(session.state(), &before);
}

#[test]
fn responses_serialize_to_json() {
    let mut session = new_session();
    let tile = session.state().hand.tiles[0];
    let resp = execute_command(
        &mut session,
        Command::Release {
            tile_id: tile,
            zone: Some(DropZone::Opening),
        },
        &mut DummyRng,
    )
    .unwrap();

    let json = serde_json::to_string(&resp).unwrap();
    assert!(json.contains("Released"));
    let back: CommandResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back, resp);
}
