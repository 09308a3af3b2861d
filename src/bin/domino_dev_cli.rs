// src/bin/domino_dev_cli.rs

use std::error::Error;

use clap::{Parser, ValueEnum};
use log::{info, warn};

use domino_engine::api::{execute_command, Command, CommandResponse};
use domino_engine::domain::{DeckVariant, GameConfig};
use domino_engine::engine::{GameSession, RandomSource, ReleaseOutcome};
use domino_engine::infra::{init_logging, map_game_to_dto, DeterministicRng, SystemRng};
use domino_engine::layout::TransformBatch;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum VariantCli {
    /// 21 кость (1–6)
    Six,
    /// 28 костей (1–7)
    Seven,
}

impl From<VariantCli> for DeckVariant {
    fn from(v: VariantCli) -> Self {
        match v {
            VariantCli::Six => DeckVariant::DoubleSix,
            VariantCli::Seven => DeckVariant::DoubleSeven,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "domino_dev_cli", about = "Plays a dominoes game with a greedy bot and prints the layout")]
struct Args {
    /// Seed для детерминированной колоды (без него — системный RNG)
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Набор костей
    #[arg(long, value_enum)]
    variant: Option<VariantCli>,

    /// Сколько костей раздать в руку
    #[arg(long)]
    hand_size: Option<usize>,

    /// JSON-файл с GameConfig
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Максимум ходов бота
    #[arg(short = 't', long, default_value_t = 40)]
    turns: usize,

    /// Печатать ответы движка в JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Уровень логов, если не задан RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let _logger = match init_logging(&args.log_level) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("[CLI] logging disabled: {e}");
            None
        }
    };

    let result = match args.seed {
        Some(seed) => run(&args, &mut DeterministicRng::from_seed(seed)),
        None => run(&args, &mut SystemRng),
    };

    if let Err(e) = result {
        eprintln!("[CLI] error: {e}");
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<GameConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    if let Some(v) = args.variant {
        config.variant = v.into();
    }
    if let Some(n) = args.hand_size {
        config.hand_size = n;
    }
    config.validate()?;
    Ok(config)
}

fn run<R: RandomSource>(args: &Args, rng: &mut R) -> Result<(), Box<dyn Error>> {
    let config = load_config(args)?;
    let (mut session, deal) = GameSession::start(config, rng)?;

    info!(
        "game {} started: {} tiles, hand={}",
        session.game_id(),
        session.state().deck.len(),
        deal.dealt.len()
    );
    print_hand(&session);

    for turn in 1..=args.turns {
        let next = session.legal_moves().first().copied();

        let command = match next {
            Some((tile_id, zone)) => {
                // Как живой игрок: сначала провести кость над зоной, потом отпустить.
                let hover = execute_command(
                    &mut session,
                    Command::DragOver {
                        tile_id,
                        zone: Some(zone),
                    },
                    rng,
                )?;
                if let CommandResponse::DragFeedback(fb) = &hover {
                    if fb.flip.is_some() {
                        println!("turn {turn}: {tile_id} flipped to fit the {zone} end");
                    }
                }
                Command::Release {
                    tile_id,
                    zone: Some(zone),
                }
            }
            None => match session.state().stock.tiles.last().copied() {
                Some(tile_id) => Command::Release {
                    tile_id,
                    zone: None,
                },
                None => {
                    println!("turn {turn}: blocked, stock is empty");
                    break;
                }
            },
        };

        let response = execute_command(&mut session, command, rng)?;
        if args.json {
            println!("{}", serde_json::to_string(&response)?);
        }

        if let CommandResponse::Released { outcome, .. } = &response {
            match outcome {
                ReleaseOutcome::Placed { placed, board, .. } => {
                    println!(
                        "turn {turn}: placed {} on the {} end",
                        session.state().deck.tile(placed.tile_id),
                        placed.zone
                    );
                    print_board(&session, board);
                }
                ReleaseOutcome::DrawnToHand { tile_id, .. } => {
                    println!("turn {turn}: drew {tile_id} from stock");
                }
                ReleaseOutcome::ReturnedToHand { tile_id, .. } => {
                    warn!("turn {turn}: {tile_id} returned to hand");
                }
            }
        }

        if session.state().hand.is_empty() {
            println!("hand is empty after {turn} turns");
            break;
        }
    }

    let view = map_game_to_dto(session.game_id(), session.state());
    println!(
        "final: board={} tiles, hand={}, stock={}, ends={:?}/{:?}",
        view.board.len(),
        view.hand.len(),
        view.stock_count,
        view.left_value,
        view.right_value
    );
    println!("history: {} events", session.history().len());
    Ok(())
}

fn print_hand(session: &GameSession) {
    let state = session.state();
    let tiles: Vec<String> = state
        .hand
        .tiles
        .iter()
        .map(|&id| state.deck.tile(id).to_string())
        .collect();
    println!("hand: {}", tiles.join(" "));
}

fn print_board(session: &GameSession, board: &TransformBatch) {
    let state = session.state();
    for &id in &state.board.tiles {
        if let Some(t) = board.get(id) {
            println!(
                "    {:>8} {} x={:>7.1} y={:>7.1} rot={:>5.1}",
                id.to_string(),
                state.deck.tile(id),
                t.x,
                t.y,
                t.rotation_degrees
            );
        }
    }
}
