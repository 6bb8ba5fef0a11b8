mod config;
mod input;
mod offline;
mod render;

use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::TicTacToeMode;
use common::{log, logger};

use config::{
    GameType, LaunchOverrides, LaunchPlan, TicTacToeOpponent, get_config_manager,
    get_default_config_path, plan_launch,
};
use offline::{GameIo, MemoryMatchSettings, TicTacToeSettings};
use render::PlayerNames;

#[derive(Parser)]
#[command(name = "game_center", about = "Tic-tac-toe, rock paper scissors and memory match in the terminal")]
struct Args {
    /// Game to start, defaults to the last one played.
    #[arg(value_enum)]
    game: Option<GameType>,

    #[arg(long, value_enum)]
    opponent: Option<TicTacToeOpponent>,

    #[arg(long)]
    name: Option<String>,

    /// Fixed seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_path = args.config.clone().unwrap_or_else(get_default_config_path);
    let config_manager = get_config_manager(config_path.clone());
    let stored = config_manager.get_config()?;
    log!("Loaded config from {}", config_path.display());

    let overrides = LaunchOverrides {
        game: args.game,
        opponent: args.opponent,
        name: args.name,
        seed: args.seed,
        save_config: args.save_config,
    };
    let plan = plan_launch(&stored, &overrides, &mut SessionRng::from_random())?;

    if plan.name_generated {
        log!("Generated player name {}", plan.player_name);
    }

    if plan.needs_save(&stored)
        && let Err(e) = config_manager.set_config(&plan.persisted)
    {
        log!("Failed to save config: {}", e);
        eprintln!("Warning: settings were not saved to {}: {}", config_path.display(), e);
    }

    let LaunchPlan {
        effective: config,
        game,
        player_name,
        ..
    } = plan;

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting {:?} for {} with seed {}", game, player_name, rng.seed());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut io = GameIo::new(stdin, std::io::stdout());

    match game {
        GameType::TicTacToe => {
            let mode = TicTacToeMode::from(config.tictactoe.opponent);
            let o = match mode {
                TicTacToeMode::VsBot => config.tictactoe.bot_name.clone(),
                TicTacToeMode::Local => config.tictactoe.second_player_name.clone(),
            };
            let settings = TicTacToeSettings {
                mode,
                names: PlayerNames { x: player_name, o },
                bot_think_delay: Duration::from_millis(config.tictactoe.bot_think_delay_ms),
            };
            offline::run_tictactoe_game(&mut io, &settings, &mut rng).await?;
        }
        GameType::RockPaperScissors => {
            offline::run_rock_paper_scissors_game(&mut io, &player_name, &mut rng).await?;
        }
        GameType::MemoryMatch => {
            let settings = MemoryMatchSettings {
                mismatch_reveal: Duration::from_millis(config.memory_match.mismatch_reveal_ms),
            };
            offline::run_memory_match_game(&mut io, &settings, &mut rng).await?;
        }
    }

    Ok(())
}
