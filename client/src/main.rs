mod config;
mod game_ui;
mod offline;
mod state;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tokio::io::BufReader;
use tictactoe_common::GameError;
use tictactoe_common::config::Validate;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{GameMode, GameSession, TicTacToeSettings};
use tictactoe_common::{log, logger};

use config::{get_config_manager, get_config_path};
use offline::run_tictactoe_game;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe in the terminal, alone against the computer or with a friend")]
struct Args {
    /// single (you against the computer) or multi (two players)
    #[arg(long)]
    mode: Option<GameMode>,

    /// Seed for the computer's random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the computer answers
    #[arg(long)]
    opponent_delay_ms: Option<u64>,

    /// Config file, defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,
}

/// Settings from the config file with command line flags applied on top.
fn load_settings(args: &Args, config_path: &Path) -> Result<TicTacToeSettings, GameError> {
    let mut config_manager = get_config_manager(Some(config_path));
    let mut settings = config_manager.get_config()?.tictactoe;

    if let Some(mode) = args.mode {
        settings.mode = mode;
    }
    if let Some(delay) = args.opponent_delay_ms {
        settings.opponent_delay_ms = delay;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    settings.validate()?;
    Ok(settings)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.clone().unwrap_or_else(get_config_path);
    let settings = match load_settings(&args, &config_path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let mut rng = match settings.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting {} mode (config: {}, seed: {})",
        settings.mode,
        config_path.display(),
        rng.seed()
    );

    let mut session = GameSession::new(settings.mode);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    match run_tictactoe_game(
        &mut session,
        &mut rng,
        Duration::from_millis(settings.opponent_delay_ms),
        stdin,
        &mut stdout,
    )
    .await
    {
        Ok(scores) => {
            log!("Session finished: X {} - O {}", scores.x_wins, scores.o_wins);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Terminal error: {}", e);
            ExitCode::FAILURE
        }
    }
}
