use std::path::PathBuf;
use std::time::Instant;

use brick_snake::config::BOARD;
use brick_snake::error::AppError;
use brick_snake::game::Game;
use brick_snake::input::{GameInput, poll_input};
use brick_snake::logging::{self, LogLevel, default_log_path};
use brick_snake::scheduler::Scheduler;
use brick_snake::settings::{Settings, load_settings, settings_path};
use brick_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use clap::Parser;
use log::{info, warn};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for brick and apple placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file to load instead of the platform default.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Where to write the log.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let log_path = cli.log_file.unwrap_or_else(default_log_path);
    if let Err(error) = logging::init(&log_path, cli.log_level) {
        eprintln!("Warning: {error}; playing without a log file");
    }

    let settings = load_settings_or_default(cli.config.unwrap_or_else(settings_path));
    install_panic_hook();

    let mut game = match cli.seed {
        Some(seed) => Game::with_seed(BOARD, settings, seed),
        None => Game::new(BOARD, settings),
    };
    game.start();

    run(&mut game)?;

    info!(
        "session ended with score {} and length {}",
        game.score,
        game.snake.len()
    );
    Ok(())
}

// A broken settings file should not keep anyone from playing.
fn load_settings_or_default(path: PathBuf) -> Settings {
    match load_settings(&path) {
        Ok(settings) => {
            info!("settings loaded: {settings:?}");
            settings
        }
        Err(error) => {
            eprintln!("Warning: {error}; using default settings");
            warn!("{error}; using default settings");
            Settings::default()
        }
    }
}

fn run(game: &mut Game) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    let mut scheduler = Scheduler::new(game.settings(), Instant::now());

    loop {
        session.draw(game, scheduler.is_paused())?;

        if let Some(input) = poll_input(scheduler.time_until_next(Instant::now()))? {
            match input {
                GameInput::Quit => break,
                GameInput::Pause => scheduler.toggle_pause(Instant::now()),
                GameInput::Key(code) if !scheduler.is_paused() => {
                    game.on_input(code);
                }
                GameInput::Key(_) => {}
            }
        }

        let due = scheduler.poll(Instant::now());
        if due.snake {
            game.on_snake_tick();
        }
        if due.brick {
            game.on_brick_tick();
        }
    }

    Ok(())
}
