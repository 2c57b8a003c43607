use std::time::Instant;

use clap::Parser;
use log::info;
use snake::config::{
    DEFAULT_CELL_SIZE, DEFAULT_FRUIT_COUNT, DEFAULT_GAME_SPEED, DEFAULT_RESOLUTION, Settings,
    THEME_MEADOW,
};
use snake::error::AppError;
use snake::game::GameState;
use snake::input::{GameInput, InputHandler};
use snake::terminal_runtime::TerminalSession;

/// Classic Snake on a fixed grid. Steer with WASD or the arrow keys, quit with Esc.
///
/// Logs go to stderr, which shares the screen with the game; when raising
/// `RUST_LOG`, redirect it, e.g. `RUST_LOG=debug grid-snake 2>snake.log`.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Play-field width in pixels.
    #[arg(long, default_value_t = DEFAULT_RESOLUTION.0)]
    width: u32,

    /// Play-field height in pixels.
    #[arg(long, default_value_t = DEFAULT_RESOLUTION.1)]
    height: u32,

    /// Edge length of one cell in pixels; must divide width and height.
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: u32,

    /// Tick interval in units of 10ms; lower is faster.
    #[arg(long, default_value_t = DEFAULT_GAME_SPEED)]
    game_speed: u32,

    /// Number of fruit on the board.
    #[arg(long, default_value_t = DEFAULT_FRUIT_COUNT)]
    fruits: usize,

    /// Seed for fruit placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), AppError> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let settings = Settings::try_from_parts(
        (cli.width, cli.height),
        cli.cell_size,
        cli.game_speed,
        cli.fruits,
    )?;
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(settings, seed),
        None => GameState::new(settings),
    };

    info!(
        "starting {}x{} grid, cell {}, tick {:?}, {} fruit",
        settings.grid.width(),
        settings.grid.height(),
        settings.grid.cell_size(),
        settings.tick_interval,
        settings.fruit_count
    );

    run(state, settings)
}

fn run(mut state: GameState, settings: Settings) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut next_tick = Instant::now() + settings.tick_interval;

    loop {
        session.draw(&state, &THEME_MEADOW)?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        match input.poll_input(timeout)? {
            Some(GameInput::Exit) => break,
            Some(other) => state.apply_input(other),
            None => {}
        }

        let now = Instant::now();
        if now >= next_tick {
            state.tick();
            next_tick += settings.tick_interval;
            // Never replay a backlog after a stall.
            if next_tick < now {
                next_tick = now + settings.tick_interval;
            }
        }
    }

    info!(
        "exiting after {} ticks, length {}, {} fruit eaten",
        state.tick_count,
        state.snake.len(),
        state.fruits_eaten
    );
    Ok(())
}
