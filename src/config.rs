use std::time::Duration;

use ratatui::style::Color;

use crate::error::ConfigError;
use crate::grid::GridModel;
use crate::heading::Heading;

/// Play-field resolution in pixels (width, height).
pub const DEFAULT_RESOLUTION: (u32, u32) = (600, 600);

/// Edge length of one grid cell in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 10;

/// Game speed; the tick interval is this many `BASE_TICK_UNIT_MS`.
pub const DEFAULT_GAME_SPEED: u32 = 10;

/// Milliseconds per unit of game speed.
pub const BASE_TICK_UNIT_MS: u64 = 10;

/// Fruit live on the board at any time.
pub const DEFAULT_FRUIT_COUNT: usize = 2;

/// Heading of a freshly spawned snake.
pub const DEFAULT_HEADING: Heading = Heading::UP;

/// Upper half-block glyph for compositing two grid rows per terminal row.
pub const GLYPH_HALF_UPPER: &str = "▀";

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub fruit: Color,
    pub play_bg: Color,
    pub hud_fg: Color,
    pub hud_dead: Color,
}

/// Orange snake on a grass-green field.
pub const THEME_MEADOW: Theme = Theme {
    snake_head: Color::Rgb(230, 120, 20),
    snake_body: Color::Rgb(220, 155, 30),
    fruit: Color::Rgb(220, 33, 43),
    play_bg: Color::Rgb(94, 166, 30),
    hud_fg: Color::White,
    hud_dead: Color::Red,
};

/// Validated startup settings for one session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Settings {
    pub grid: GridModel,
    pub fruit_count: usize,
    pub tick_interval: Duration,
}

impl Settings {
    /// Validates raw values, typically straight from the command line.
    pub fn try_from_parts(
        resolution: (u32, u32),
        cell_size: u32,
        game_speed: u32,
        fruit_count: usize,
    ) -> Result<Self, ConfigError> {
        let grid = GridModel::try_new(resolution.0, resolution.1, cell_size)?;
        if game_speed == 0 {
            return Err(ConfigError::ZeroGameSpeed);
        }
        if fruit_count == 0 {
            return Err(ConfigError::NoFruit);
        }

        Ok(Self {
            grid,
            fruit_count,
            tick_interval: tick_interval_for_speed(game_speed),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::try_from_parts(
            DEFAULT_RESOLUTION,
            DEFAULT_CELL_SIZE,
            DEFAULT_GAME_SPEED,
            DEFAULT_FRUIT_COUNT,
        )
        .expect("default settings are valid")
    }
}

/// Interval between ticks; larger speed values tick more slowly.
#[must_use]
pub fn tick_interval_for_speed(game_speed: u32) -> Duration {
    Duration::from_millis(u64::from(game_speed) * BASE_TICK_UNIT_MS)
}
