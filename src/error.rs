use std::io;

use thiserror::Error;

/// Rejected startup settings.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be greater than zero")]
    ZeroCellSize,
    #[error("grid extent {width}x{height} must be non-zero")]
    EmptyGrid { width: u32, height: u32 },
    #[error("grid extent {extent} is not a multiple of the cell size {cell_size}")]
    Misaligned { extent: u32, cell_size: u32 },
    #[error("grid extent {extent} does not fit a signed 32-bit coordinate")]
    ExtentTooLarge { extent: u32 },
    #[error("game speed must be greater than zero")]
    ZeroGameSpeed,
    #[error("at least one fruit is required")]
    NoFruit,
}

/// Top-level failure of the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid settings: {0}")]
    Config(#[from] ConfigError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
