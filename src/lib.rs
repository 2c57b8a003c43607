pub mod config;
pub mod error;
pub mod fruit;
pub mod game;
pub mod grid;
pub mod heading;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
