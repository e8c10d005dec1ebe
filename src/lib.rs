//! Wrap-around Snake on a board that slowly fills with bricks.
//!
//! The game engine lives in [`geometry`], [`placement`], [`snake`] and
//! [`game`]; everything else is the terminal front-end around it.

pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod placement;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
