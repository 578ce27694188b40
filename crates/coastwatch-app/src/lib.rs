//! Coastwatch headless driver.
//!
//! This crate wires the simulation engine to a wall clock: config loading,
//! a frame loop thread controlled over a channel, and a console sink that
//! keeps the tactical log and latest statistics for display.

pub mod config;
pub mod console;
pub mod error;
pub mod game_loop;
pub mod state;

pub use coastwatch_core as core;
pub use error::{AppError, Result};
