//! # Micemen
//!
//! A two-player terminal remake of the classic column-shifting mice game.
//! Each player commands a team of mice on a shared grid of walls; on your
//! turn you pick a column holding at least one of your mice and rotate it up
//! or down, walls and mice wrapping around the edges. Built on a terminal UI
//! with Ratatui and crossterm.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: grid, mice, turn state machine, layout generation
//! - [`input`] — Keyboard-to-action mapping behind a pluggable input source
//! - [`ui`] — Terminal UI: application loop and game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;
