//! Core Micemen game logic: grid and column rotation, mice, the turn and
//! selection state machine, and the seeded layout generator.

mod grid;
mod player;
mod setup;
mod state;

pub use grid::{Cell, Grid, ShiftDir, COLS, ROWS};
pub use player::Player;
pub use state::{Action, GameState, Mouse, Position, SelectDir};
