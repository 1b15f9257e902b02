//! Terminal UI: the main application loop and the ratatui game view with
//! board, markers, player stats, and controls.

mod app;
mod game_view;

pub use app::App;
