//! Layout generation: random walls plus the supported-placement algorithm
//! that seeds every new game.

use std::collections::HashSet;
use std::ops::Range;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::GameConfig;

use super::grid::{Cell, Grid, COLS, ROWS};
use super::player::Player;
use super::state::{GameState, Mouse, Position};

impl GameState {
    /// Generate a fresh game: random walls in every column, then each
    /// player's mice placed on supported cells inside their column band
    /// (Red on the left, Blue on the right). The caller owns the RNG, so a
    /// fixed seed reproduces the exact layout.
    ///
    /// `config` is assumed validated. Placement retries are bounded; a mouse
    /// whose budget runs out is simply not placed.
    pub fn generate(config: &GameConfig, rng: &mut StdRng) -> GameState {
        let grid = generate_walls(config, rng);

        let mut mice = Vec::with_capacity(config.mice_per_player * 2);
        place_mice(
            &grid,
            &mut mice,
            Player::Red,
            0..config.columns_per_player,
            config,
            rng,
        );
        place_mice(
            &grid,
            &mut mice,
            Player::Blue,
            COLS - config.columns_per_player..COLS,
            config,
            rng,
        );

        info!("generated layout with {} mice", mice.len());
        GameState::with_layout(grid, mice)
    }
}

/// Independently per column: pick a wall count in the configured range, then
/// that many distinct rows by rejection sampling.
fn generate_walls(config: &GameConfig, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new();
    for col in 0..COLS {
        let count = rng.random_range(config.min_walls..=config.max_walls);
        let mut rows = HashSet::new();
        while rows.len() < count {
            rows.insert(rng.random_range(0..ROWS));
        }
        for row in rows {
            grid.set(row, col, Cell::Wall);
        }
    }
    grid
}

/// Place one player's mice inside their column band. Falling short of
/// `mice_per_player` is accepted, just logged.
fn place_mice(
    grid: &Grid,
    mice: &mut Vec<Mouse>,
    player: Player,
    band: Range<usize>,
    config: &GameConfig,
    rng: &mut StdRng,
) {
    let mut placed = 0;
    for _ in 0..config.mice_per_player {
        if let Some(pos) =
            find_supported_spot(grid, mice, band.clone(), config.placement_attempts, rng)
        {
            mice.push(Mouse { pos, player });
            placed += 1;
        }
    }
    if placed < config.mice_per_player {
        warn!(
            "placed only {} of {} {} mice",
            placed,
            config.mice_per_player,
            player.name()
        );
    }
}

/// Try up to `attempts` random columns in the band; the first with any
/// supported rows yields a uniformly chosen one. `None` once the budget runs
/// out.
fn find_supported_spot(
    grid: &Grid,
    mice: &[Mouse],
    band: Range<usize>,
    attempts: usize,
    rng: &mut StdRng,
) -> Option<Position> {
    for _ in 0..attempts {
        let col = rng.random_range(band.clone());
        let rows = supported_rows(grid, mice, col);
        if rows.is_empty() {
            continue;
        }
        let row = rows[rng.random_range(0..rows.len())];
        return Some(Position { row, col });
    }
    None
}

/// All rows in a column where a mouse could be placed right now.
fn supported_rows(grid: &Grid, mice: &[Mouse], col: usize) -> Vec<usize> {
    (0..ROWS)
        .filter(|&row| is_supported(grid, mice, Position { row, col }))
        .collect()
}

/// Placement-time support rule: the bottom row takes a mouse only on a wall
/// cell; any other row needs a wall or an already-placed mouse directly
/// below. Column shifts later in the game may leave mice unsupported; only
/// placement enforces this.
fn is_supported(grid: &Grid, mice: &[Mouse], pos: Position) -> bool {
    if pos.row >= ROWS || pos.col >= COLS {
        return false;
    }
    if pos.row == ROWS - 1 {
        return grid.get(pos.row, pos.col) == Cell::Wall;
    }

    let below = Position {
        row: pos.row + 1,
        col: pos.col,
    };
    grid.get(below.row, below.col) == Cell::Wall
        || mice.iter().any(|mouse| mouse.pos == below)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_generated_wall_counts_in_range() {
        let config = GameConfig::default();
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let state = GameState::generate(&config, &mut rng);
            for col in 0..COLS {
                let count = state.grid().wall_count(col);
                assert!(
                    (config.min_walls..=config.max_walls).contains(&count),
                    "column {} has {} walls",
                    col,
                    count
                );
            }
        }
    }

    #[test]
    fn test_generated_mice_counts_and_bands() {
        let config = GameConfig::default();
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let state = GameState::generate(&config, &mut rng);

            let red: Vec<_> = state.mice_of(Player::Red).collect();
            let blue: Vec<_> = state.mice_of(Player::Blue).collect();
            assert_eq!(red.len(), config.mice_per_player);
            assert_eq!(blue.len(), config.mice_per_player);

            for mouse in red {
                assert!(mouse.pos.col < config.columns_per_player);
            }
            for mouse in blue {
                assert!(mouse.pos.col >= COLS - config.columns_per_player);
            }
        }
    }

    #[test]
    fn test_generated_mice_are_supported() {
        let config = GameConfig::default();
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let state = GameState::generate(&config, &mut rng);
            for mouse in state.mice() {
                assert!(
                    is_supported(state.grid(), state.mice(), mouse.pos),
                    "mouse at {:?} is unsupported",
                    mouse.pos
                );
            }
        }
    }

    #[test]
    fn test_generated_selection_is_valid_for_red() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let state = GameState::generate(&config, &mut rng);

        assert!(state.can_move_column(Player::Red, state.selected_column()));
    }

    #[test]
    fn test_same_seed_reproduces_layout() {
        let config = GameConfig::default();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let a = GameState::generate(&config, &mut rng_a);
        let b = GameState::generate(&config, &mut rng_b);
        assert_eq!(a, b);

        let mut rng_c = StdRng::seed_from_u64(43);
        let c = GameState::generate(&config, &mut rng_c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_placement_runs_out_gracefully_without_support() {
        // A grid with no walls has no supported cells at all.
        let config = GameConfig {
            placement_attempts: 50,
            ..GameConfig::default()
        };
        let grid = Grid::new();
        let mut mice = Vec::new();
        let mut rng = StdRng::seed_from_u64(9);

        place_mice(&grid, &mut mice, Player::Red, 0..9, &config, &mut rng);

        assert!(mice.is_empty());
    }

    #[test]
    fn test_support_rules() {
        let mut grid = Grid::new();
        grid.set(ROWS - 1, 0, Cell::Wall);
        grid.set(6, 2, Cell::Wall);
        let mice = vec![Mouse {
            pos: Position { row: 4, col: 2 },
            player: Player::Blue,
        }];

        // Bottom row wants a wall in the cell itself.
        assert!(is_supported(&grid, &mice, Position { row: ROWS - 1, col: 0 }));
        assert!(!is_supported(&grid, &mice, Position { row: ROWS - 1, col: 1 }));

        // A wall directly below supports, as does a placed mouse.
        assert!(is_supported(&grid, &mice, Position { row: 5, col: 2 }));
        assert!(is_supported(&grid, &mice, Position { row: 3, col: 2 }));

        // Nothing below means floating, which placement never allows.
        assert!(!is_supported(&grid, &mice, Position { row: 1, col: 2 }));

        // Out of bounds is never supported.
        assert!(!is_supported(&grid, &mice, Position { row: ROWS, col: 0 }));
        assert!(!is_supported(&grid, &mice, Position { row: 0, col: COLS }));
    }
}
