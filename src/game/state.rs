use log::debug;

use super::grid::{Grid, ShiftDir, COLS};
use super::player::Player;

/// A coordinate in the grid. Row 0 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// A single mouse: where it stands and who owns it. Any number of mice may
/// share one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mouse {
    pub pos: Position,
    pub player: Player,
}

/// Abstract player input, produced by an `InputSource`. `None` means
/// "nothing actionable this cycle" and is always safe to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    MoveLeft,
    MoveRight,
    ShiftColumnUp,
    ShiftColumnDown,
    Quit,
}

/// Direction for walking the selection through a player's owned columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectDir {
    Left,
    Right,
}

/// The complete game state: grid, mice, column selection, whose turn it is,
/// and whether the game has ended.
///
/// All mutation goes through [`process_action`](GameState::process_action);
/// everything else is a read-only query. A shared `&GameState` is the
/// snapshot handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) mice: Vec<Mouse>,
    pub(crate) selected_column: usize,
    pub(crate) current_player: Player,
    pub(crate) over: bool,
}

impl GameState {
    /// Build a game from a fixed layout. Red moves first; the selection
    /// starts at the middle column and is then relocated to Red's nearest
    /// owned column (it stays at the middle if Red owns none).
    ///
    /// The layout generator funnels through here, and tests use it to seed
    /// deterministic positions.
    pub fn with_layout(grid: Grid, mice: Vec<Mouse>) -> Self {
        let mut state = GameState {
            grid,
            mice,
            selected_column: COLS / 2,
            current_player: Player::Red,
            over: false,
        };
        if let Some(col) = state.nearest_owned_column(state.current_player, state.selected_column)
        {
            state.selected_column = col;
        }
        state
    }

    /// Get reference to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All mice on the board, both players, in placement order.
    pub fn mice(&self) -> &[Mouse] {
        &self.mice
    }

    /// Mice standing on the given cell (stacks return several).
    pub fn mice_at(&self, pos: Position) -> impl Iterator<Item = &Mouse> {
        self.mice.iter().filter(move |mouse| mouse.pos == pos)
    }

    /// Mice owned by the given player.
    pub fn mice_of(&self, player: Player) -> impl Iterator<Item = &Mouse> {
        self.mice.iter().filter(move |mouse| mouse.player == player)
    }

    /// The currently highlighted column.
    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    /// The player whose move it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Whether the game has ended. Once true, every action is ignored.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Columns where the player has at least one mouse, ascending and
    /// deduplicated.
    pub fn owned_columns(&self, player: Player) -> Vec<usize> {
        let mut cols: Vec<usize> = self
            .mice_of(player)
            .map(|mouse| mouse.pos.col)
            .collect();
        cols.sort_unstable();
        cols.dedup();
        cols
    }

    /// Whether the player may shift the given column: in bounds and holding
    /// at least one of their mice. The renderer uses this for the per-column
    /// validity markers.
    pub fn can_move_column(&self, player: Player, col: usize) -> bool {
        col < COLS
            && self
                .mice
                .iter()
                .any(|mouse| mouse.pos.col == col && mouse.player == player)
    }

    /// The owned column closest to `from`, or `None` if the player owns no
    /// columns. Equidistant candidates resolve to the smaller column index.
    pub fn nearest_owned_column(&self, player: Player, from: usize) -> Option<usize> {
        let mut nearest = None;
        let mut best = usize::MAX;
        for col in self.owned_columns(player) {
            let distance = col.abs_diff(from);
            if distance < best {
                best = distance;
                nearest = Some(col);
            }
        }
        nearest
    }

    /// The next owned column when walking left or right from `from`, wrapping
    /// past either end of the owned list. `None` if the player owns no
    /// columns.
    pub fn next_owned_column(&self, player: Player, from: usize, dir: SelectDir) -> Option<usize> {
        let cols = self.owned_columns(player);
        if cols.is_empty() {
            return None;
        }
        let next = match dir {
            SelectDir::Right => cols
                .iter()
                .copied()
                .find(|&col| col > from)
                .unwrap_or(cols[0]),
            SelectDir::Left => cols
                .iter()
                .copied()
                .rev()
                .find(|&col| col < from)
                .unwrap_or(cols[cols.len() - 1]),
        };
        Some(next)
    }

    /// Handle one player action. Invalid or impossible actions degrade to
    /// no-ops; there is nothing to report back. After the game is over every
    /// action is ignored outright.
    pub fn process_action(&mut self, action: Action) {
        if self.over {
            return;
        }

        match action {
            Action::None => {}
            Action::MoveLeft => self.move_selection(SelectDir::Left),
            Action::MoveRight => self.move_selection(SelectDir::Right),
            Action::ShiftColumnUp => self.shift_selected(ShiftDir::Up),
            Action::ShiftColumnDown => self.shift_selected(ShiftDir::Down),
            Action::Quit => self.over = true,
        }
    }

    /// Move the selection to the mover's next owned column in `dir`. No-op
    /// when the mover owns no columns. Never changes whose turn it is.
    fn move_selection(&mut self, dir: SelectDir) {
        if let Some(col) =
            self.next_owned_column(self.current_player, self.selected_column, dir)
        {
            self.selected_column = col;
        }
    }

    /// Shift the selected column if the mover owns a mouse there, then hand
    /// the turn over. A rejected shift changes nothing, not even the turn.
    fn shift_selected(&mut self, dir: ShiftDir) {
        if !self.can_move_column(self.current_player, self.selected_column) {
            return;
        }

        let col = self.selected_column;
        self.grid.shift_column(col, dir);
        for mouse in &mut self.mice {
            if mouse.pos.col == col {
                mouse.pos.row = dir.step(mouse.pos.row);
            }
        }
        debug!(
            "{} shifts column {} {}",
            self.current_player.name(),
            col,
            dir.name()
        );

        self.switch_player();
    }

    /// Hand the turn to the other player and relocate the selection to their
    /// nearest owned column (leave it alone if they own none).
    fn switch_player(&mut self) {
        self.current_player = self.current_player.other();
        if let Some(col) =
            self.nearest_owned_column(self.current_player, self.selected_column)
        {
            self.selected_column = col;
        }
    }
}
