use crate::game::{Action, GameState};
use crate::input::InputSource;
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App<I: InputSource> {
    game: GameState,
    input: I,
}

impl<I: InputSource> App<I> {
    pub fn new(game: GameState, input: I) -> Self {
        App { game, input }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Main application loop: draw, then feed the next action to the game.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| super::game_view::render(f, &self.game))?;

            if self.game.is_over() {
                break;
            }

            let action = self.input.next_action()?;
            if action != Action::None {
                self.game.process_action(action);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Grid, Mouse, Player, Position};
    use ratatui::backend::TestBackend;

    /// Feeds a fixed list of actions, then quits.
    struct ScriptedSource(std::vec::IntoIter<Action>);

    impl ScriptedSource {
        fn new(actions: Vec<Action>) -> Self {
            ScriptedSource(actions.into_iter())
        }
    }

    impl InputSource for ScriptedSource {
        fn next_action(&mut self) -> io::Result<Action> {
            Ok(self.0.next().unwrap_or(Action::Quit))
        }
    }

    fn mouse(player: Player, row: usize, col: usize) -> Mouse {
        Mouse {
            pos: Position { row, col },
            player,
        }
    }

    #[test]
    fn test_run_exits_on_quit() {
        let game = GameState::with_layout(
            Grid::new(),
            vec![mouse(Player::Red, 5, 3), mouse(Player::Blue, 5, 10)],
        );
        let mut app = App::new(game, ScriptedSource::new(vec![Action::Quit]));

        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        app.run(&mut terminal).unwrap();

        assert!(app.game().is_over());
    }

    #[test]
    fn test_run_feeds_actions_to_game() {
        let game = GameState::with_layout(
            Grid::new(),
            vec![mouse(Player::Red, 5, 3), mouse(Player::Blue, 5, 10)],
        );
        // Red starts with column 3 selected (nearest to the middle)
        assert_eq!(game.selected_column(), 3);

        let mut app = App::new(
            game,
            ScriptedSource::new(vec![Action::ShiftColumnDown, Action::Quit]),
        );

        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        app.run(&mut terminal).unwrap();

        // The shift moved Red's mouse down and handed the turn to Blue
        let game = app.game();
        assert_eq!(game.mice()[0].pos, Position { row: 6, col: 3 });
        assert_eq!(game.current_player(), Player::Blue);
        assert_eq!(game.selected_column(), 10);
        assert!(game.is_over());
    }
}
