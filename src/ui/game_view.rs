use crate::game::{Cell, GameState, Player, Position, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, game: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(ROWS as u16 + 2), // Marker row + board
            Constraint::Length(4),            // Player stats
            Constraint::Length(4),            // Turn info
            Constraint::Length(4),            // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, chunks[1]);
    render_stats(frame, game, chunks[2]);
    render_turn_info(frame, game, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Blue => Color::Blue,
    }
}

fn render_header(frame: &mut Frame, game: &GameState, area: ratatui::layout::Rect) {
    let player = game.current_player();
    let status = if game.is_over() {
        "Game over".to_string()
    } else {
        format!("{}'s turn", player.name())
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Micemen"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game: &GameState, area: ratatui::layout::Rect) {
    let mut lines = Vec::new();

    // Marker row: where the selection sits and which columns can shift
    let mover = game.current_player();
    let mut markers = vec![Span::raw("  ")];
    for col in 0..COLS {
        let movable = game.can_move_column(mover, col);
        let marker = if col == game.selected_column() {
            if movable {
                Span::styled(
                    "▼ ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    "✗ ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )
            }
        } else if movable {
            Span::styled("✓ ", Style::default().fg(Color::Green))
        } else {
            Span::raw("  ")
        };
        markers.push(marker);
    }
    lines.push(Line::from(markers));

    // Grid rows, two characters per cell
    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ")];
        for col in 0..COLS {
            row_spans.push(cell_span(game, Position { row, col }));
        }
        lines.push(Line::from(row_spans));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board, area);
}

/// Pick the glyph for one cell. Mice win over the underlying cell; a cell
/// occupied by both colors gets the mixed marker.
fn cell_span(game: &GameState, pos: Position) -> Span<'static> {
    let mut red = 0;
    let mut blue = 0;
    for mouse in game.mice_at(pos) {
        match mouse.player {
            Player::Red => red += 1,
            Player::Blue => blue += 1,
        }
    }

    let selected = pos.col == game.selected_column();
    let (symbol, color) = if red > 0 && blue > 0 {
        ("◉ ", Color::Magenta)
    } else if red > 0 {
        ("● ", Color::Red)
    } else if blue > 0 {
        ("● ", Color::Blue)
    } else {
        match game.grid().get(pos.row, pos.col) {
            Cell::Wall => ("▓▓", Color::Yellow),
            Cell::Empty if selected => ("· ", Color::Gray),
            Cell::Empty => ("· ", Color::DarkGray),
        }
    };

    let mut style = Style::default().fg(color);
    if selected {
        style = style.bg(Color::DarkGray);
    }
    Span::styled(symbol, style)
}

fn render_stats(frame: &mut Frame, game: &GameState, area: ratatui::layout::Rect) {
    let lines = vec![stats_line(game, Player::Red), stats_line(game, Player::Blue)];

    let stats = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Players"));

    frame.render_widget(stats, area);
}

fn stats_line(game: &GameState, player: Player) -> Line<'static> {
    let count = game.mice_of(player).count();
    Line::from(vec![
        Span::styled(
            format!("{}:", player.name()),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {} mice  |  columns: {}",
            count,
            columns_display(&game.owned_columns(player))
        )),
    ])
}

/// 1-based column list for the stats block, or "none".
fn columns_display(columns: &[usize]) -> String {
    if columns.is_empty() {
        return "none".to_string();
    }
    columns
        .iter()
        .map(|col| (col + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_turn_info(frame: &mut Frame, game: &GameState, area: ratatui::layout::Rect) {
    let mover = game.current_player();
    let selected = game.selected_column();

    let lines = if game.can_move_column(mover, selected) {
        vec![
            Line::from(Span::styled(
                format!("Column {} is ready to shift", selected + 1),
                Style::default().fg(Color::Green),
            )),
            Line::from("↑/↓ (or W/S, K/J): shift this column"),
        ]
    } else {
        vec![
            Line::from(Span::styled(
                format!("Column {} has no {} mice", selected + 1, mover.name()),
                Style::default().fg(Color::Red),
            )),
            Line::from("←/→ (or A/D, H/L): find one of your columns"),
        ]
    };

    let info = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Turn"));

    frame.render_widget(info, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line1 = Line::from("←/→: Select column  |  ↑/↓: Shift column  |  Q: Quit");
    let line2 = Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Red)),
        Span::raw("Red   "),
        Span::styled("● ", Style::default().fg(Color::Blue)),
        Span::raw("Blue   "),
        Span::styled("◉ ", Style::default().fg(Color::Magenta)),
        Span::raw("Mixed   "),
        Span::styled("▓▓ ", Style::default().fg(Color::Yellow)),
        Span::raw("Wall   "),
        Span::styled("✓ ", Style::default().fg(Color::Green)),
        Span::raw("Movable"),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
