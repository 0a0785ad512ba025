use crate::game::{Board, Cell, GameState, GameStatus, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of one board column in terminal cells.
const CELL_WIDTH: u16 = 3;
/// Left margin before the first column ("  ║").
const LEFT_PAD: u16 = 3;
/// Right margin after the last column (" ║").
const RIGHT_PAD: u16 = 2;

/// Draw the whole game screen and return the area the board was drawn in,
/// for mapping mouse clicks back to columns.
pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
) -> Rect {
    let board_lines = u16::try_from(game_state.height())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Min(board_lines),    // Board
            Constraint::Length(3),           // Message
            Constraint::Length(3),           // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);

    chunks[1]
}

/// Map a terminal x coordinate inside the board area to a column index.
pub fn column_at(area: Rect, cols: usize, x: u16) -> Option<usize> {
    let line_width = CELL_WIDTH
        .saturating_mul(u16::try_from(cols).unwrap_or(u16::MAX))
        .saturating_add(LEFT_PAD + RIGHT_PAD);
    // Same centering offset ratatui uses for centered paragraph lines
    let first = area
        .x
        .saturating_add((area.width / 2).saturating_sub(line_width / 2))
        .saturating_add(LEFT_PAD);
    if x < first {
        return None;
    }
    let col = ((x - first) / CELL_WIDTH) as usize;
    (col < cols).then_some(col)
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let (status, color) = match game_state.status() {
        GameStatus::InProgress => {
            let player = game_state.current_player();
            (format!("Current Player: {}", player.name()), player_color(player))
        }
        GameStatus::Won(player) => (format!("{} won!", player.name()), player_color(player)),
        GameStatus::Tied => ("Tie!".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let board: &Board = game_state.board();
    let cols = board.cols();
    let winning_run = match game_state.status() {
        GameStatus::Won(player) => board.winning_run(player),
        _ => None,
    };
    let legal = game_state.legal_columns();

    let mut lines = Vec::new();

    // Column numbers with selection indicator; full columns are dimmed
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        let style = if col == selected_column {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else if legal.contains(&col) {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        col_line.push(Span::styled(label, style));
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(cols * CELL_WIDTH as usize + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..cols {
            let in_run = winning_run.is_some_and(|run| run.contains(&(row, col)));
            let span = match board.get(row, col) {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Piece(player) if in_run => Span::styled(
                    " ◉ ",
                    Style::default()
                        .fg(player_color(player))
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::Piece(player) => {
                    Span::styled(" ● ", Style::default().fg(player_color(player)))
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column && !game_state.is_terminal() {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter: Drop  |  1-9/Click: Drop in column  |  R: New game  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
