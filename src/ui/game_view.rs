use super::app::ViewState;
use super::board_widget::{board_lines, player_color};
use crate::game::{GameController, GameStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game: &GameController,
    view: &ViewState,
    selected_column: usize,
    message: Option<&str>,
) {
    let board_height = u16::try_from(game.board().height())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, view, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &GameController, area: Rect) {
    let player = game.current_player();
    let status = match game.status() {
        GameStatus::InProgress => format!("Current Player: {player}"),
        GameStatus::Won(_) | GameStatus::Tied => "Game Over".to_string(),
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game: &GameController,
    view: &ViewState,
    selected_column: usize,
    area: Rect,
) {
    // Winning line once decided, otherwise the piece that just landed
    let highlight: Vec<(usize, usize)> = match game.winning_line() {
        Some(line) => line.to_vec(),
        None => view.last_drop().into_iter().collect(),
    };
    let selected = (!game.is_terminal()).then_some(selected_column);

    let board_widget = Paragraph::new(board_lines(game.board(), selected, &highlight))
        .alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  1-9 / Enter: Drop  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
