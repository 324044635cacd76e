use crate::game::{Board, Cell, Player};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Colour a player's pieces are drawn in
pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Build the framed board: column numbers, rows of pieces, and a marker under
/// the selected column. Cells in `highlight` are drawn bold and reversed.
pub fn board_lines(
    board: &Board,
    selected_column: Option<usize>,
    highlight: &[(usize, usize)],
) -> Vec<Line<'static>> {
    let width = board.width();
    let mut lines = Vec::with_capacity(board.height() + 4);

    // Padding (3 chars to match "  ║")
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if Some(col) == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(3 * width + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..width {
            let (symbol, mut style) = match board.get(row, col) {
                Some(Cell::Occupied(player)) => {
                    (" ● ", Style::default().fg(player_color(player)))
                }
                _ => (" . ", Style::default().fg(Color::DarkGray)),
            };
            if highlight.contains(&(row, col)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if Some(col) == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}
