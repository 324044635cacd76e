//! Line-oriented front end for playing without a terminal UI (pipes,
//! scripts, tests). Reads one command per line and prints the board and
//! what happened after each.

use std::io::{self, BufRead, Write};

use tracing::debug;

use super::app::outcome_message;
use crate::error::MoveError;
use crate::game::{GameController, GameEvent, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// 1-based column as typed
    Drop(usize),
    Restart,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    match input {
        "q" | "quit" => Some(Command::Quit),
        "r" | "restart" => Some(Command::Restart),
        _ => input.parse().ok().map(Command::Drop),
    }
}

fn write_events<W: Write>(output: &mut W, events: &mut Vec<GameEvent>) -> io::Result<()> {
    for event in events.drain(..) {
        match event {
            GameEvent::PieceDropped {
                row,
                column,
                player,
            } => writeln!(
                output,
                "{player} dropped into column {} (row {})",
                column + 1,
                row + 1
            )?,
            GameEvent::GameOver(outcome) => writeln!(output, "{}", outcome_message(outcome))?,
            GameEvent::Restarted => writeln!(output, "New game started!")?,
        }
    }
    Ok(())
}

fn write_prompt<W: Write>(output: &mut W, game: &GameController) -> io::Result<()> {
    if game.is_terminal() {
        writeln!(output, "Game over. Enter r to restart or q to quit.")
    } else {
        writeln!(
            output,
            "{} to move (1-{}, r = restart, q = quit):",
            game.current_player(),
            game.board().width()
        )
    }
}

/// Play one or more games, reading commands from `input` until it ends or a
/// quit command arrives.
pub fn run<R: BufRead, W: Write>(
    controller: GameController,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    let mut session = Session::new(controller, Vec::new());
    write!(output, "{}", session.controller().board())?;
    write_prompt(output, session.controller())?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        debug!(command, "text input");

        match parse_command(command) {
            Some(Command::Quit) => break,
            Some(Command::Restart) => session.on_restart_requested(),
            Some(Command::Drop(number)) => {
                let width = session.controller().board().width();
                // Column 0 maps to an index past the board so it is rejected
                // like any other out-of-range number.
                let column = number.checked_sub(1).unwrap_or(usize::MAX);
                match session.on_column_selected(column) {
                    Ok(_) => {}
                    Err(MoveError::InvalidColumn { .. }) => {
                        writeln!(output, "No column {number}, choose 1-{width}.")?;
                    }
                    Err(MoveError::ColumnFull { .. }) => {
                        writeln!(output, "Column {number} is full.")?;
                    }
                    Err(err) => writeln!(output, "Move rejected: {err}.")?,
                }
            }
            None => writeln!(output, "Unrecognised input '{command}'.")?,
        }

        let changed = !session.observer().is_empty();
        write_events(output, session.observer_mut())?;
        if changed {
            write!(output, "{}", session.controller().board())?;
        }
        write_prompt(output, session.controller())?;
    }

    output.flush()
}
