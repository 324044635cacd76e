use crate::config::AppConfig;
use crate::error::{BoardError, MoveError};
use crate::game::{GameController, GameObserver, Outcome, Player, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// What the terminal view has been told by the game.
#[derive(Debug, Default)]
pub struct ViewState {
    last_drop: Option<(usize, usize)>,
    finished: Option<(Outcome, Instant)>,
}

impl ViewState {
    /// Cell of the most recent piece
    pub fn last_drop(&self) -> Option<(usize, usize)> {
        self.last_drop
    }

    /// The game's outcome, once `delay` has passed since it was reported
    pub fn announced_outcome(&self, delay: Duration) -> Option<Outcome> {
        self.finished
            .filter(|(_, at)| at.elapsed() >= delay)
            .map(|(outcome, _)| outcome)
    }
}

impl GameObserver for ViewState {
    fn on_piece_dropped(&mut self, row: usize, column: usize, player: Player) {
        debug!(row, column, %player, "rendering drop");
        self.last_drop = Some((row, column));
    }

    fn on_game_over(&mut self, outcome: Outcome) {
        self.finished = Some((outcome, Instant::now()));
    }

    fn on_restart(&mut self) {
        *self = ViewState::default();
    }
}

pub struct App {
    session: Session<ViewState>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    outcome_delay: Duration,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, BoardError> {
        let controller = GameController::new(config.board.width, config.board.height)?;
        Ok(App {
            selected_column: controller.board().width() / 2, // Start in middle
            session: Session::new(controller, ViewState::default()),
            should_quit: false,
            message: None,
            outcome_delay: config.display.outcome_delay(),
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let width = self.session.controller().board().width();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < width {
                    self.selected_column = column;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.session.on_restart_requested();
                self.selected_column = width / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.session.on_column_selected(self.selected_column) {
            Ok(_) => {}
            // A full column is an ordinary miss, the key just does nothing
            Err(MoveError::ColumnFull { .. }) => {}
            Err(MoveError::GameAlreadyOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Text for the message box: explicit messages first, then the result
    /// once the announcement delay has passed
    fn status_message(&self) -> Option<String> {
        if let Some(message) = &self.message {
            return Some(message.clone());
        }
        self.session
            .observer()
            .announced_outcome(self.outcome_delay)
            .map(outcome_message)
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            self.session.controller(),
            self.session.observer(),
            self.selected_column,
            self.status_message().as_deref(),
        );
    }
}

/// End-of-game announcement
pub fn outcome_message(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win(player) => format!("{player} won!"),
        Outcome::Tie => "All cells are filled. Game is a tie.".to_string(),
    }
}
