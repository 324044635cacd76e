//! Boundary between the rules engine and whatever presents it.
//!
//! A [`Session`] turns inbound requests (column selected, restart) into
//! controller calls and reports what happened to a [`GameObserver`]. The
//! observer is told synchronously; delaying an announcement for effect is up
//! to the presentation side.

use tracing::instrument;

use super::{GameController, MoveReport, Outcome, Player};
use crate::error::MoveError;

/// Something the presentation layer may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PieceDropped {
        row: usize,
        column: usize,
        player: Player,
    },
    GameOver(Outcome),
    Restarted,
}

/// Receives outbound notifications. Every method defaults to doing nothing.
pub trait GameObserver {
    fn on_piece_dropped(&mut self, _row: usize, _column: usize, _player: Player) {}

    fn on_game_over(&mut self, _outcome: Outcome) {}

    fn on_restart(&mut self) {}
}

impl GameObserver for () {}

/// Records every event in order.
impl GameObserver for Vec<GameEvent> {
    fn on_piece_dropped(&mut self, row: usize, column: usize, player: Player) {
        self.push(GameEvent::PieceDropped { row, column, player });
    }

    fn on_game_over(&mut self, outcome: Outcome) {
        self.push(GameEvent::GameOver(outcome));
    }

    fn on_restart(&mut self) {
        self.push(GameEvent::Restarted);
    }
}

/// A game bound to the observer that presents it.
#[derive(Debug)]
pub struct Session<O> {
    controller: GameController,
    observer: O,
}

impl<O: GameObserver> Session<O> {
    pub fn new(controller: GameController, observer: O) -> Self {
        Session {
            controller,
            observer,
        }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Play `column` for the current player. Rejected moves notify nobody.
    #[instrument(skip(self))]
    pub fn on_column_selected(&mut self, column: usize) -> Result<MoveReport, MoveError> {
        let report = self.controller.apply_move(column)?;
        self.observer
            .on_piece_dropped(report.row, report.column, report.player);
        if let Some(outcome) = report.outcome {
            self.observer.on_game_over(outcome);
        }
        Ok(report)
    }

    pub fn on_restart_requested(&mut self) {
        self.controller.restart();
        self.observer.on_restart();
    }
}
