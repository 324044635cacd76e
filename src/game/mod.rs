//! Core Connect Four rules: board and gravity drops, four-in-a-row detection,
//! the turn state machine, and the event boundary to the presentation layer.

mod board;
mod events;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};
pub use events::{GameEvent, GameObserver, Session};
pub use player::Player;
pub use state::{GameController, GameStatus, MoveReport, Outcome};
pub use win::check_win;
