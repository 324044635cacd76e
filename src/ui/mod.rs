//! Presentation layer: an interactive terminal view and a line-based text
//! front end for headless play.

mod app;
pub mod board_widget;
mod game_view;
pub mod text;

pub use app::{outcome_message, App, ViewState};
