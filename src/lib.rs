//! # Connect Four
//!
//! Rules engine and turn loop for two-player Connect Four, with a terminal UI
//! built on Ratatui and a plain-text front end for scripted play.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, turn state machine
//! - [`ui`] — Terminal UI and text front end
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
