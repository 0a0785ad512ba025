//! # Connect Four
//!
//! Two-player Connect Four in the terminal. Players take turns dropping
//! pieces into a column; four in a row horizontally, vertically, or
//! diagonally wins, and a full board with no winner is a tie.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, round state machine
//! - [`ui`] — Terminal UI presenter built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
