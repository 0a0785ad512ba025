//! Core Connect Four game logic: board representation, player types, and the
//! round state machine. Nothing here depends on the terminal UI.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, RUN_LENGTH};
pub use player::Player;
pub use state::{DropResult, GameState, GameStatus, Outcome};
