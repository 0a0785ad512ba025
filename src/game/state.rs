use tracing::{debug, info};

use crate::error::GameError;

use super::{Board, Player};

/// Where a round stands. Anything other than `InProgress` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

/// What a successful drop did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Win(Player),
    Tie,
}

/// A successful drop: who moved, where the piece landed, and the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropResult {
    pub outcome: Outcome,
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Create a round on a `height` x `width` board. Player 1 moves first.
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        Ok(GameState {
            board: Board::new(height, width)?,
            current_player: Player::One,
            status: GameStatus::InProgress,
        })
    }

    /// Create a round on the standard 6x7 board
    pub fn standard() -> Self {
        GameState {
            board: Board::default(),
            current_player: Player::One,
            status: GameStatus::InProgress,
        }
    }

    pub fn height(&self) -> usize {
        self.board.rows()
    }

    pub fn width(&self) -> usize {
        self.board.cols()
    }

    /// Get current player. After a win this is the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Pieces placed so far this round
    pub fn move_count(&self) -> usize {
        self.board.piece_count()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Lowest empty row in `column`, or `None` when the column is full
    pub fn find_landing_row(&self, column: usize) -> Result<Option<usize>, GameError> {
        self.board.find_landing_row(column)
    }

    /// Check whether `player` has four in a row anywhere on the board
    pub fn check_win(&self, player: Player) -> bool {
        self.board.check_win(player)
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Either the whole move applies or nothing changes: every error leaves
    /// the board, current player, and status as they were. The turn passes
    /// to the other player only when the round continues.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropResult, GameError> {
        if self.is_terminal() {
            debug!(column, status = ?self.status, "drop rejected: round is over");
            return Err(GameError::GameAlreadyOver);
        }

        let player = self.current_player;
        let row = self
            .board
            .drop_piece(column, player.to_cell())
            .inspect_err(|err| debug!(column, player = player.number(), %err, "drop rejected"))?;
        debug!(row, column, player = player.number(), "piece dropped");

        let outcome = if self.board.check_win(player) {
            self.status = GameStatus::Won(player);
            info!(player = player.number(), moves = self.move_count(), "round won");
            Outcome::Win(player)
        } else if self.board.is_full() {
            self.status = GameStatus::Tied;
            info!(moves = self.move_count(), "round tied");
            Outcome::Tie
        } else {
            self.current_player = player.other();
            Outcome::Continue
        };

        Ok(DropResult {
            outcome,
            row,
            column,
            player,
        })
    }

    /// Start a new round on a freshly cleared board of the same size
    pub fn reset(&mut self) {
        self.board = self.board.cleared();
        self.current_player = Player::One;
        self.status = GameStatus::InProgress;
        info!(height = self.height(), width = self.width(), "round reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}
