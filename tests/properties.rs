//! Property tests over random move sequences.
//!
//! Invariants covered:
//! - Gravity: no piece ever sits above an empty cell.
//! - Turn parity: Player 1 is to move after an even number of continuing drops.
//! - Rejected drops leave the whole state untouched.
//! - Only a terminal drop stops the turn from advancing.

use connect_four::game::{Board, Cell, GameState, GameStatus, Outcome, Player};
use proptest::prelude::*;

fn assert_gravity(board: &Board) {
    for col in 0..board.cols() {
        let mut seen_piece = false;
        for row in 0..board.rows() {
            let occupied = board.get(row, col) != Cell::Empty;
            assert!(
                occupied || !seen_piece,
                "empty cell ({row}, {col}) below a piece"
            );
            seen_piece |= occupied;
        }
    }
}

proptest! {
    #[test]
    fn random_rounds_hold_invariants(
        height in 4usize..=8,
        width in 4usize..=8,
        moves in prop::collection::vec(0usize..10, 0..120),
    ) {
        let mut state = GameState::new(height, width).unwrap();
        let mut continuing = 0usize;

        for column in moves {
            let before = state.clone();
            let expected_row = before.find_landing_row(column).ok().flatten();

            match state.drop_piece(column) {
                Ok(result) => {
                    prop_assert_eq!(Some(result.row), expected_row);
                    prop_assert_eq!(result.player, before.current_player());
                    prop_assert_eq!(state.move_count(), before.move_count() + 1);
                    match result.outcome {
                        Outcome::Continue => {
                            continuing += 1;
                            prop_assert_eq!(state.status(), GameStatus::InProgress);
                        }
                        Outcome::Win(player) => {
                            prop_assert_eq!(state.status(), GameStatus::Won(player));
                            prop_assert_eq!(state.current_player(), player);
                            prop_assert!(state.check_win(player));
                        }
                        Outcome::Tie => {
                            prop_assert_eq!(state.status(), GameStatus::Tied);
                            prop_assert!(state.board().is_full());
                        }
                    }
                }
                Err(_) => {
                    prop_assert_eq!(&state, &before);
                }
            }

            assert_gravity(state.board());
            if !state.is_terminal() {
                let expected = if continuing % 2 == 0 { Player::One } else { Player::Two };
                prop_assert_eq!(state.current_player(), expected);
            }
        }
    }

    #[test]
    fn reset_always_restores_a_fresh_round(
        height in 4usize..=7,
        width in 4usize..=7,
        moves in prop::collection::vec(0usize..7, 0..60),
    ) {
        let mut state = GameState::new(height, width).unwrap();
        for column in moves {
            let _ = state.drop_piece(column);
        }
        state.reset();
        prop_assert_eq!(state, GameState::new(height, width).unwrap());
    }
}
