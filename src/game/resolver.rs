//! Insertion resolution: where a stacked marker lands.
//!
//! A side-stacker move slides inward from the chosen end of a row until it
//! meets the nearest occupied cell or the far wall. A row can be open from
//! one side and full from the other once markers meet in the middle.

use super::action::{Move, MoveError, Side};
use super::types::{Board, Player};
use tracing::instrument;

/// Finds the landing column for a move without mutating the board.
///
/// Walks from the chosen side past occupied cells. Returns `None` when the
/// row is outside the board or the walk leaves the grid before reaching an
/// empty cell.
pub fn landing_column(board: &Board, mv: Move) -> Option<usize> {
    if mv.row >= board.size() {
        return None;
    }
    let size = board.size() as i32;
    let (mut col, step) = match mv.side {
        Side::Left => (0, 1),
        Side::Right => (size - 1, -1),
    };
    while col >= 0 && col < size {
        if board.is_empty(mv.row, col as usize) {
            return Some(col as usize);
        }
        col += step;
    }
    None
}

/// Validates and applies a move for `player`, returning the landing cell.
///
/// A rejected move leaves the board unchanged.
///
/// # Errors
///
/// Returns `MoveError::OutOfRange` for a row outside the board and
/// `MoveError::RowFull` when the walk finds no open cell from that side.
#[instrument(skip(board), fields(row = mv.row, side = ?mv.side, player = ?player))]
pub fn resolve_and_apply(
    board: &mut Board,
    mv: Move,
    player: Player,
) -> Result<(usize, usize), MoveError> {
    if mv.row >= board.size() {
        return Err(MoveError::OutOfRange(mv.row));
    }
    let col = landing_column(board, mv).ok_or(MoveError::RowFull(mv.row, mv.side))?;
    match board.set(mv.row, col, player) {
        Ok(()) => Ok((mv.row, col)),
        Err(_) => unreachable!("landing column was probed empty and in range"),
    }
}
