//! Four-in-a-row detection.

use crate::game::types::{Board, Cell, Player};
use tracing::instrument;

/// Length of a winning run.
pub const WIN_LENGTH: usize = 4;

/// Direction vectors walked forward from each anchor cell: horizontal,
/// vertical, and the two diagonals. Mirrored vectors are intentionally
/// omitted — a run missed in one direction is found from its other end by
/// one of these four, anchored at a different cell.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Checks if there is a completed run on the board.
///
/// Scans row-major, column ascending; every occupied cell anchors a forward
/// walk of up to [`WIN_LENGTH`] steps along each direction vector. Pure and
/// allocation-free — safe to run on any board copy, which is how the
/// lookahead strategy evaluates hypothetical positions.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let size = board.size() as i32;
    for row in 0..board.size() {
        for col in 0..board.size() {
            let Cell::Owned(player) = board.at(row, col) else {
                continue;
            };
            for (dr, dc) in DIRECTIONS {
                let mut count = 1;
                for step in 1..WIN_LENGTH as i32 {
                    let r = row as i32 + step * dr;
                    let c = col as i32 + step * dc;
                    if r < 0 || r >= size || c < 0 || c >= size {
                        break;
                    }
                    if board.at(r as usize, c as usize) != Cell::Owned(player) {
                        break;
                    }
                    count += 1;
                }
                if count == WIN_LENGTH {
                    return Some(player);
                }
            }
        }
    }
    None
}

/// Checks if `player` has a completed run on the board.
pub fn has_won(board: &Board, player: Player) -> bool {
    check_winner(board) == Some(player)
}
