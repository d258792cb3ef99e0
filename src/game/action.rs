//! First-class move types for side insertion.
//!
//! Moves are domain events, not side effects: they carry the player's
//! intent (a row and the end to stack from) and are validated by the
//! resolver before anything touches the board.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// End of a row a marker is inserted from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Side {
    /// Insert from column 0, sliding right.
    Left,
    /// Insert from the last column, sliding left.
    Right,
}

/// A requested insertion: a row plus the side to stack from.
///
/// Ephemeral — produced by input or an AI provider and consumed by the
/// resolver. The landing cell may differ from the nominal endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target row.
    pub row: usize,
    /// End of the row to insert from.
    pub side: Side,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, side: Side) -> Self {
        Self { row, side }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {} from {:?}", self.row, self.side)
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Marker placed; the turn advances. Carries the landing cell.
    Applied {
        /// The (row, col) the marker settled in.
        landing: (usize, usize),
    },
    /// Marker placed and completed four in a row; the game is over.
    Won {
        /// The winning player.
        player: Player,
    },
}

/// Error that can occur when validating or applying a move.
///
/// None of these are fatal: `OutOfRange` and `RowFull` mean "pick another
/// row or side", `NotYourTurn` and `GameAlreadyOver` mean the request was
/// stale and was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The requested row is outside the board.
    #[display("Row {} is outside the board", _0)]
    OutOfRange(usize),

    /// The row has no open cell when walked from that side.
    #[display("Row {} is full from the {:?} side", _0, _1)]
    RowFull(usize, Side),

    /// The submitting player is not the player to move.
    #[display("It's not {:?}'s turn", _0)]
    NotYourTurn(Player),

    /// A move arrived after the game ended.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}
