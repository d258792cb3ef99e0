//! Game-state core: board, move resolution, win detection, sessions.

pub mod action;
pub mod resolver;
pub mod rules;
pub mod session;
pub mod types;

pub use action::{Move, MoveError, MoveOutcome, Side};
pub use session::{GameMode, GameSession, GameView, TurnState};
pub use types::{Board, BoardError, Cell, Player, MIN_BOARD_SIZE};
