//! Side-stacker game engine.
//!
//! Two players alternately insert markers into a row from its left or
//! right end; the marker slides inward until it meets the nearest occupied
//! cell or the far wall, and four consecutive same-owner markers —
//! horizontal, vertical, or diagonal — win. This crate is the game-state
//! core: board representation, move resolution, win detection, turn
//! management, and AI move providers at two difficulty tiers, with a
//! pluggable delegate boundary so a network-backed provider can replace
//! the local heuristics.
//!
//! Rendering and input capture are host concerns: hosts read
//! [`GameSession::current_state`] to draw, feed
//! [`GameSession::submit_move`] with (row, side) requests, and poll
//! [`GameSession::expects_ai_move`] to drive the AI seat.
//!
//! # Example
//!
//! ```
//! use side_stacker::{GameMode, GameSession, Move, MoveOutcome, Player, Side};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = GameSession::new(7, GameMode::PlayerVsPlayer)?;
//! let outcome = session.submit_move(Move::new(0, Side::Left), Player::First)?;
//! assert_eq!(outcome, MoveOutcome::Applied { landing: (0, 0) });
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod ai;
mod config;
mod game;

// Crate-level exports - AI move providers
pub use ai::{
    encode_board, local_provider, AiConfig, Difficulty, LookaheadStrategy, MoveProvider,
    ProviderError, RandomStrategy, RemoteDelegate, DEFAULT_REMOTE_TIMEOUT,
};

// Crate-level exports - Match configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Game-state core
pub use game::{
    Board, BoardError, Cell, GameMode, GameSession, GameView, Move, MoveError, MoveOutcome,
    Player, Side, TurnState, MIN_BOARD_SIZE,
};

// Crate-level exports - Rules and resolution, for hosts evaluating
// board copies directly
pub use game::resolver::{landing_column, resolve_and_apply};
pub use game::rules::{check_winner, has_won, WIN_LENGTH};
