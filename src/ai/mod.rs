//! AI move providers: local strategies and the remote-delegate boundary.
//!
//! Every provider — local or network-backed — implements [`MoveProvider`].
//! A proposal is only a candidate: the session passes it through the move
//! resolver before anything is applied, so an illegal proposal surfaces as
//! a rejected move, never as corrupted state.

mod lookahead;
mod random;
mod remote;

pub use lookahead::LookaheadStrategy;
pub use random::RandomStrategy;
pub use remote::{encode_board, RemoteDelegate, DEFAULT_REMOTE_TIMEOUT};

use crate::game::{Board, Move, Player};
use serde::{Deserialize, Serialize};

/// AI difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// AI disabled; moves come only from external input.
    None,
    /// Uniform random row and side.
    Easy,
    /// One-ply lookahead: win now if possible, otherwise random.
    Hard,
}

/// Read-only AI settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Which seat the AI controls.
    pub player: Player,
}

/// Errors from a move provider.
///
/// All recoverable: the caller falls back to a local strategy or surfaces
/// the failure to the player. The engine never retries on its own.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ProviderError {
    /// Provider did not answer within its deadline.
    #[display("Move provider timed out")]
    Timeout,

    /// Provider could not be reached or returned an unusable answer.
    #[display("Move provider unavailable: {}", _0)]
    Unavailable(String),

    /// No AI strategy is configured for this session.
    #[display("AI is disabled for this session")]
    Disabled,

    /// An AI move was requested when the AI does not own the turn.
    #[display("AI move requested out of turn")]
    NotAiTurn,
}

impl std::error::Error for ProviderError {}

/// Anything that can propose a move for the AI-controlled player.
///
/// The board reference is a read-only snapshot; providers simulate on
/// copies and never touch live session state.
#[async_trait::async_trait]
pub trait MoveProvider: Send {
    /// Proposes a move for the configured player on the given board.
    async fn propose_move(
        &mut self,
        board: &Board,
        config: &AiConfig,
    ) -> Result<Move, ProviderError>;

    /// Display name of the provider.
    fn name(&self) -> &str;
}

/// Builds the local strategy for a difficulty tier.
///
/// Returns `None` for [`Difficulty::None`]; a host wiring in a
/// [`RemoteDelegate`] skips this and constructs the delegate directly.
pub fn local_provider(difficulty: Difficulty) -> Option<Box<dyn MoveProvider>> {
    match difficulty {
        Difficulty::None => None,
        Difficulty::Easy => Some(Box::new(RandomStrategy::new())),
        Difficulty::Hard => Some(Box::new(LookaheadStrategy::new())),
    }
}
