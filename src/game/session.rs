//! Game sessions: turn control and the host-facing move surface.

use super::action::{Move, MoveError, MoveOutcome, Side};
use super::resolver;
use super::rules;
use super::types::{Board, BoardError, Player};
use crate::ai::{AiConfig, Difficulty, MoveProvider, ProviderError};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Whose turn it is, or who has won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Game is ongoing; the named player moves next.
    InProgress(Player),
    /// Terminal: the named player completed four in a row.
    /// No further moves are accepted.
    Won(Player),
}

impl TurnState {
    /// Returns the player to move, if the game is still running.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            TurnState::InProgress(player) => Some(*player),
            TurnState::Won(_) => None,
        }
    }

    /// Returns the winner, if the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self {
            TurnState::Won(player) => Some(*player),
            TurnState::InProgress(_) => None,
        }
    }
}

/// Who is playing this match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two external inputs alternate.
    PlayerVsPlayer,
    /// One seat is driven by an AI move provider.
    PlayerVsAi(AiConfig),
}

/// Read-only projection of a session for rendering.
///
/// Repeated calls to [`GameSession::current_state`] without an intervening
/// accepted move return identical views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Snapshot of the grid.
    pub board: Board,
    /// Snapshot of the turn state.
    pub turn: TurnState,
}

/// A single match: board, turn state, mode, and accepted-move history.
///
/// The session is the only unit of mutable state in the engine; each match
/// owns its board and turn state exclusively, so concurrent sessions never
/// interfere. Move application is one atomic step behind `&mut self` —
/// resolve, apply, win-check, advance — so no partial application is ever
/// observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    turn: TurnState,
    mode: GameMode,
    history: Vec<Move>,
}

// ─────────────────────────────────────────────────────────────
//  Construction and read access
// ─────────────────────────────────────────────────────────────

impl GameSession {
    /// Creates a session with an empty board; `First` moves first.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::SizeTooSmall` for boards that cannot hold a
    /// four-in-a-row.
    #[instrument]
    pub fn new(size: usize, mode: GameMode) -> Result<Self, BoardError> {
        let board = Board::new(size)?;
        info!(size, ?mode, "Creating game session");
        Ok(Self {
            board,
            turn: TurnState::InProgress(Player::First),
            mode,
            history: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn state.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Returns the configured mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the accepted moves in application order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Read-only snapshot for rendering.
    pub fn current_state(&self) -> GameView {
        GameView {
            board: self.board.clone(),
            turn: self.turn,
        }
    }

    /// Every (row, side) that currently has an open landing cell.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..self.board.size() {
            for side in Side::iter() {
                let mv = Move::new(row, side);
                if resolver::landing_column(&self.board, mv).is_some() {
                    moves.push(mv);
                }
            }
        }
        moves
    }
}

// ─────────────────────────────────────────────────────────────
//  Move application
// ─────────────────────────────────────────────────────────────

impl GameSession {
    /// Validates and applies one move for `player`.
    ///
    /// On success the turn advances — or the game ends, when the move
    /// completes four in a row. A rejected move leaves the session
    /// untouched; the error tells the caller whether to pick another row
    /// or side (`OutOfRange`, `RowFull`) or to drop a stale request
    /// (`NotYourTurn`, `GameAlreadyOver`).
    #[instrument(skip(self), fields(row = mv.row, side = ?mv.side, player = ?player))]
    pub fn submit_move(&mut self, mv: Move, player: Player) -> Result<MoveOutcome, MoveError> {
        let current = match self.turn {
            TurnState::Won(winner) => {
                warn!(?winner, "Move submitted after game end");
                return Err(MoveError::GameAlreadyOver);
            }
            TurnState::InProgress(current) => current,
        };
        if player != current {
            warn!(expected = ?current, "Move submitted out of turn");
            return Err(MoveError::NotYourTurn(player));
        }

        let landing = resolver::resolve_and_apply(&mut self.board, mv, player)?;
        self.history.push(mv);

        if rules::has_won(&self.board, player) {
            info!(winner = ?player, ?landing, "Winning move");
            self.turn = TurnState::Won(player);
            return Ok(MoveOutcome::Won { player });
        }

        self.turn = TurnState::InProgress(player.opponent());
        debug!(?landing, next = ?player.opponent(), "Move applied");
        Ok(MoveOutcome::Applied { landing })
    }

    /// Empties the board and hands the turn back to `First`.
    ///
    /// Allowed at any time; the size and mode are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting session");
        self.board.clear();
        self.turn = TurnState::InProgress(Player::First);
        self.history.clear();
    }

    /// Replays a move sequence onto a fresh session with this session's
    /// size and mode, alternating players from `First`.
    ///
    /// # Errors
    ///
    /// Returns the first rejection, including `GameAlreadyOver` when the
    /// sequence continues past a winning move.
    #[instrument(skip(self, moves), fields(count = moves.len()))]
    pub fn replay(&self, moves: &[Move]) -> Result<Self, MoveError> {
        let mut board = self.board.clone();
        board.clear();
        let mut session = Self {
            board,
            turn: TurnState::InProgress(Player::First),
            mode: self.mode,
            history: Vec::new(),
        };
        for mv in moves {
            let player = match session.turn.to_move() {
                Some(player) => player,
                None => return Err(MoveError::GameAlreadyOver),
            };
            session.submit_move(*mv, player)?;
        }
        Ok(session)
    }
}

// ─────────────────────────────────────────────────────────────
//  AI integration
// ─────────────────────────────────────────────────────────────

impl GameSession {
    /// True when the configured AI owns the next turn.
    ///
    /// Hosts poll this after every accepted move to decide whether to call
    /// [`GameSession::request_ai_move`].
    pub fn expects_ai_move(&self) -> bool {
        match (self.mode, self.turn) {
            (GameMode::PlayerVsAi(ai), TurnState::InProgress(current)) => {
                ai.player == current && ai.difficulty != Difficulty::None
            }
            _ => false,
        }
    }

    /// Asks `provider` for the AI's next move.
    ///
    /// The proposal is returned unapplied; pass it back through
    /// [`GameSession::submit_move`], which may still reject it. The session
    /// stays mutably borrowed while the call is pending, so no other move
    /// can race into this turn. A failed provider is never retried here.
    ///
    /// # Errors
    ///
    /// `Disabled` when the session has no AI seat, `NotAiTurn` when the AI
    /// does not own the current turn, and the provider's own `Timeout` /
    /// `Unavailable` failures.
    #[instrument(skip(self, provider), fields(provider = provider.name()))]
    pub async fn request_ai_move(
        &mut self,
        provider: &mut dyn MoveProvider,
    ) -> Result<Move, ProviderError> {
        let config = match self.mode {
            GameMode::PlayerVsAi(config) => config,
            GameMode::PlayerVsPlayer => {
                warn!("AI move requested in a player-vs-player session");
                return Err(ProviderError::Disabled);
            }
        };
        if config.difficulty == Difficulty::None {
            return Err(ProviderError::Disabled);
        }
        if !self.expects_ai_move() {
            warn!(turn = ?self.turn, "AI move requested out of turn");
            return Err(ProviderError::NotAiTurn);
        }

        let mv = provider.propose_move(&self.board, &config).await?;
        debug!(row = mv.row, side = ?mv.side, "Provider proposed move");
        Ok(mv)
    }
}
