//! One-ply lookahead strategy (Hard).

use super::random::RandomStrategy;
use super::{AiConfig, MoveProvider, ProviderError};
use crate::game::{resolver, rules, Board, Move, Player, Side};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Plays an immediately winning move when one exists, otherwise random.
///
/// Candidates are enumerated row-major, Left before Right, and the first
/// simulated win is returned — a deterministic tie-break. This is depth
/// one only: it does not block opponent threats and does not search
/// further ahead.
pub struct LookaheadStrategy {
    fallback: RandomStrategy,
}

impl LookaheadStrategy {
    /// Creates the strategy with a fresh random fallback.
    pub fn new() -> Self {
        Self {
            fallback: RandomStrategy::new(),
        }
    }

    /// Finds the first move that wins outright for `player`, if any.
    ///
    /// Each candidate is simulated through the resolver against a copy of
    /// the board; the live board is never touched.
    #[instrument(skip(board))]
    pub fn winning_move(board: &Board, player: Player) -> Option<Move> {
        for row in 0..board.size() {
            for side in Side::iter() {
                let mv = Move::new(row, side);
                let mut probe = board.clone();
                if resolver::resolve_and_apply(&mut probe, mv, player).is_ok()
                    && rules::has_won(&probe, player)
                {
                    return Some(mv);
                }
            }
        }
        None
    }
}

impl Default for LookaheadStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MoveProvider for LookaheadStrategy {
    async fn propose_move(
        &mut self,
        board: &Board,
        config: &AiConfig,
    ) -> Result<Move, ProviderError> {
        if let Some(mv) = Self::winning_move(board, config.player) {
            debug!(row = mv.row, side = ?mv.side, "Taking immediate win");
            return Ok(mv);
        }
        self.fallback.propose_move(board, config).await
    }

    fn name(&self) -> &str {
        "Lookahead"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_win_on_empty_board() {
        let board = Board::new(7).unwrap();
        assert_eq!(LookaheadStrategy::winning_move(&board, Player::First), None);
    }

    #[test]
    fn test_completes_open_run_from_left() {
        let mut board = Board::new(7).unwrap();
        for col in 0..3 {
            board.set(0, col, Player::First).unwrap();
        }
        // Left insert into row 0 slides past the three markers and lands
        // at column 3, completing the run.
        assert_eq!(
            LookaheadStrategy::winning_move(&board, Player::First),
            Some(Move::new(0, Side::Left))
        );
    }

    #[test]
    fn test_completes_vertical_run() {
        let mut board = Board::new(7).unwrap();
        for row in 0..3 {
            board.set(row, 0, Player::Second).unwrap();
        }
        assert_eq!(
            LookaheadStrategy::winning_move(&board, Player::Second),
            Some(Move::new(3, Side::Left))
        );
    }

    #[test]
    fn test_first_candidate_in_scan_order_wins_ties() {
        let mut board = Board::new(7).unwrap();
        // Winning completions available in rows 2 and 5; row 2 enumerates first.
        for col in 0..3 {
            board.set(2, col, Player::First).unwrap();
            board.set(5, col, Player::First).unwrap();
        }
        assert_eq!(
            LookaheadStrategy::winning_move(&board, Player::First),
            Some(Move::new(2, Side::Left))
        );
    }

    #[test]
    fn test_opponent_threat_is_not_a_win() {
        let mut board = Board::new(7).unwrap();
        for col in 0..3 {
            board.set(4, col, Player::Second).unwrap();
        }
        assert_eq!(LookaheadStrategy::winning_move(&board, Player::First), None);
    }
}
