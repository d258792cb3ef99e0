//! Uniform random strategy (Easy).

use super::{AiConfig, MoveProvider, ProviderError};
use crate::game::{Board, Move, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Picks a row and a side uniformly at random.
///
/// The pick is deliberately not checked for legality: a full row surfaces
/// as `RowFull` when the proposal goes through the resolver, and whether to
/// keep sampling until a legal move appears is the host's retry policy, not
/// an engine guarantee.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a strategy seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub(super) fn pick(&mut self, board: &Board) -> Move {
        let row = self.rng.random_range(0..board.size());
        let side = if self.rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };
        Move::new(row, side)
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MoveProvider for RandomStrategy {
    async fn propose_move(
        &mut self,
        board: &Board,
        _config: &AiConfig,
    ) -> Result<Move, ProviderError> {
        let mv = self.pick(board);
        debug!(row = mv.row, side = ?mv.side, "Random strategy proposed move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
