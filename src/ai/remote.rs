//! HTTP-backed move provider.
//!
//! Delegates move selection to a remote inference service. The engine core
//! treats the provider boundary opaquely; this module owns the transport
//! details: the board is encoded one character per cell (`X`, `O`, `_`)
//! with rows joined by `" | "`, POSTed together with the difficulty to the
//! service's `/move` endpoint, which answers `{"move": [row, "L" | "R"]}`.

use super::{AiConfig, Difficulty, MoveProvider, ProviderError};
use crate::game::{Board, Cell, Move, Player, Side};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Default deadline for a remote proposal.
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(5);

/// Move provider that asks a remote service for the next move.
///
/// Timeouts and connection failures surface as [`ProviderError::Timeout`]
/// and [`ProviderError::Unavailable`]; the delegate never retries — falling
/// back to a local strategy is the caller's decision.
#[derive(Debug, Clone)]
pub struct RemoteDelegate {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct MoveResponse {
    #[serde(rename = "move")]
    proposal: (usize, String),
}

impl RemoteDelegate {
    /// Creates a delegate for the service at `base_url` with the default
    /// deadline.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        Self::with_timeout(base_url, DEFAULT_REMOTE_TIMEOUT)
    }

    /// Creates a delegate with an explicit request deadline.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }
}

/// Encodes a board in the service's wire format.
pub fn encode_board(board: &Board) -> String {
    let mut encoded = String::new();
    for row in 0..board.size() {
        if row > 0 {
            encoded.push_str(" | ");
        }
        for col in 0..board.size() {
            encoded.push(match board.at(row, col) {
                Cell::Empty => '_',
                Cell::Owned(Player::First) => 'X',
                Cell::Owned(Player::Second) => 'O',
            });
        }
    }
    encoded
}

fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::None => "none",
        Difficulty::Easy => "easy",
        Difficulty::Hard => "hard",
    }
}

fn parse_side(marker: &str) -> Option<Side> {
    match marker {
        "L" => Some(Side::Left),
        "R" => Some(Side::Right),
        _ => None,
    }
}

#[async_trait::async_trait]
impl MoveProvider for RemoteDelegate {
    #[instrument(skip(self, board), fields(url = %self.base_url, difficulty = ?config.difficulty))]
    async fn propose_move(
        &mut self,
        board: &Board,
        config: &AiConfig,
    ) -> Result<Move, ProviderError> {
        let body = serde_json::json!({
            "board": encode_board(board),
            "difficulty": difficulty_label(config.difficulty),
        });
        debug!("Requesting move from remote provider");

        let response = self
            .client
            .post(format!("{}/move", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Remote provider request failed");
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::Unavailable(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Remote provider returned an error status");
            return Err(ProviderError::Unavailable(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let parsed: MoveResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
        let (row, marker) = parsed.proposal;
        let side = parse_side(&marker)
            .ok_or_else(|| ProviderError::Unavailable(format!("Bad side marker {marker:?}")))?;

        debug!(row, side = ?side, "Remote provider proposed move");
        Ok(Move::new(row, side))
    }

    fn name(&self) -> &str {
        "Remote"
    }
}
