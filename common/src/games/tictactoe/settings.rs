use serde::{Deserialize, Serialize};

use crate::GameError;
use crate::config::Validate;
use super::types::GameMode;

pub const MAX_OPPONENT_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSettings {
    pub mode: GameMode,
    /// Pause before the opponent answers, purely cosmetic.
    pub opponent_delay_ms: u64,
    /// Fixed seed for the opponent's random fallback; fresh per run when absent.
    pub seed: Option<u64>,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::Single,
            opponent_delay_ms: 500,
            seed: None,
        }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), GameError> {
        if self.opponent_delay_ms > MAX_OPPONENT_DELAY_MS {
            return Err(GameError::InvalidConfiguration(format!(
                "opponent_delay_ms must not exceed {} (got {})",
                MAX_OPPONENT_DELAY_MS, self.opponent_delay_ms
            )));
        }
        Ok(())
    }
}
