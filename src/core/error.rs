//! Error types.
//!
//! Rejected commands never change state; callers can retry with a
//! different command.

use super::player::PlayerId;

/// Errors raised while validating a `GameConfig`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("player count must be 2-4, got {0}")]
    InvalidPlayerCount(usize),

    #[error("{given} names given for {players} players")]
    TooManyNames { given: usize, players: usize },

    #[error("invalid name for {player}: {reason}")]
    InvalidName { player: PlayerId, reason: String },
}

/// Errors raised when a command is not valid in the current turn state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("a die roll is already pending; select a move first")]
    RollPending,

    #[error("no die roll is pending")]
    NoPendingRoll,

    #[error("move is not in the current legal move list")]
    IllegalMove,

    #[error("forced die value {0} is not in 1..=6")]
    InvalidDieValue(u8),

    #[error("the game is over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidName {
            player: PlayerId::new(2),
            reason: "contains control characters".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid name for Player 2: contains control characters"
        );
        assert_eq!(
            ConfigError::InvalidPlayerCount(5).to_string(),
            "player count must be 2-4, got 5"
        );
    }

    #[test]
    fn test_command_error_display() {
        assert_eq!(
            CommandError::InvalidDieValue(9).to_string(),
            "forced die value 9 is not in 1..=6"
        );
        assert_eq!(CommandError::GameOver.to_string(), "the game is over");
    }
}
