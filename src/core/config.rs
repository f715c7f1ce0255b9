//! Game configuration.
//!
//! A `GameConfig` is built up front and validated once when the game is
//! created; nothing downstream re-checks seat counts or names.
//!
//! ```
//! use reverse_ludo::core::GameConfig;
//!
//! let config = GameConfig::new(3)
//!     .with_names(["Ana", "", "Kofi"])
//!     .with_seed(7);
//!
//! let names = config.resolved_names().unwrap();
//! assert_eq!(names, vec!["Ana", "Player 2", "Kofi"]);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::{PlayerId, MAX_PLAYERS, MIN_PLAYERS};

/// Reverse moves each player starts with.
pub const DEFAULT_REVERSE_BUDGET: u8 = 10;

/// Longest display name accepted, in characters, after trimming.
pub const MAX_NAME_LEN: usize = 24;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (2-4).
    pub player_count: usize,

    /// Display names as entered, in seat order. Missing or blank entries
    /// fall back to `"Player N"`.
    pub names: Vec<String>,

    /// Reverse moves per player.
    pub reverse_budget: u8,

    /// Dice seed.
    pub seed: u64,

    /// Keep playing after the first winner until the ranking is settled.
    pub play_to_completion: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MAX_PLAYERS)
    }
}

impl GameConfig {
    /// Create a configuration for `player_count` seats with default rules.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            names: Vec::new(),
            reverse_budget: DEFAULT_REVERSE_BUDGET,
            seed: 0,
            play_to_completion: false,
        }
    }

    /// Append one display name (next seat).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Replace all display names.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_reverse_budget(mut self, budget: u8) -> Self {
        self.reverse_budget = budget;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Continue after the first winner instead of ending the game.
    #[must_use]
    pub fn play_to_completion(mut self) -> Self {
        self.play_to_completion = true;
        self
    }

    /// Check seat count and names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolved_names().map(|_| ())
    }

    /// Display names in seat order with defaults filled in.
    pub fn resolved_names(&self) -> Result<Vec<String>, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::InvalidPlayerCount(self.player_count));
        }
        if self.names.len() > self.player_count {
            return Err(ConfigError::TooManyNames {
                given: self.names.len(),
                players: self.player_count,
            });
        }

        PlayerId::all(self.player_count)
            .map(|player| {
                let raw = self.names.get(player.index()).map_or("", |s| s.trim());
                check_name(player, raw)
            })
            .collect()
    }
}

fn check_name(player: PlayerId, name: &str) -> Result<String, ConfigError> {
    if name.is_empty() {
        return Ok(player.to_string());
    }
    if name.chars().any(char::is_control) {
        return Err(ConfigError::InvalidName {
            player,
            reason: "contains control characters".to_string(),
        });
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ConfigError::InvalidName {
            player,
            reason: format!("{len} characters, at most {MAX_NAME_LEN} allowed"),
        });
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 4);
        assert_eq!(config.reverse_budget, DEFAULT_REVERSE_BUDGET);
        assert!(!config.play_to_completion);
        assert_eq!(
            config.resolved_names().unwrap(),
            vec!["Player 1", "Player 2", "Player 3", "Player 4"]
        );
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(2)
            .with_name("  Ana  ")
            .with_name("Ben")
            .with_reverse_budget(3)
            .with_seed(99)
            .play_to_completion();

        assert_eq!(config.resolved_names().unwrap(), vec!["Ana", "Ben"]);
        assert_eq!(config.reverse_budget, 3);
        assert_eq!(config.seed, 99);
        assert!(config.play_to_completion);
    }

    #[test]
    fn test_player_count_bounds() {
        assert_eq!(
            GameConfig::new(1).validate(),
            Err(ConfigError::InvalidPlayerCount(1))
        );
        assert_eq!(
            GameConfig::new(5).validate(),
            Err(ConfigError::InvalidPlayerCount(5))
        );
        for count in 2..=4 {
            assert!(GameConfig::new(count).validate().is_ok());
        }
    }

    #[test]
    fn test_blank_names_get_defaults() {
        let config = GameConfig::new(3).with_names(["", "   "]);
        assert_eq!(
            config.resolved_names().unwrap(),
            vec!["Player 1", "Player 2", "Player 3"]
        );
    }

    #[test]
    fn test_malformed_names_rejected() {
        let config = GameConfig::new(2).with_names(["ok", "bad\u{7}"]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidName { player, .. }) if player == PlayerId::new(2)
        ));

        let long = "x".repeat(MAX_NAME_LEN + 1);
        let config = GameConfig::new(2).with_names([long]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidName { player, .. }) if player == PlayerId::new(1)
        ));
    }

    #[test]
    fn test_too_many_names() {
        let config = GameConfig::new(2).with_names(["a", "b", "c"]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyNames { given: 3, players: 2 })
        );
    }
}
