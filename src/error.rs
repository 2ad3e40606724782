use std::path::PathBuf;

use crate::backgammon::Player;

/// Errors raised at the boundary where untrusted input meets the engine.
/// Engine misuse (illegal steps, dice outside 1..=6) panics instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("invalid die value {0} (expected 1..=6)")]
    InvalidDie(u8),

    #[error("invalid point number {0} (expected 1..=24)")]
    InvalidPoint(u8),

    #[error("cannot parse dice from '{0}' (expected e.g. '3-1')")]
    InvalidDice(String),

    #[error("{player} has {found} checkers in play (expected {expected})")]
    CheckerCount {
        player: Player,
        found: u8,
        expected: u8,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_error_display() {
        assert_eq!(
            RulesError::InvalidDie(7).to_string(),
            "invalid die value 7 (expected 1..=6)"
        );
        let err = RulesError::CheckerCount {
            player: Player::Black,
            found: 14,
            expected: 15,
        };
        assert_eq!(err.to_string(), "Black has 14 checkers in play (expected 15)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("simulation.games must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: simulation.games must be > 0"
        );
    }
}
