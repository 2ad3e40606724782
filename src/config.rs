use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
}

/// Settings for headless random self-play.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub games: usize,
    /// Game `i` is seeded with `seed + i`.
    pub seed: u64,
    /// Games still running after this many turns are reported as unfinished.
    pub max_turns: u32,
    /// Play games on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            games: 100,
            seed: 0,
            max_turns: 2_000,
            parallel: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.games == 0 {
            return Err(ConfigError::Validation(
                "simulation.games must be > 0".into(),
            ));
        }
        if self.simulation.max_turns == 0 {
            return Err(ConfigError::Validation(
                "simulation.max_turns must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
