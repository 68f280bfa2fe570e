use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::engine::{Board, CATALOG};
use crate::error::{ConfigError, EngineError};
use crate::solver::{generate_playable, generate_playable_bounded};

/// Game configuration, loadable from TOML.
///
/// Missing keys fall back to the defaults: an 8x10 board, entropy seeding,
/// unbounded generation retries, 40 shuffle attempts and 10 points per pair.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Cap on generate-until-solvable attempts; `None` retries forever.
    pub max_generation_attempts: Option<u32>,
    /// How many reshuffles `Game::shuffle` tries while looking for a board with a move.
    pub shuffle_attempts: u32,
    pub points_per_pair: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 8,
            cols: 10,
            seed: None,
            max_generation_attempts: None,
            shuffle_attempts: 40,
            points_per_pair: 10,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
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

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Validation("rows and cols must be > 0".into()));
        }
        let cells = self.rows.checked_mul(self.cols).ok_or_else(|| {
            ConfigError::Validation(format!("{}x{} board is too large", self.rows, self.cols))
        })?;
        if cells % 2 != 0 {
            return Err(ConfigError::Validation(format!(
                "{}x{} board has an odd number of cells",
                self.rows, self.cols
            )));
        }
        if cells / 2 > CATALOG.len() {
            return Err(ConfigError::Validation(format!(
                "{}x{} board needs {} symbols but the catalog has {}",
                self.rows,
                self.cols,
                cells / 2,
                CATALOG.len()
            )));
        }
        if self.shuffle_attempts == 0 {
            return Err(ConfigError::Validation("shuffle_attempts must be > 0".into()));
        }
        if self.max_generation_attempts == Some(0) {
            return Err(ConfigError::Validation(
                "max_generation_attempts must be > 0 when set".into(),
            ));
        }
        Ok(())
    }

    /// Builds the RNG described by `seed`.
    pub fn make_rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }

    /// Generates a solvable board of the configured size, honoring the attempt cap.
    pub fn generate_board<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, EngineError> {
        match self.max_generation_attempts {
            Some(limit) => generate_playable_bounded(self.rows, self.cols, limit, rng),
            None => generate_playable(self.rows, self.cols, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::is_solvable;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rows * config.cols / 2, CATALOG.len());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("rows = 4\ncols = 6\nseed = 9\n").unwrap();
        assert_eq!(config.rows, 4);
        assert_eq!(config.cols, 6);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.shuffle_attempts, 40);
        assert_eq!(config.points_per_pair, 10);
        assert_eq!(config.max_generation_attempts, None);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = GameConfig {
            rows: 6,
            cols: 6,
            seed: Some(1),
            max_generation_attempts: Some(50),
            shuffle_attempts: 5,
            points_per_pair: 2,
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: GameConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validation_rejects_bad_boards() {
        let odd = GameConfig {
            rows: 3,
            cols: 3,
            ..GameConfig::default()
        };
        assert!(odd.validate().is_err());

        let too_big = GameConfig {
            rows: 10,
            cols: 10,
            ..GameConfig::default()
        };
        let err = too_big.validate().unwrap_err();
        assert!(err.to_string().contains("needs 50 symbols"));

        let zero = GameConfig {
            rows: 0,
            ..GameConfig::default()
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_attempts() {
        let no_shuffles = GameConfig {
            shuffle_attempts: 0,
            ..GameConfig::default()
        };
        assert!(no_shuffles.validate().is_err());

        let no_generation = GameConfig {
            max_generation_attempts: Some(0),
            ..GameConfig::default()
        };
        assert!(no_generation.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new("definitely/not/here/shisen.toml");
        assert!(matches!(
            GameConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
        assert_eq!(
            GameConfig::load_or_default(path).unwrap(),
            GameConfig::default()
        );
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = GameConfig {
            rows: 4,
            cols: 4,
            seed: Some(77),
            max_generation_attempts: Some(500),
            ..GameConfig::default()
        };
        let first = config.generate_board(&mut config.make_rng()).unwrap();
        let second = config.generate_board(&mut config.make_rng()).unwrap();
        assert_eq!(first, second);
        assert!(is_solvable(&first));
    }
}
