//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DatasetConfig, OutputConfig, TrainConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`OPENSET_*`)
/// 3. Project config (`openset.toml` in the run root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OpensetConfig {
    pub dataset: DatasetConfig,
    pub training: TrainConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dataset_root: Option<std::path::PathBuf>,
    pub output_dir: Option<std::path::PathBuf>,
    pub seed: Option<u64>,
    pub epochs: Option<u32>,
}

impl OpensetConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join("openset.toml");
        if project_config_path.exists() {
            let content = std::fs::read_to_string(&project_config_path).map_err(|_| {
                ConfigError::FileNotFound {
                    path: project_config_path.display().to_string(),
                }
            })?;
            let file_config: OpensetConfig =
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                })?;
            Self::merge(&mut config, &file_config);
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the final configuration values.
    pub fn validate(config: &OpensetConfig) -> Result<(), ConfigError> {
        if let Some(fraction) = config.dataset.known_fraction {
            if !(fraction > 0.0 && fraction < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "dataset.known_fraction".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(fraction) = config.dataset.train_fraction {
            if !(fraction > 0.0 && fraction < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "dataset.train_fraction".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(batch_size) = config.dataset.batch_size {
            if batch_size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "dataset.batch_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(feature_len) = config.dataset.feature_len {
            if feature_len == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "dataset.feature_len".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(epochs) = config.training.epochs {
            if epochs == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "training.epochs".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(lr) = config.training.learning_rate {
            if !(lr > 0.0 && lr.is_finite()) {
                return Err(ConfigError::ValidationFailed {
                    field: "training.learning_rate".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        if let Some(alpha) = config.training.lookahead_alpha {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(ConfigError::ValidationFailed {
                    field: "training.lookahead_alpha".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(k) = config.training.lookahead_k {
            if k == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "training.lookahead_k".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut OpensetConfig, other: &OpensetConfig) {
        // Dataset
        if other.dataset.root.is_some() {
            base.dataset.root = other.dataset.root.clone();
        }
        if !other.dataset.subjects.is_empty() {
            base.dataset.subjects = other.dataset.subjects.clone();
        }
        if other.dataset.hand.is_some() {
            base.dataset.hand = other.dataset.hand.clone();
        }
        if other.dataset.spectrum.is_some() {
            base.dataset.spectrum = other.dataset.spectrum.clone();
        }
        if other.dataset.seed.is_some() {
            base.dataset.seed = other.dataset.seed;
        }
        if other.dataset.known_fraction.is_some() {
            base.dataset.known_fraction = other.dataset.known_fraction;
        }
        if other.dataset.train_fraction.is_some() {
            base.dataset.train_fraction = other.dataset.train_fraction;
        }
        if other.dataset.batch_size.is_some() {
            base.dataset.batch_size = other.dataset.batch_size;
        }
        if other.dataset.feature_len.is_some() {
            base.dataset.feature_len = other.dataset.feature_len;
        }

        // Training
        if other.training.epochs.is_some() {
            base.training.epochs = other.training.epochs;
        }
        if other.training.learning_rate.is_some() {
            base.training.learning_rate = other.training.learning_rate;
        }
        if other.training.weight_decay.is_some() {
            base.training.weight_decay = other.training.weight_decay;
        }
        if other.training.lookahead_k.is_some() {
            base.training.lookahead_k = other.training.lookahead_k;
        }
        if other.training.lookahead_alpha.is_some() {
            base.training.lookahead_alpha = other.training.lookahead_alpha;
        }

        // Output
        if other.output.dir.is_some() {
            base.output.dir = other.output.dir.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `OPENSET_DATASET_ROOT`, `OPENSET_SEED`, etc.
    fn apply_env_overrides(config: &mut OpensetConfig) {
        if let Ok(val) = std::env::var("OPENSET_DATASET_ROOT") {
            config.dataset.root = Some(std::path::PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("OPENSET_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.dataset.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("OPENSET_BATCH_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.dataset.batch_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("OPENSET_EPOCHS") {
            if let Ok(v) = val.parse::<u32>() {
                config.training.epochs = Some(v);
            }
        }
        if let Ok(val) = std::env::var("OPENSET_OUTPUT_DIR") {
            config.output.dir = Some(std::path::PathBuf::from(val));
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut OpensetConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.dataset_root {
            config.dataset.root = Some(v.clone());
        }
        if let Some(ref v) = cli.output_dir {
            config.output.dir = Some(v.clone());
        }
        if let Some(v) = cli.seed {
            config.dataset.seed = Some(v);
        }
        if let Some(v) = cli.epochs {
            config.training.epochs = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
