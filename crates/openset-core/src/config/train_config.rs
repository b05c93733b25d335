//! Training hyperparameters.

use serde::{Deserialize, Serialize};

/// Trainer and optimizer knobs. Defaults match the values the evaluation
/// protocol was calibrated with.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: Option<u32>,
    pub learning_rate: Option<f64>,
    pub weight_decay: Option<f64>,
    /// Inner steps between slow-weight synchronizations.
    pub lookahead_k: Option<usize>,
    /// Blend factor pulling slow weights toward the fast trajectory.
    pub lookahead_alpha: Option<f64>,
}

impl TrainConfig {
    pub fn epochs(&self) -> u32 {
        self.epochs.unwrap_or(25)
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate.unwrap_or(1e-3)
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay.unwrap_or(5e-4)
    }

    pub fn lookahead_k(&self) -> usize {
        self.lookahead_k.unwrap_or(10)
    }

    pub fn lookahead_alpha(&self) -> f64 {
        self.lookahead_alpha.unwrap_or(0.5)
    }
}
