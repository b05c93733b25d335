//! Configuration for the open-set evaluator.
//! TOML-based, layered resolution: CLI > env > project file > defaults.
//!
//! All knobs travel as an explicit [`OpensetConfig`] object handed to the
//! split/loader constructors; the evaluation core carries no process-wide
//! state.

pub mod dataset_config;
pub mod openset_config;
pub mod output_config;
pub mod train_config;

pub use dataset_config::DatasetConfig;
pub use openset_config::{CliOverrides, OpensetConfig};
pub use output_config::OutputConfig;
pub use train_config::TrainConfig;
