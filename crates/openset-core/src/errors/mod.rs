//! Error handling for the open-set evaluator.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod checkpoint_error;
pub mod config_error;
pub mod data_error;
pub mod eval_error;
pub mod model_error;
pub mod pipeline_error;
pub mod report_error;
pub mod train_error;

pub use checkpoint_error::CheckpointError;
pub use config_error::ConfigError;
pub use data_error::DataError;
pub use eval_error::EvalError;
pub use model_error::ModelError;
pub use pipeline_error::PipelineError;
pub use report_error::ReportError;
pub use train_error::TrainError;
