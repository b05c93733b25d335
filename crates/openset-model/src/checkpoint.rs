//! Checkpoint persistence: a JSON map from parameter name to tensor.
//!
//! Written once by the trainer after the final epoch, read by the scorer
//! before any inference. A missing checkpoint at evaluation time is fatal.

use std::fs;
use std::io::BufWriter;
use std::path::Path;

use openset_core::errors::CheckpointError;

use crate::tensor::ParamMap;

/// Write the parameter map, creating parent directories as needed.
pub fn save(params: &ParamMap, path: &Path) -> Result<(), CheckpointError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CheckpointError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    }
    let file = fs::File::create(path).map_err(|e| CheckpointError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::to_writer(BufWriter::new(file), params).map_err(|e| CheckpointError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::info!(path = %path.display(), "checkpoint written");
    Ok(())
}

/// Read the parameter map. Distinguishes a missing file from a corrupt one.
pub fn load(path: &Path) -> Result<ParamMap, CheckpointError> {
    if !path.exists() {
        return Err(CheckpointError::NotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path).map_err(|e| CheckpointError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| CheckpointError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
