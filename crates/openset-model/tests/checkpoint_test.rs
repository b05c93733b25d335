//! Checkpoint persistence round trips and failure modes.

use openset_core::errors::CheckpointError;
use openset_model::{checkpoint, LinearClassifier, Model};

#[test]
fn test_round_trip_preserves_every_tensor() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("model").join("model.json");

    let model = LinearClassifier::new(4, 16, 7);
    checkpoint::save(&model.state_dict(), &path).unwrap();

    let loaded = checkpoint::load(&path).unwrap();
    assert_eq!(loaded, model.state_dict());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("deeply").join("nested").join("model.json");
    let model = LinearClassifier::new(2, 4, 0);
    checkpoint::save(&model.state_dict(), &path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_missing_checkpoint_is_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = checkpoint::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CheckpointError::NotFound { .. }));
}

#[test]
fn test_corrupt_checkpoint_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, "not json at all {{").unwrap();
    let err = checkpoint::load(&path).unwrap_err();
    assert!(matches!(err, CheckpointError::Read { .. }));
}

#[test]
fn test_loading_into_wrong_shape_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("model.json");

    let small = LinearClassifier::new(2, 4, 0);
    checkpoint::save(&small.state_dict(), &path).unwrap();

    let mut big = LinearClassifier::new(6, 4, 0);
    let params = checkpoint::load(&path).unwrap();
    assert!(big.load_state_dict(&params).is_err());
}
