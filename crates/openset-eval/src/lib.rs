//! Open-set evaluation protocol.
//!
//! Converts raw per-class probabilities into threshold-swept detection
//! metrics: the scorer turns a checkpoint plus a held-out set into
//! `(confidence, label)` records, the sweep engine turns those into
//! FAR/FRR/DIR curves over a fixed grid, and the reporter serializes the
//! curves to a CSV table and two summary plots. The trainer produces the
//! checkpoint the scorer consumes.

pub mod report;
pub mod scorer;
pub mod sweep;
pub mod trainer;

pub use scorer::{score_batches, score_checkpoint};
pub use sweep::{sweep, threshold_grid, RateCurve, SampleScore, THRESHOLD_POINTS};
pub use trainer::train;
