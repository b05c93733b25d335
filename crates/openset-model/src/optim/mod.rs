//! Optimizers behind a single `step(params, grads)` seam.
//!
//! The trainer never depends on a concrete algorithm; it is handed an
//! [`Optimizer`], by default RAdam wrapped in Lookahead.

pub mod lookahead;
pub mod radam;

pub use lookahead::Lookahead;
pub use radam::RAdam;

use openset_core::errors::TrainError;

use crate::tensor::ParamMap;

/// One optimization step: consume gradients, update parameters in place.
pub trait Optimizer {
    fn step(&mut self, params: &mut ParamMap, grads: &ParamMap) -> Result<(), TrainError>;
}
