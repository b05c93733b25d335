//! Model abstractions for the open-set evaluator.
//!
//! The identification network itself is a collaborator behind the [`Model`]
//! trait: anything that maps a batch of flattened images to per-class logits
//! can be scored. [`TrainableModel`] adds the backward seam the trainer
//! needs. A seeded linear classifier ships as the reference implementation.

pub mod checkpoint;
pub mod linear;
pub mod model;
pub mod optim;
pub mod tensor;

pub use linear::LinearClassifier;
pub use model::{softmax, Model, TrainableModel};
pub use optim::{Lookahead, Optimizer, RAdam};
pub use tensor::{ParamMap, Tensor};
