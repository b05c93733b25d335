//! Data collaborators for the open-set evaluator: the seeded subject split,
//! the enrolled-subject class mapping, and batch sources feeding the trainer
//! and scorer.

pub mod batch;
pub mod source;
pub mod split;

pub use batch::Batch;
pub use source::{BatchSource, FsSource, MemorySource};
pub use split::{open_set_split, OpenSetSplit, SampleRef, SubjectMapping};
