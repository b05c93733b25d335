//! Core types, errors, and configuration for the open-set identification
//! evaluator.
//!
//! Everything downstream (data loading, models, evaluation, reporting)
//! builds on the label and error vocabulary defined here. This crate has no
//! numeric dependencies so the type layer stays cheap to depend on.

pub mod config;
pub mod errors;
pub mod label;

pub use label::SubjectLabel;
