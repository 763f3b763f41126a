//! Core domain primitives shared across the pipeline

pub mod error;
pub mod model;
