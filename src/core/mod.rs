//! Core batch pipelines (one per report variant).

pub mod pipeline;

pub use pipeline::*;
