//! ONNX Inference Adapter
//!
//! Loads the pretrained alloy property model via tract-onnx, runs single-row
//! or batched forward passes, and rescales raw outputs into reported units.

mod engine;
mod global;

pub use engine::{unscale, InferenceEngine, Prediction, RAW_OUTPUTS};
pub use global::{global, init_global, init_global_mock};

use thiserror::Error;

/// Errors during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Model artifact missing or corrupt. Fatal, no retry.
    #[error("Model load failed: {0}")]
    ModelLoad(String),

    /// Forward pass failed inside the runtime
    #[error("Inference failed: {0}")]
    Inference(String),

    /// Vector length does not match the model schema. An internal integrity
    /// fault, never a user input error.
    #[error("Shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Process-wide engine used before initialization
    #[error("Inference engine not initialized; call init_global first")]
    NotInitialized,
}
