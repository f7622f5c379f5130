//! Alloy Property Prediction Pipeline
//!
//! Composes formula parsing, feature encoding, and model inference into the
//! public `predict` entry points.

mod config;

pub use crate::config::PipelineConfig;

pub use composition::{Composition, CompositionInput};
pub use feature_encoder::FeatureVector;
pub use inference_engine::{InferenceEngine, Prediction};

use composition::CompositionError;
use feature_encoder::EncodeError;
use inference_engine::InferenceError;
use thiserror::Error;
use tracing::{debug, Level};

/// Tag value meaning "no tag specified"; matches no one-hot slot
pub const UNSPECIFIED_TAG: &str = "?";

/// Errors from the prediction pipeline
#[derive(Debug, Error)]
pub enum PredictError {
    /// Composition could not be parsed or constructed
    #[error("Invalid composition: {0}")]
    Composition(#[from] CompositionError),

    /// Composition cannot be encoded for this model
    #[error("Encoding failed: {0}")]
    Encode(#[from] EncodeError),

    /// Model loading or forward pass failed
    #[error("Inference failed: {0}")]
    Inference(#[from] InferenceError),
}

/// Predict alloy properties using the process-wide engine.
///
/// Requires [`inference_engine::init_global`] to have run. Pass
/// [`UNSPECIFIED_TAG`] for a tag that is not known.
pub fn predict(
    input: impl Into<CompositionInput>,
    structure_type: &str,
    processing_type: &str,
) -> Result<Prediction, PredictError> {
    let engine = inference_engine::global()?;
    predict_with(engine, input, structure_type, processing_type)
}

/// Predict alloy properties against an explicit engine
pub fn predict_with(
    engine: &InferenceEngine,
    input: impl Into<CompositionInput>,
    structure_type: &str,
    processing_type: &str,
) -> Result<Prediction, PredictError> {
    let comp = input.into().resolve()?;
    debug!(
        "Predicting for {} (structure={}, processing={})",
        comp, structure_type, processing_type
    );

    let features = feature_encoder::encode(&comp, structure_type, processing_type)?;
    let prediction = engine.predict(&features)?;

    debug!(
        "Prediction: logta={:.3}, d0={:.3e}, d1={:.3e}, d2={:.3e}",
        prediction.logta, prediction.d0, prediction.d1, prediction.d2
    );
    Ok(prediction)
}

/// Initialize logging for the pipeline binary
pub fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(Level::INFO.to_string()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
