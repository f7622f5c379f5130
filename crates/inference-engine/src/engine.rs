//! Inference Engine Implementation

use std::path::Path;

use feature_encoder::{FeatureVector, FEATURE_DIMENSION};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tract_onnx::prelude::*;

use crate::InferenceError;

/// Number of raw outputs per input row
pub const RAW_OUTPUTS: usize = 4;

/// Raw outputs produced by the mock backend
const MOCK_RAW: [f32; 4] = [0.5, 2.0, 3.0, 4.0];

type OnnxPlan = TypedRunnableModel<TypedModel>;

/// Prediction in reported units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Log time to amorphize
    pub logta: f64,
    /// Diffusion coefficient 0
    pub d0: f64,
    /// Diffusion coefficient 1
    pub d1: f64,
    /// Diffusion coefficient 2
    pub d2: f64,
}

/// Rescale raw model outputs into reported units.
///
/// The transform is positional and must match the training-time scaling
/// exactly: output 0 was divided by 100 during training, outputs 1-3 were
/// cube-rooted.
pub fn unscale(raw: [f32; RAW_OUTPUTS]) -> Prediction {
    Prediction {
        logta: raw[0] as f64 * 100.0,
        d0: (raw[1] as f64).powi(3),
        d1: (raw[2] as f64).powi(3),
        d2: (raw[3] as f64).powi(3),
    }
}

#[derive(Debug)]
enum Backend {
    Onnx(OnnxPlan),
    Mock,
}

/// ONNX inference engine holding the loaded model.
///
/// The model is read-only after load; a single engine is shared across all
/// predictions (see [`crate::init_global`]).
#[derive(Debug)]
pub struct InferenceEngine {
    backend: Backend,
    model_path: String,
}

impl InferenceEngine {
    /// Load the ONNX artifact and prepare it for single-row input
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let path = path.as_ref();
        info!("Loading model from {}", path.display());

        let plan =
            load_plan(path).map_err(|e| InferenceError::ModelLoad(e.to_string()))?;

        info!("Model loaded");
        Ok(Self {
            backend: Backend::Onnx(plan),
            model_path: path.display().to_string(),
        })
    }

    /// Create an engine with a mock backend producing fixed raw outputs,
    /// for tests and development without the model artifact
    pub fn mock() -> Self {
        info!("Creating mock inference engine");
        Self {
            backend: Backend::Mock,
            model_path: "mock".to_string(),
        }
    }

    /// Run a single feature vector through the model
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, InferenceError> {
        if features.len() != FEATURE_DIMENSION {
            return Err(InferenceError::ShapeMismatch {
                expected: FEATURE_DIMENSION,
                actual: features.len(),
            });
        }

        let raw = match &self.backend {
            Backend::Onnx(plan) => run_row(plan, features)?,
            Backend::Mock => MOCK_RAW,
        };

        debug!("Raw model outputs: {:?}", raw);
        Ok(unscale(raw))
    }

    /// Run a batch of feature vectors, returning one prediction per row
    pub fn predict_batch(
        &self,
        batch: &[FeatureVector],
    ) -> Result<Vec<Prediction>, InferenceError> {
        batch.iter().map(|features| self.predict(features)).collect()
    }

    /// Path the model was loaded from ("mock" for the mock backend)
    pub fn model_path(&self) -> &str {
        &self.model_path
    }
}

fn load_plan(path: &Path) -> TractResult<OnnxPlan> {
    tract_onnx::onnx()
        .model_for_path(path)?
        .with_input_fact(0, f32::fact([1, FEATURE_DIMENSION]).into())?
        .into_optimized()?
        .into_runnable()
}

fn run_row(plan: &OnnxPlan, features: &FeatureVector) -> Result<[f32; RAW_OUTPUTS], InferenceError> {
    let input = tract_ndarray::Array2::from_shape_vec(
        (1, FEATURE_DIMENSION),
        features.values().to_vec(),
    )
    .map_err(|e| InferenceError::Inference(e.to_string()))?;

    let outputs = plan
        .run(tvec!(Tensor::from(input).into()))
        .map_err(|e| InferenceError::Inference(e.to_string()))?;

    let view = outputs[0]
        .to_array_view::<f32>()
        .map_err(|e| InferenceError::Inference(e.to_string()))?;
    let row: Vec<f32> = view.iter().copied().collect();

    if row.len() != RAW_OUTPUTS {
        return Err(InferenceError::ShapeMismatch {
            expected: RAW_OUTPUTS,
            actual: row.len(),
        });
    }

    Ok([row[0], row[1], row[2], row[3]])
}
