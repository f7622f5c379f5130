//! Process-Wide Engine State
//!
//! The model artifact is deserialized exactly once per process and shared
//! read-only afterwards. Teardown happens at process exit; the engine owns
//! nothing beyond memory.

use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;

use crate::engine::InferenceEngine;
use crate::InferenceError;

static GLOBAL_ENGINE: OnceLock<InferenceEngine> = OnceLock::new();

/// Initialize the process-wide engine from a model artifact.
///
/// The first successful call wins; later calls return the already-loaded
/// engine without touching storage. Concurrent initializers race on the load
/// but exactly one engine is ever published.
pub fn init_global(path: impl AsRef<Path>) -> Result<&'static InferenceEngine, InferenceError> {
    if let Some(engine) = GLOBAL_ENGINE.get() {
        debug!("Global engine already initialized, reusing");
        return Ok(engine);
    }

    let engine = InferenceEngine::load(path)?;
    Ok(GLOBAL_ENGINE.get_or_init(|| engine))
}

/// Initialize the process-wide engine with the mock backend
pub fn init_global_mock() -> &'static InferenceEngine {
    GLOBAL_ENGINE.get_or_init(InferenceEngine::mock)
}

/// The process-wide engine, if initialized
pub fn global() -> Result<&'static InferenceEngine, InferenceError> {
    GLOBAL_ENGINE.get().ok_or(InferenceError::NotInitialized)
}
