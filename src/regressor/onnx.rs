// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::collections::HashMap;
use std::path::Path;

use ndarray::{Array1, ArrayView2};
use ort::session::Session;
use ort::value::TensorRef;

use crate::error::{PredictError, Result};
use crate::metadata::ModelMetadata;
use crate::regressor::Regressor;
use crate::warn;

/// Custom metadata keys read from the ONNX model.
const METADATA_KEYS: [&str; 5] = ["description", "version", "trained", "feature_names", "target"];

/// Regressor exported to ONNX (e.g. with skl2onnx).
///
/// The first graph input receives an `f32` tensor of shape `[N, 2]`; the first graph
/// output is flattened into `N` predictions.
pub struct OnnxRegressor {
    session: Session,
    input_name: String,
    output_name: String,
    metadata: ModelMetadata,
}

impl OnnxRegressor {
    /// Load an ONNX regressor.
    ///
    /// # Errors
    ///
    /// Returns an error if ONNX Runtime can't create a session for the file.
    pub fn load<P: AsRef<Path>>(path: P, warnings: bool) -> Result<Self> {
        let path = path.as_ref();

        let session = Session::builder()
            .map_err(|e| PredictError::ModelLoadError(format!("Failed to create session builder: {e}")))?
            .with_intra_threads(1)
            .map_err(|e| PredictError::ModelLoadError(format!("Failed to set intra-thread count: {e}")))?
            .commit_from_file(path)
            .map_err(|e| PredictError::ModelLoadError(format!("Failed to load model: {e}")))?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .ok_or_else(|| PredictError::ModelLoadError("Model has no inputs".to_string()))?;

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| PredictError::ModelLoadError("Model has no outputs".to_string()))?;

        if warnings && session.outputs.len() > 1 {
            warn!(
                "Model exposes {} outputs; using the first ('{output_name}')",
                session.outputs.len()
            );
        }

        let metadata = Self::extract_metadata(&session);

        Ok(Self {
            session,
            input_name,
            output_name,
            metadata,
        })
    }

    /// Read custom metadata properties, falling back to defaults when absent.
    fn extract_metadata(session: &Session) -> ModelMetadata {
        let Ok(model_metadata) = session.metadata() else {
            return ModelMetadata::default();
        };

        let mut properties: HashMap<String, String> = HashMap::new();
        for key in &METADATA_KEYS {
            if let Ok(Some(value)) = model_metadata.custom(key) {
                properties.insert((*key).to_string(), value);
            }
        }

        ModelMetadata::from_custom_properties(&properties)
    }
}

impl Regressor for OnnxRegressor {
    #[allow(clippy::cast_possible_truncation)]
    fn predict(&mut self, features: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        let input = features.mapv(|v| v as f32);
        let input_contiguous = input.as_standard_layout();

        let input_tensor = TensorRef::from_array_view(&input_contiguous)
            .map_err(|e| PredictError::InferenceError(format!("Failed to create input tensor: {e}")))?;

        let inputs = ort::inputs![&self.input_name => input_tensor];

        let outputs = self
            .session
            .run(inputs)
            .map_err(|e| PredictError::InferenceError(format!("Inference failed: {e}")))?;

        let output = outputs.get(self.output_name.as_str()).ok_or_else(|| {
            PredictError::InferenceError(format!("Output '{}' not found", self.output_name))
        })?;

        let (_, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictError::InferenceError(format!("Failed to extract output: {e}")))?;

        Ok(data.iter().map(|&v| f64::from(v)).collect())
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn backend(&self) -> &'static str {
        "onnx"
    }
}
