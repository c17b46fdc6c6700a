// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Regression backends.
//!
//! A [`Regressor`] maps an `N x 2` feature matrix (`[heart_rate, spo2]` per row) to
//! `N` predictions. The artifact's file extension picks the backend.

use std::path::Path;

use ndarray::{Array1, ArrayView2};

use crate::error::{PredictError, Result};
use crate::metadata::ModelMetadata;

/// Linear regression loaded from a JSON artifact.
pub mod linear;

/// ONNX Runtime backend.
#[cfg(feature = "onnx")]
pub mod onnx;

pub use linear::LinearRegression;

#[cfg(feature = "onnx")]
pub use onnx::OnnxRegressor;

/// A fitted regression model.
pub trait Regressor {
    /// Predict one value per feature row.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature matrix has the wrong shape or the backend fails.
    fn predict(&mut self, features: ArrayView2<'_, f64>) -> Result<Array1<f64>>;

    /// Metadata read from the artifact.
    fn metadata(&self) -> &ModelMetadata;

    /// Short backend name for diagnostics.
    fn backend(&self) -> &'static str;
}

/// Load a regressor, choosing the backend from the file extension.
///
/// # Arguments
///
/// * `path` - Path to the model artifact.
/// * `warnings` - Whether the backend may print non-fatal load warnings.
///
/// # Errors
///
/// Returns an error if the format is unsupported, the backend is not compiled in,
/// or the artifact cannot be read.
pub fn load_regressor(path: &Path, warnings: bool) -> Result<Box<dyn Regressor>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => Ok(Box::new(LinearRegression::load(path)?)),
        #[cfg(feature = "onnx")]
        "onnx" => Ok(Box::new(OnnxRegressor::load(path, warnings)?)),
        #[cfg(not(feature = "onnx"))]
        "onnx" => {
            let _ = warnings;
            Err(PredictError::FeatureNotEnabled(format!(
                "Loading {} requires the 'onnx' feature. Compile with --features onnx",
                path.display()
            )))
        }
        _ => Err(PredictError::ModelLoadError(format!(
            "Unsupported model format: {} (expected .json or .onnx)",
            path.display()
        ))),
    }
}
