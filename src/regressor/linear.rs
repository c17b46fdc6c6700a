// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::fs;
use std::path::Path;

use ndarray::{Array1, ArrayView2};
use serde::Deserialize;

use crate::error::{PredictError, Result};
use crate::metadata::ModelMetadata;
use crate::regressor::Regressor;

/// `kind` tag of a linear regression artifact.
pub const LINEAR_KIND: &str = "linear_regression";

/// On-disk layout of a linear regression artifact.
#[derive(Debug, Deserialize)]
struct LinearArtifact {
    kind: String,
    coefficients: Vec<f64>,
    intercept: f64,
    #[serde(default)]
    metadata: ModelMetadata,
}

/// Ordinary linear regression: `y = X · coefficients + intercept`.
#[derive(Debug, Clone)]
pub struct LinearRegression {
    coefficients: Array1<f64>,
    intercept: f64,
    metadata: ModelMetadata,
}

impl LinearRegression {
    /// Create a model from fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no coefficients or any parameter is not finite.
    pub fn new(coefficients: Vec<f64>, intercept: f64, metadata: ModelMetadata) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(PredictError::ModelLoadError(
                "Linear model has no coefficients".to_string(),
            ));
        }
        if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(PredictError::ModelLoadError(
                "Linear model parameters must be finite".to_string(),
            ));
        }

        Ok(Self {
            coefficients: Array1::from(coefficients),
            intercept,
            metadata,
        })
    }

    /// Load a model from a JSON artifact on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or isn't a valid linear artifact.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            PredictError::ModelLoadError(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Parse a model from JSON artifact text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or describes another model kind.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let artifact: LinearArtifact = serde_json::from_str(text)?;
        if artifact.kind != LINEAR_KIND {
            return Err(PredictError::ModelLoadError(format!(
                "Unsupported model kind '{}' (expected '{LINEAR_KIND}')",
                artifact.kind
            )));
        }
        Self::new(artifact.coefficients, artifact.intercept, artifact.metadata)
    }

    /// Fitted coefficients, one per feature.
    #[must_use]
    pub const fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    /// Fitted intercept.
    #[must_use]
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Regressor for LinearRegression {
    fn predict(&mut self, features: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        let (_, n_features) = features.dim();
        if n_features != self.coefficients.len() {
            return Err(PredictError::InferenceError(format!(
                "X has {n_features} features, but the model expects {}",
                self.coefficients.len()
            )));
        }

        Ok(features.dot(&self.coefficients) + self.intercept)
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn backend(&self) -> &'static str {
        "linear"
    }
}
