// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Blood-pressure model loading and inference.
//!
//! This module provides the main [`BpModel`] struct, which resolves and loads the model
//! artifact once and turns a validated [`PredictionRequest`] into a [`PredictionResult`].

use std::path::{Path, PathBuf};

use crate::error::{PredictError, Result};
use crate::inference::PredictConfig;
use crate::metadata::{FEATURE_NAMES, ModelMetadata};
use crate::regressor::{Regressor, load_regressor};
use crate::request::PredictionRequest;
use crate::results::PredictionResult;
use crate::utils::round_to;
use crate::warn;

/// Blood-pressure regression model.
///
/// # Example
///
/// ```no_run
/// use bp_predict::{BpModel, PredictConfig, PredictionRequest};
///
/// let mut model = BpModel::load(PredictConfig::new().with_model_path("bp_model.json"))?;
/// let result = model.predict(&PredictionRequest::new(75.0, 98.0)?)?;
/// println!("bp = {}", result.bp);
/// # Ok::<(), bp_predict::PredictError>(())
/// ```
pub struct BpModel {
    regressor: Box<dyn Regressor>,
    path: PathBuf,
    config: PredictConfig,
}

impl BpModel {
    /// Load the model described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact path can't be resolved, the file doesn't
    /// exist, or the artifact can't be loaded.
    pub fn load(config: PredictConfig) -> Result<Self> {
        let path = config.resolve_model_path()?;

        if !path.exists() {
            return Err(PredictError::ModelLoadError(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        let regressor = load_regressor(&path, config.warnings)?;

        if config.warnings && !regressor.metadata().feature_names_match() {
            warn!(
                "Model was fitted with features {:?}; inputs are passed as {:?}",
                regressor.metadata().feature_names,
                FEATURE_NAMES
            );
        }

        Ok(Self {
            regressor,
            path,
            config,
        })
    }

    /// Wrap an already constructed regressor.
    #[must_use]
    pub fn from_regressor(regressor: Box<dyn Regressor>, config: PredictConfig) -> Self {
        let path = config.model_path.clone().unwrap_or_default();
        Self {
            regressor,
            path,
            config,
        }
    }

    /// Run the model on a single request.
    ///
    /// The regressor must return exactly one finite value for the single input row;
    /// anything else is an inference error. The value is rounded to
    /// [`PredictConfig::decimals`] places.
    ///
    /// # Errors
    ///
    /// Returns an error if the regressor fails or its output breaks the contract above.
    pub fn predict(&mut self, request: &PredictionRequest) -> Result<PredictionResult> {
        let features = request.features();
        let predictions = self.regressor.predict(features.view())?;

        if predictions.len() != 1 {
            return Err(PredictError::InferenceError(format!(
                "Expected exactly one prediction for one input row, got {}",
                predictions.len()
            )));
        }

        let value = predictions[0];
        if !value.is_finite() {
            return Err(PredictError::InferenceError(format!(
                "Model returned a non-finite prediction: {value}"
            )));
        }

        Ok(PredictionResult::new(round_to(value, self.config.decimals)))
    }

    /// Model metadata.
    #[must_use]
    pub fn metadata(&self) -> &ModelMetadata {
        self.regressor.metadata()
    }

    /// Path the model was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the backend running the model.
    #[must_use]
    pub fn backend(&self) -> &'static str {
        self.regressor.backend()
    }
}
