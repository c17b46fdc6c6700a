// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Prediction configuration.
//!
//! This module defines the [`PredictConfig`] struct, which controls where the model
//! artifact is read from, whether loader warnings are shown, and how the predicted
//! value is rounded.

use std::path::PathBuf;

use crate::error::{PredictError, Result};

/// File name of the model artifact expected next to the executable.
pub const DEFAULT_MODEL_FILE: &str = "bp_model.json";

/// Configuration for a prediction run.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use bp_predict::PredictConfig;
///
/// let config = PredictConfig::new()
///     .with_model_path("models/bp_model.json")
///     .with_warnings(true)
///     .with_decimals(2);
/// ```
#[derive(Debug, Clone)]
pub struct PredictConfig {
    /// Explicit model artifact path.
    /// If `None`, [`DEFAULT_MODEL_FILE`] in the executable's directory is used.
    pub model_path: Option<PathBuf>,
    /// Whether non-fatal warnings raised while loading the model are printed.
    /// Off by default so stderr only ever carries the JSON error line.
    pub warnings: bool,
    /// Number of decimal places the prediction is rounded to.
    pub decimals: u32,
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            warnings: false,
            decimals: 2,
        }
    }
}

impl PredictConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the model artifact path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the model artifact (`.json`, or `.onnx` with the `onnx` feature).
    #[must_use]
    pub fn with_model_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.model_path = Some(path.into());
        self
    }

    /// Enable or disable loader warnings.
    #[must_use]
    pub const fn with_warnings(mut self, warnings: bool) -> Self {
        self.warnings = warnings;
        self
    }

    /// Set the number of decimal places of the reported prediction.
    #[must_use]
    pub const fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Resolve the model artifact path.
    ///
    /// Returns the explicit override if set, otherwise [`DEFAULT_MODEL_FILE`] inside
    /// the directory holding the running executable. The current working directory
    /// is never consulted, so the program behaves the same wherever it is invoked from.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable's location cannot be determined.
    pub fn resolve_model_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.model_path {
            return Ok(path.clone());
        }

        let exe = std::env::current_exe().map_err(|e| {
            PredictError::ModelLoadError(format!("Cannot locate executable directory: {e}"))
        })?;
        let dir = exe.parent().ok_or_else(|| {
            PredictError::ModelLoadError(format!(
                "Executable has no parent directory: {}",
                exe.display()
            ))
        })?;

        Ok(dir.join(DEFAULT_MODEL_FILE))
    }
}
