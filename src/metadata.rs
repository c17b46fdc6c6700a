// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Model artifact metadata.
//!
//! JSON artifacts carry metadata in an optional `metadata` object. ONNX artifacts
//! carry the same fields as custom metadata properties, with `feature_names` stored
//! as a comma-separated string.

use std::collections::HashMap;

use serde::Deserialize;

/// Feature order every model is called with.
pub const FEATURE_NAMES: [&str; 2] = ["heart_rate", "spo2"];

/// Metadata describing a trained blood-pressure regressor.
///
/// Every field is optional in the artifact; missing fields fall back to
/// [`ModelMetadata::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModelMetadata {
    /// Free-form model description (e.g., "Linear regression on clinic vitals").
    pub description: String,
    /// Model version string.
    pub version: String,
    /// Training date.
    pub trained: String,
    /// Feature names in the order the model expects them.
    pub feature_names: Vec<String>,
    /// Name of the predicted quantity.
    pub target: String,
}

impl ModelMetadata {
    /// Build metadata from ONNX custom metadata properties.
    ///
    /// Unknown keys are ignored. `feature_names` is split on commas.
    #[must_use]
    pub fn from_custom_properties(properties: &HashMap<String, String>) -> Self {
        let mut metadata = Self::default();

        for (key, value) in properties {
            let value = value.trim();
            match key.as_str() {
                "description" => metadata.description = value.to_string(),
                "version" => metadata.version = value.to_string(),
                "trained" => metadata.trained = value.to_string(),
                "target" => metadata.target = value.to_string(),
                "feature_names" => {
                    metadata.feature_names = value
                        .split(',')
                        .map(|s| s.trim().trim_matches('\'').trim_matches('"').to_string())
                        .filter(|s| !s.is_empty())
                        .collect();
                }
                _ => {}
            }
        }

        metadata
    }

    /// Whether the declared feature order matches [`FEATURE_NAMES`].
    #[must_use]
    pub fn feature_names_match(&self) -> bool {
        self.feature_names.len() == FEATURE_NAMES.len()
            && self
                .feature_names
                .iter()
                .zip(FEATURE_NAMES)
                .all(|(declared, expected)| declared == expected)
    }

    /// Human readable model name for diagnostics.
    #[must_use]
    pub fn model_name(&self) -> &str {
        if self.description.is_empty() {
            "bp model"
        } else {
            &self.description
        }
    }
}

impl Default for ModelMetadata {
    fn default() -> Self {
        Self {
            description: String::new(),
            version: String::new(),
            trained: String::new(),
            feature_names: FEATURE_NAMES.iter().map(|s| (*s).to_string()).collect(),
            target: "bp".to_string(),
        }
    }
}
