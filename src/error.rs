// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the prediction library.

use std::fmt;

/// Result type alias for prediction operations.
pub type Result<T> = std::result::Result<T, PredictError>;

/// Fixed message reported when either reading is not strictly positive.
pub const NON_POSITIVE_INPUT: &str = "HR and SpO2 must be positive";

/// Main error type for the prediction library.
///
/// Every variant is reported to the caller the same way (a JSON error line and
/// exit code 1); the variant only changes the message text.
#[derive(Debug)]
pub enum PredictError {
    /// Missing, extra, or non-numeric command-line argument.
    ArgumentError(String),
    /// Input readings failed validation. Displayed without a prefix.
    ValidationError(String),
    /// Error loading the model artifact.
    ModelLoadError(String),
    /// Error during model inference.
    InferenceError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
    /// Feature not enabled.
    FeatureNotEnabled(String),
}

impl PredictError {
    /// The validation error raised for non-positive readings.
    #[must_use]
    pub fn non_positive() -> Self {
        Self::ValidationError(NON_POSITIVE_INPUT.to_string())
    }
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArgumentError(msg) => write!(f, "Argument error: {msg}"),
            Self::ValidationError(msg) => write!(f, "{msg}"),
            Self::ModelLoadError(msg) => write!(f, "Model load error: {msg}"),
            Self::InferenceError(msg) => write!(f, "Inference error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::FeatureNotEnabled(msg) => write!(f, "Feature not enabled: {msg}"),
        }
    }
}

impl std::error::Error for PredictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PredictError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PredictError {
    fn from(err: serde_json::Error) -> Self {
        Self::ModelLoadError(format!("Invalid model artifact: {err}"))
    }
}
