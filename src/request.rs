// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Validated prediction input.

use std::borrow::Cow;

use ndarray::{Array2, array};

use crate::error::{PredictError, Result};

/// Heart rate and SpO2 readings for a single prediction.
///
/// Both readings are finite and strictly positive; construction fails otherwise,
/// so an invalid request can never reach a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionRequest {
    heart_rate: f64,
    spo2: f64,
}

impl PredictionRequest {
    /// Create a request from numeric readings.
    ///
    /// # Errors
    ///
    /// Returns the fixed validation error if either reading is not strictly positive
    /// (zero, negative, `NaN`, or infinite).
    pub fn new(heart_rate: f64, spo2: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(heart_rate) || !valid(spo2) {
            return Err(PredictError::non_positive());
        }
        Ok(Self { heart_rate, spo2 })
    }

    /// Create a request from raw command-line arguments.
    ///
    /// Both arguments are parsed before either is validated, so a non-numeric
    /// argument is reported even when the other reading is out of range.
    ///
    /// # Errors
    ///
    /// Returns an argument error if a reading is missing or not a number, or the
    /// validation error if a reading is not strictly positive.
    pub fn from_args(heart_rate: Option<&str>, spo2: Option<&str>) -> Result<Self> {
        let heart_rate = parse_reading("heart rate", "HEART_RATE", heart_rate)?;
        let spo2 = parse_reading("SpO2", "SPO2", spo2)?;
        Self::new(heart_rate, spo2)
    }

    /// Heart rate in beats per minute.
    #[must_use]
    pub const fn heart_rate(&self) -> f64 {
        self.heart_rate
    }

    /// Oxygen saturation percentage.
    #[must_use]
    pub const fn spo2(&self) -> f64 {
        self.spo2
    }

    /// Feature matrix with a single `[heart_rate, spo2]` row.
    #[must_use]
    pub fn features(&self) -> Array2<f64> {
        array![[self.heart_rate, self.spo2]]
    }
}

fn parse_reading(label: &str, value_name: &str, raw: Option<&str>) -> Result<f64> {
    let raw = raw.ok_or_else(|| {
        PredictError::ArgumentError(format!("missing required argument <{value_name}>"))
    })?;

    strip_digit_separators(raw.trim()).parse::<f64>().map_err(|e| {
        PredictError::ArgumentError(format!("could not convert {label} '{raw}' to a number: {e}"))
    })
}

/// Remove `_` separators that sit between two digits (`1_000.5`).
///
/// A misplaced underscore (`_1`, `1__0`, `1_.5`) is left in place so parsing rejects it.
fn strip_digit_separators(text: &str) -> Cow<'_, str> {
    if !text.contains('_') {
        return Cow::Borrowed(text);
    }

    let bytes = text.as_bytes();
    let well_placed = bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'_')
        .all(|(i, _)| {
            i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
        });

    if well_placed {
        Cow::Owned(text.replace('_', ""))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = PredictionRequest::from_args(Some("75"), Some(" 98.5 ")).unwrap();
        assert!((request.heart_rate() - 75.0).abs() < f64::EPSILON);
        assert!((request.spo2() - 98.5).abs() < f64::EPSILON);
        assert_eq!(request.features().dim(), (1, 2));
        assert!((request.features()[[0, 1]] - 98.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_positive_rejected() {
        for (hr, spo2) in [(0.0, 98.0), (75.0, 0.0), (-1.0, 98.0), (75.0, -0.5)] {
            let err = PredictionRequest::new(hr, spo2).unwrap_err();
            assert_eq!(err.to_string(), "HR and SpO2 must be positive");
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(PredictionRequest::new(f64::NAN, 98.0).is_err());
        assert!(PredictionRequest::new(75.0, f64::INFINITY).is_err());
        assert!(PredictionRequest::from_args(Some("inf"), Some("98")).is_err());
    }

    #[test]
    fn test_digit_separators() {
        let request = PredictionRequest::from_args(Some("1_00"), Some("9_8.5")).unwrap();
        assert!((request.heart_rate() - 100.0).abs() < f64::EPSILON);
        assert!((request.spo2() - 98.5).abs() < f64::EPSILON);

        for raw in ["_75", "75_", "7__5", "7_.5"] {
            let err = PredictionRequest::from_args(Some(raw), Some("98")).unwrap_err();
            assert!(matches!(err, PredictError::ArgumentError(_)), "{raw}");
        }
    }

    #[test]
    fn test_non_numeric_argument() {
        let err = PredictionRequest::from_args(Some("abc"), Some("98")).unwrap_err();
        assert!(matches!(err, PredictError::ArgumentError(_)));
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_parse_error_wins_over_validation() {
        let err = PredictionRequest::from_args(Some("0"), Some("x")).unwrap_err();
        assert!(matches!(err, PredictError::ArgumentError(_)));
    }

    #[test]
    fn test_missing_argument() {
        let err = PredictionRequest::from_args(Some("75"), None).unwrap_err();
        assert_eq!(err.to_string(), "Argument error: missing required argument <SPO2>");
    }
}
