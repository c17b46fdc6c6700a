// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Utility functions for the prediction library

/// Round a value to a fixed number of decimal places.
///
/// Rounding goes through decimal formatting of the exact binary value, so
/// `round_to(2.675, 2)` is `2.67` (the stored value is just below 2.675) rather
/// than the `2.68` a naive `(x * 100).round() / 100` produces.
///
/// # Arguments
///
/// * `value` - Value to round. Non-finite values are returned unchanged.
/// * `decimals` - Number of decimal places to keep.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let precision = decimals as usize;
    format!("{value:.precision$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_two_places() {
        assert!((round_to(121.456_78, 2) - 121.46).abs() < 1e-12);
        assert!((round_to(121.454, 2) - 121.45).abs() < 1e-12);
        assert!((round_to(-3.333, 2) + 3.33).abs() < 1e-12);
    }

    #[test]
    fn test_round_uses_exact_binary_value() {
        assert!((round_to(2.675, 2) - 2.67).abs() < 1e-12);
    }

    #[test]
    fn test_round_zero_places_and_non_finite() {
        assert!((round_to(7.6, 0) - 8.0).abs() < f64::EPSILON);
        assert!(round_to(f64::NAN, 2).is_nan());
        assert!(round_to(f64::INFINITY, 2).is_infinite());
    }
}
