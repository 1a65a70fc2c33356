//! Conversions between display text and numeric values.
//!
//! Display text is always either a numeric literal or the error marker.
//! Formatting follows the conventions of a pocket calculator: shortest
//! round-trip digits, no trailing `.0`, and exponent notation only for
//! very large or very small magnitudes.

use crate::error::CalcError;

/// Magnitudes at or above this render in exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Non-zero magnitudes below this render in exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Parse display text into a finite number.
///
/// Partial literals produced by typing are accepted (`"0."`, `"12."`), a
/// lone sign or anything non-numeric is rejected.
///
/// # Example
///
/// ```rust
/// use tally::core::parse_display;
///
/// assert_eq!(parse_display("12.5"), Ok(12.5));
/// assert_eq!(parse_display("0."), Ok(0.0));
/// assert!(parse_display("-").is_err());
/// assert!(parse_display("Error").is_err());
/// ```
pub fn parse_display(text: &str) -> Result<f64, CalcError> {
    let parse_error = || CalcError::Parse {
        input: text.to_string(),
    };

    // `f64::from_str` also accepts "inf" and "NaN", which are never valid display text.
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return Err(parse_error());
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(parse_error()),
    }
}

/// Format a number for the display.
///
/// # Example
///
/// ```rust
/// use tally::core::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    format!("{}", value)
}

/// Round to a fixed number of decimal places, half away from zero.
///
/// Values too large to scale are returned unchanged; at that magnitude
/// they carry no fractional digits anyway.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
