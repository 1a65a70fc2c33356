//! Evaluation of a pending binary operation.

use super::number::round_to_places;
use super::operation::Operation;
use crate::error::CalcError;

/// Decimal places results are rounded to before display.
pub const DEFAULT_PRECISION: u32 = 8;

/// Apply `op` to `prev` and `current`, rounding to [`DEFAULT_PRECISION`] places.
///
/// This is a pure function. Division by zero and non-finite results are
/// reported as errors rather than computed.
///
/// # Example
///
/// ```rust
/// use tally::core::{evaluate, Operation};
///
/// assert_eq!(evaluate(2.0, 3.0, Operation::Add), Ok(5.0));
/// assert_eq!(evaluate(0.1, 0.2, Operation::Add), Ok(0.3));
/// assert!(evaluate(5.0, 0.0, Operation::Divide).is_err());
/// ```
pub fn evaluate(prev: f64, current: f64, op: Operation) -> Result<f64, CalcError> {
    evaluate_with_precision(prev, current, op, DEFAULT_PRECISION)
}

/// Same as [`evaluate`], with an explicit rounding precision.
pub fn evaluate_with_precision(
    prev: f64,
    current: f64,
    op: Operation,
    precision: u32,
) -> Result<f64, CalcError> {
    let result = match op {
        Operation::Add => prev + current,
        Operation::Subtract => prev - current,
        Operation::Multiply => prev * current,
        Operation::Divide => {
            if current == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            prev / current
        }
    };

    if !result.is_finite() {
        return Err(CalcError::NonFinite { value: result });
    }

    Ok(round_to_places(result, precision))
}
