//! Calculation error signal.

use thiserror::Error;

/// Errors raised while parsing the display or evaluating an operation.
///
/// These never cross the engine boundary: the engine absorbs them by
/// entering the error configuration. They remain available through
/// [`CalculatorEngine::last_error`](crate::CalculatorEngine::last_error)
/// for diagnostics.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    #[error("Display text '{input}' is not a number")]
    Parse { input: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is not finite ({value})")]
    NonFinite { value: f64 },
}
