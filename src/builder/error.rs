//! Build errors for the engine builder.

use thiserror::Error;

/// Errors that can occur when building a calculator engine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Display length cap must be at least 1")]
    ZeroDisplayLength,

    #[error("Precision {precision} exceeds the maximum of {max} decimal places")]
    PrecisionTooHigh { precision: u32, max: u32 },

    #[error("Error marker must not be empty")]
    EmptyErrorMarker,

    #[error("Error marker '{marker}' would be read back as a number")]
    NumericErrorMarker { marker: String },
}
