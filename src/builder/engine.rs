//! Builder for constructing calculator engines.

use crate::builder::error::BuildError;
use crate::config::EngineConfig;
use crate::core::parse_display;
use crate::engine::{CalculatorEngine, DisplayObserver};
use tracing::warn;

/// Highest supported rounding precision; beyond this `f64` has no digits left.
pub const MAX_PRECISION: u32 = 15;

/// Builder for constructing calculator engines with a fluent API.
///
/// # Example
///
/// ```rust
/// use tally::CalculatorEngine;
///
/// let engine = CalculatorEngine::builder()
///     .max_display_len(16)
///     .precision(4)
///     .error_marker("E")
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.config().max_display_len, 16);
/// assert_eq!(engine.current_display_text(), "0");
/// ```
pub struct EngineBuilder {
    config: EngineConfig,
    observers: Vec<Box<dyn DisplayObserver>>,
}

impl EngineBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            observers: Vec::new(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the display length cap.
    pub fn max_display_len(mut self, len: usize) -> Self {
        self.config.max_display_len = len;
        self
    }

    /// Set the decimal places results are rounded to.
    pub fn precision(mut self, places: u32) -> Self {
        self.config.precision = places;
        self
    }

    /// Set the error marker text.
    pub fn error_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.error_marker = marker.into();
        self
    }

    /// Set how many phase transitions the engine retains.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Register an observer on the engine being built.
    pub fn observer<O>(mut self, observer: O) -> Self
    where
        O: DisplayObserver + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Build the engine.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<CalculatorEngine, BuildError> {
        validate(&self.config).inspect_err(|e| warn!(error = %e, "Rejected engine config"))?;
        Ok(CalculatorEngine::from_parts(self.config, self.observers))
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a configuration without building an engine.
pub fn validate(config: &EngineConfig) -> Result<(), BuildError> {
    if config.max_display_len == 0 {
        return Err(BuildError::ZeroDisplayLength);
    }

    if config.precision > MAX_PRECISION {
        return Err(BuildError::PrecisionTooHigh {
            precision: config.precision,
            max: MAX_PRECISION,
        });
    }

    if config.error_marker.is_empty() {
        return Err(BuildError::EmptyErrorMarker);
    }

    if parse_display(&config.error_marker).is_ok() {
        return Err(BuildError::NumericErrorMarker {
            marker: config.error_marker.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DisplaySnapshot;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn default_builder_builds() {
        let engine = EngineBuilder::new().build().unwrap();
        assert_eq!(engine.config(), &EngineConfig::default());
        assert!(engine.state().is_cleared());
    }

    #[test]
    fn builder_rejects_zero_display_length() {
        let result = EngineBuilder::new().max_display_len(0).build();
        assert!(matches!(result, Err(BuildError::ZeroDisplayLength)));
    }

    #[test]
    fn builder_rejects_excessive_precision() {
        let result = EngineBuilder::new().precision(16).build();
        assert!(matches!(
            result,
            Err(BuildError::PrecisionTooHigh {
                precision: 16,
                max: 15
            })
        ));
    }

    #[test]
    fn builder_rejects_empty_marker() {
        let result = EngineBuilder::new().error_marker("").build();
        assert!(matches!(result, Err(BuildError::EmptyErrorMarker)));
    }

    #[test]
    fn builder_rejects_numeric_marker() {
        let result = EngineBuilder::new().error_marker("0").build();
        assert!(matches!(result, Err(BuildError::NumericErrorMarker { .. })));
    }

    #[test]
    fn builder_accepts_whole_config() {
        let config = EngineConfig {
            max_display_len: 8,
            precision: 2,
            error_marker: "Err".to_string(),
            history_limit: 64,
        };
        let engine = EngineBuilder::new().config(config.clone()).build().unwrap();
        assert_eq!(engine.config(), &config);
    }

    #[test]
    fn builder_registers_observers() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let mut engine = EngineBuilder::new()
            .observer(move |_: &DisplaySnapshot| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        engine.input_digit(1);
        engine.clear();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn build_error_messages_are_descriptive() {
        let err = BuildError::NumericErrorMarker {
            marker: "42".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error marker '42' would be read back as a number"
        );
    }
}
