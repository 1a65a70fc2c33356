//! Engine configuration.

use crate::core::DEFAULT_PRECISION;
use serde::{Deserialize, Serialize};

/// Default cap on display length, in characters.
pub const DEFAULT_MAX_DISPLAY_LEN: usize = 12;

/// Default number of phase transitions an engine retains.
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// Default display text of the error configuration.
pub const DEFAULT_ERROR_MARKER: &str = "Error";

/// Tunable engine parameters.
///
/// Every field has a default, so a partial document is enough:
///
/// ```rust
/// use tally::EngineConfig;
///
/// let config = EngineConfig::from_json(r#"{ "max_display_len": 16 }"#).unwrap();
/// assert_eq!(config.max_display_len, 16);
/// assert_eq!(config.precision, 8);
/// assert_eq!(config.error_marker, "Error");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Digit entry stops once the display reaches this many characters.
    pub max_display_len: usize,

    /// Decimal places binary operation results are rounded to.
    pub precision: u32,

    /// Display text shown in the error configuration.
    pub error_marker: String,

    /// Phase transitions kept in history; older ones are dropped. Zero disables it.
    pub history_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_display_len: DEFAULT_MAX_DISPLAY_LEN,
            precision: DEFAULT_PRECISION,
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_pocket_calculator() {
        let config = EngineConfig::default();
        assert_eq!(config.max_display_len, 12);
        assert_eq!(config.precision, 8);
        assert_eq!(config.error_marker, "Error");
        assert_eq!(config.history_limit, 1000);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn malformed_document_is_rejected() {
        assert!(EngineConfig::from_json("{ \"precision\": \"eight\" }").is_err());
        assert!(EngineConfig::from_json("not json").is_err());
    }

    #[test]
    fn config_serializes_correctly() {
        let config = EngineConfig {
            max_display_len: 20,
            precision: 4,
            error_marker: "E".to_string(),
            history_limit: 16,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }
}
