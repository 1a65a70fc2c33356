//! The closed set of user intents the engine accepts.

use super::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single user action.
///
/// Actions are plain data so an input trace can be recorded, serialized
/// and replayed against a fresh engine with identical results.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Action {
    /// A decimal digit, `0..=9`.
    Digit(u8),
    Decimal,
    Operation(Operation),
    Equals,
    Clear,
    Backspace,
    ToggleSign,
    Percentage,
}

impl Action {
    /// Digit action from a character, if it is an ASCII digit.
    pub fn digit(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self::Digit(d as u8))
    }

    /// Map a keyboard key name to an action.
    ///
    /// Key names follow the DOM `KeyboardEvent.key` convention: printable
    /// keys are their character, named keys are `Enter`, `Escape` and
    /// `Backspace`. Keys with no calculator meaning map to `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{Action, Operation};
    ///
    /// assert_eq!(Action::from_key("7"), Some(Action::Digit(7)));
    /// assert_eq!(Action::from_key("*"), Some(Action::Operation(Operation::Multiply)));
    /// assert_eq!(Action::from_key("Enter"), Some(Action::Equals));
    /// assert_eq!(Action::from_key("Escape"), Some(Action::Clear));
    /// assert_eq!(Action::from_key("Tab"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => return Some(Self::Equals),
            "Escape" | "c" | "C" => return Some(Self::Clear),
            "Backspace" => return Some(Self::Backspace),
            "." => return Some(Self::Decimal),
            _ => {}
        }

        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };

        if let Some(action) = Self::digit(c) {
            return Some(action);
        }

        match c {
            '+' | '-' | '*' | '/' => Operation::from_symbol(c).map(Self::Operation),
            _ => None,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Decimal => "decimal",
            Self::Operation(_) => "operation",
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::Backspace => "backspace",
            Self::ToggleSign => "toggle_sign",
            Self::Percentage => "percentage",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{}", d),
            Self::Decimal => write!(f, "."),
            Self::Operation(op) => write!(f, "{}", op.ascii_symbol()),
            Self::Equals => write!(f, "="),
            Self::Clear => write!(f, "C"),
            Self::Backspace => write!(f, "⌫"),
            Self::ToggleSign => write!(f, "±"),
            Self::Percentage => write!(f, "%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_map_to_digits() {
        for d in 0..=9u8 {
            let key = d.to_string();
            assert_eq!(Action::from_key(&key), Some(Action::Digit(d)));
        }
    }

    #[test]
    fn operator_keys_map_to_operations() {
        assert_eq!(
            Action::from_key("+"),
            Some(Action::Operation(Operation::Add))
        );
        assert_eq!(
            Action::from_key("-"),
            Some(Action::Operation(Operation::Subtract))
        );
        assert_eq!(
            Action::from_key("/"),
            Some(Action::Operation(Operation::Divide))
        );
    }

    #[test]
    fn named_keys_map_to_commands() {
        assert_eq!(Action::from_key("="), Some(Action::Equals));
        assert_eq!(Action::from_key("c"), Some(Action::Clear));
        assert_eq!(Action::from_key("C"), Some(Action::Clear));
        assert_eq!(Action::from_key("Backspace"), Some(Action::Backspace));
        assert_eq!(Action::from_key("."), Some(Action::Decimal));
    }

    #[test]
    fn names_ignore_payload() {
        assert_eq!(Action::Digit(0).name(), Action::Digit(9).name());
        assert_eq!(Action::Operation(Operation::Add).name(), "operation");
        assert_eq!(Action::ToggleSign.name(), "toggle_sign");
        assert_eq!(Action::Backspace.to_string(), "⌫");
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(Action::from_key(""), None);
        assert_eq!(Action::from_key("a"), None);
        assert_eq!(Action::from_key("%"), None);
        assert_eq!(Action::from_key("12"), None);
        assert_eq!(Action::from_key("Shift"), None);
        assert_eq!(Action::from_key("×"), None);
    }

    #[test]
    fn digit_constructor_rejects_non_digits() {
        assert_eq!(Action::digit('5'), Some(Action::Digit(5)));
        assert_eq!(Action::digit('x'), None);
    }

    #[test]
    fn actions_serialize_with_tags() {
        let json = serde_json::to_string(&Action::Digit(4)).unwrap();
        assert_eq!(json, r#"{"type":"digit","value":4}"#);

        let json = serde_json::to_string(&Action::Equals).unwrap();
        assert_eq!(json, r#"{"type":"equals"}"#);

        let parsed: Action =
            serde_json::from_str(r#"{"type":"operation","value":"multiply"}"#).unwrap();
        assert_eq!(parsed, Action::Operation(Operation::Multiply));
    }
}
