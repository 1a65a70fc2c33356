//! Binary operations selectable on the keypad.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pending binary operation awaiting its second operand.
///
/// The action API accepts the ASCII symbols `+ - * /`; for display the
/// multiplicative operators render as `×` and `÷`.
///
/// # Example
///
/// ```rust
/// use tally::core::Operation;
///
/// assert_eq!(Operation::from_symbol('*'), Some(Operation::Multiply));
/// assert_eq!(Operation::from_symbol('÷'), Some(Operation::Divide));
/// assert_eq!(Operation::Multiply.symbol(), '×');
/// assert_eq!(Operation::from_symbol('^'), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Parse an operator symbol. Accepts both the ASCII and the display form.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Symbol used in the pending expression text.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Symbol accepted by the keyboard and the action API.
    pub fn ascii_symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
