//! The calculator's single state record.
//!
//! All accessors are pure. Mutation happens only through the engine,
//! which owns the record and keeps its invariants:
//! - `display` is never empty and holds at most one decimal point
//! - in the error configuration `previous_value` and `operation` are absent
//! - `operation` is only set alongside `previous_value`

use super::number::format_number;
use super::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display text of the cleared configuration.
pub const INITIAL_DISPLAY: &str = "0";

/// Coarse classification of a [`CalculatorState`].
///
/// # Example
///
/// ```rust
/// use tally::core::{CalculatorState, Phase};
///
/// let state = CalculatorState::new();
/// assert_eq!(state.phase(), Phase::Ready);
/// assert_eq!(state.phase().name(), "Ready");
/// assert!(!state.phase().is_error());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Cleared configuration.
    Ready,
    /// A number is being typed.
    Entering,
    /// An operation is pending and the next digit starts its second operand.
    AwaitingOperand,
    /// Equals produced a result; the next digit starts a new number.
    ShowingResult,
    /// Error configuration.
    Error,
}

impl Phase {
    pub fn name(&self) -> &str {
        match self {
            Self::Ready => "Ready",
            Self::Entering => "Entering",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::ShowingResult => "ShowingResult",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current display, captured operand, pending operation and flags.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CalculatorState {
    pub(crate) display: String,
    pub(crate) previous_value: Option<f64>,
    pub(crate) operation: Option<Operation>,
    pub(crate) start_new_number: bool,
    pub(crate) error: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Create a state in the cleared configuration.
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            previous_value: None,
            operation: None,
            start_new_number: false,
            error: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Whether the next digit replaces the display instead of appending.
    pub fn starts_new_number(&self) -> bool {
        self.start_new_number
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn is_cleared(&self) -> bool {
        *self == Self::new()
    }

    /// Classify the state.
    pub fn phase(&self) -> Phase {
        if self.error {
            Phase::Error
        } else if self.start_new_number && self.operation.is_some() {
            Phase::AwaitingOperand
        } else if self.start_new_number {
            Phase::ShowingResult
        } else if self.display == INITIAL_DISPLAY
            && self.previous_value.is_none()
            && self.operation.is_none()
        {
            Phase::Ready
        } else {
            Phase::Entering
        }
    }

    /// Text of the pending expression: `"<previous> <symbol>"`, or empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::CalculatorEngine;
    /// use tally::core::Operation;
    ///
    /// let mut engine = CalculatorEngine::new();
    /// engine.input_digit(6);
    /// engine.set_operation(Operation::Multiply);
    /// assert_eq!(engine.state().pending_expression(), "6 ×");
    /// ```
    pub fn pending_expression(&self) -> String {
        match (self.previous_value, self.operation) {
            (Some(previous), Some(op)) => format!("{} {}", format_number(previous), op.symbol()),
            _ => String::new(),
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn enter_error(&mut self, marker: &str) {
        self.error = true;
        self.display = marker.to_string();
        self.previous_value = None;
        self.operation = None;
        self.start_new_number = false;
    }
}
