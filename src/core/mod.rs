//! Pure calculator core.
//!
//! This module contains everything that has no side effects:
//! - The `Action` and `Operation` vocabularies
//! - The `CalculatorState` record and its `Phase`
//! - Evaluation, rounding and display number formatting
//! - Immutable phase history
//!
//! The engine in [`crate::engine`] is the only writer of state.

mod action;
mod evaluate;
mod history;
mod number;
mod operation;
mod state;

pub use action::Action;
pub use evaluate::{evaluate, evaluate_with_precision, DEFAULT_PRECISION};
pub use history::{PhaseHistory, PhaseTransition};
pub use number::{format_number, parse_display, round_to_places};
pub use operation::Operation;
pub use state::{CalculatorState, Phase, INITIAL_DISPLAY};
