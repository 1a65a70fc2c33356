//! Tally: a deterministic four-function calculator engine
//!
//! Tally models a pocket calculator as a pure reducer. A closed set of
//! keypad actions (digits, decimal point, operators, equals, clear,
//! backspace, sign toggle, percentage) updates a small state record, and
//! a presentation layer reads back the display and pending expression.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState` holds the display, the captured operand,
//!   the pending operation and the error latch
//! - **Actions**: `Action` is plain data; a recorded trace replays identically
//! - **Engine**: `CalculatorEngine` applies actions and absorbs every error
//!   into the error configuration instead of returning it
//! - **Observers**: hosts register a `DisplayObserver` to redraw after each action
//!
//! # Example
//!
//! ```rust
//! use tally::CalculatorEngine;
//! use tally::core::Action;
//!
//! let mut engine = CalculatorEngine::new();
//! for key in ["1", "2", "*", "3", "Enter"] {
//!     if let Some(action) = Action::from_key(key) {
//!         engine.dispatch(action);
//!     }
//! }
//! assert_eq!(engine.current_display_text(), "36");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use builder::{BuildError, EngineBuilder};
pub use config::EngineConfig;
pub use crate::core::{Action, CalculatorState, Operation, Phase};
pub use engine::{CalculatorEngine, DisplayObserver, DisplaySnapshot};
pub use error::CalcError;
