//! The imperative shell around the pure core.
//!
//! `CalculatorEngine` owns the state record, applies actions to it and
//! signals observers. It performs no other output.

mod calculator;
mod observer;

pub use calculator::CalculatorEngine;
pub use observer::{DisplayObserver, DisplaySnapshot};
