//! Display refresh signalling.

use crate::core::Phase;
use serde::Serialize;

/// What a presentation layer needs to redraw after an action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    /// Main display text
    pub display: String,
    /// Pending expression text, empty when no operation is pending
    pub expression: String,
    pub phase: Phase,
}

/// Receives a snapshot after every action the engine applies.
///
/// Any `Fn(&DisplaySnapshot) + Send + Sync` closure is an observer.
///
/// # Example
///
/// ```rust
/// use tally::CalculatorEngine;
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// let mut engine = CalculatorEngine::new();
/// engine.add_observer(move |snapshot: &tally::DisplaySnapshot| {
///     sink.lock().unwrap().push(snapshot.display.clone());
/// });
///
/// engine.input_digit(4);
/// engine.input_digit(2);
/// assert_eq!(*seen.lock().unwrap(), vec!["4", "42"]);
/// ```
pub trait DisplayObserver: Send + Sync {
    fn refresh(&self, snapshot: &DisplaySnapshot);
}

impl<F> DisplayObserver for F
where
    F: Fn(&DisplaySnapshot) + Send + Sync,
{
    fn refresh(&self, snapshot: &DisplaySnapshot) {
        self(snapshot)
    }
}
