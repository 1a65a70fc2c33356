//! The calculator engine: a reducer over keypad actions.

use crate::builder::EngineBuilder;
use crate::config::EngineConfig;
use crate::core::{
    evaluate_with_precision, format_number, parse_display, Action, CalculatorState, Operation,
    PhaseHistory, PhaseTransition, INITIAL_DISPLAY,
};
use crate::engine::observer::{DisplayObserver, DisplaySnapshot};
use crate::error::CalcError;
use chrono::Utc;
use std::fmt;
use tracing::debug;

/// Calculator engine owning one session's state.
///
/// Each action method applies one user intent atomically, records any
/// phase change, and then notifies registered observers. Errors never
/// escape: a failed parse or evaluation moves the engine into the error
/// configuration, and the next productive input clears it.
///
/// # Example
///
/// ```rust
/// use tally::CalculatorEngine;
/// use tally::core::Operation;
///
/// let mut engine = CalculatorEngine::new();
/// engine.input_digit(2);
/// engine.set_operation(Operation::Add);
/// engine.input_digit(3);
/// engine.set_operation(Operation::Add);
/// assert_eq!(engine.current_display_text(), "5");
/// assert_eq!(engine.pending_expression_text(), "5 +");
///
/// engine.input_digit(4);
/// engine.equals();
/// assert_eq!(engine.current_display_text(), "9");
/// assert_eq!(engine.pending_expression_text(), "");
/// ```
pub struct CalculatorEngine {
    state: CalculatorState,
    config: EngineConfig,
    history: PhaseHistory,
    last_error: Option<CalcError>,
    observers: Vec<Box<dyn DisplayObserver>>,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CalculatorEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorEngine")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("history_len", &self.history.transitions().len())
            .field("last_error", &self.last_error)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl CalculatorEngine {
    /// Create an engine with the default configuration, in the cleared state.
    pub fn new() -> Self {
        Self::from_parts(EngineConfig::default(), Vec::new())
    }

    /// Start building an engine with a custom configuration.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub(crate) fn from_parts(
        config: EngineConfig,
        observers: Vec<Box<dyn DisplayObserver>>,
    ) -> Self {
        Self {
            state: CalculatorState::new(),
            config,
            history: PhaseHistory::new(),
            last_error: None,
            observers,
        }
    }

    /// Register an observer notified after every action.
    pub fn add_observer<O>(&mut self, observer: O)
    where
        O: DisplayObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    /// The error that produced the current error configuration, if any.
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    pub fn current_display_text(&self) -> &str {
        self.state.display()
    }

    pub fn pending_expression_text(&self) -> String {
        self.state.pending_expression()
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            display: self.state.display().to_string(),
            expression: self.state.pending_expression(),
            phase: self.state.phase(),
        }
    }

    /// Apply one action, record the phase change and notify observers.
    pub fn dispatch(&mut self, action: Action) {
        let from = self.state.phase();

        match action {
            Action::Digit(d) => self.apply_digit(d),
            Action::Decimal => self.apply_decimal(),
            Action::Operation(op) => self.apply_operation(op),
            Action::Equals => self.apply_equals(),
            Action::Clear => self.reset(),
            Action::Backspace => self.apply_backspace(),
            Action::ToggleSign => self.apply_toggle_sign(),
            Action::Percentage => self.apply_percentage(),
        }

        let to = self.state.phase();
        if from != to {
            self.history.push_bounded(
                PhaseTransition {
                    from,
                    to,
                    action,
                    timestamp: Utc::now(),
                },
                self.config.history_limit,
            );
        }

        debug!(
            action = action.name(),
            key = %action,
            display = %self.state.display(),
            phase = %to,
            "Applied action"
        );

        self.notify();
    }

    /// Apply a sequence of actions in order.
    pub fn dispatch_all<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
    }

    /// Enter a digit `0..=9`. Other values are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        self.dispatch(Action::Digit(digit));
    }

    pub fn input_decimal(&mut self) {
        self.dispatch(Action::Decimal);
    }

    pub fn set_operation(&mut self, op: Operation) {
        self.dispatch(Action::Operation(op));
    }

    pub fn equals(&mut self) {
        self.dispatch(Action::Equals);
    }

    pub fn clear(&mut self) {
        self.dispatch(Action::Clear);
    }

    pub fn backspace(&mut self) {
        self.dispatch(Action::Backspace);
    }

    pub fn toggle_sign(&mut self) {
        self.dispatch(Action::ToggleSign);
    }

    pub fn percentage(&mut self) {
        self.dispatch(Action::Percentage);
    }

    fn apply_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            debug!(digit, "Ignoring out-of-range digit");
            return;
        };

        if self.state.error {
            self.reset();
        }

        if self.state.display == INITIAL_DISPLAY && c == '0' {
            return;
        }

        if self.state.start_new_number {
            self.state.display = c.to_string();
            self.state.start_new_number = false;
        } else if self.state.display.len() < self.config.max_display_len
            && !self.state.display.contains('e')
        {
            if self.state.display == INITIAL_DISPLAY {
                self.state.display.clear();
            }
            self.state.display.push(c);
        }
    }

    fn apply_decimal(&mut self) {
        if self.state.error {
            self.reset();
        }

        if self.state.start_new_number {
            self.state.display = "0.".to_string();
            self.state.start_new_number = false;
        } else if !self.state.display.contains(['.', 'e']) {
            self.state.display.push('.');
        }
    }

    fn apply_backspace(&mut self) {
        if self.state.error {
            self.reset();
            return;
        }

        self.state.display.pop();
        // A dangling sign or exponent marker is not a number.
        let keep = self
            .state
            .display
            .trim_end_matches(['e', '+', '-'])
            .len();
        self.state.display.truncate(keep);
        if self.state.display.is_empty() {
            self.state.display = INITIAL_DISPLAY.to_string();
        }
    }

    fn apply_operation(&mut self, op: Operation) {
        if self.state.error {
            self.reset();
            return;
        }

        let current = match parse_display(&self.state.display) {
            Ok(value) => value,
            Err(e) => return self.fail(e),
        };

        match (self.state.previous_value, self.state.operation) {
            (None, _) => self.state.previous_value = Some(current),
            (Some(previous), Some(pending)) => {
                match evaluate_with_precision(previous, current, pending, self.config.precision) {
                    Ok(result) => {
                        debug!(operation = pending.name(), result, "Chained pending operation");
                        self.state.display = format_number(result);
                        self.state.previous_value = Some(result);
                    }
                    Err(e) => return self.fail(e),
                }
            }
            (Some(_), None) => {}
        }

        self.state.operation = Some(op);
        self.state.start_new_number = true;
    }

    fn apply_equals(&mut self) {
        if self.state.error {
            self.reset();
            return;
        }

        let (Some(previous), Some(op)) = (self.state.previous_value, self.state.operation) else {
            return;
        };

        let result = parse_display(&self.state.display).and_then(|current| {
            evaluate_with_precision(previous, current, op, self.config.precision)
        });

        match result {
            Ok(value) => {
                self.state.display = format_number(value);
                self.state.previous_value = None;
                self.state.operation = None;
                self.state.start_new_number = true;
            }
            Err(e) => self.fail(e),
        }
    }

    fn apply_toggle_sign(&mut self) {
        self.apply_unary(|value| -value);
    }

    fn apply_percentage(&mut self) {
        self.apply_unary(|value| value / 100.0);
    }

    fn apply_unary(&mut self, f: impl Fn(f64) -> f64) {
        if self.state.error {
            self.reset();
            return;
        }

        if let Ok(value) = parse_display(&self.state.display) {
            self.state.display = format_number(f(value));
        }
    }

    fn reset(&mut self) {
        self.state.reset();
        self.last_error = None;
    }

    fn fail(&mut self, error: CalcError) {
        debug!(error = %error, display = %self.state.display(), "Entering error state");
        self.state.enter_error(&self.config.error_marker);
        self.last_error = Some(error);
    }

    fn notify(&self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer.refresh(&snapshot);
        }
    }
}
