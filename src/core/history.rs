//! Phase transition history.
//!
//! Records every action that moved the calculator between phases.
//! In-memory only; it lives and dies with its engine, and the engine
//! keeps only the most recent entries.

use super::action::Action;
use super::state::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of one phase change and the action that caused it.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, Phase, PhaseTransition};
/// use chrono::Utc;
///
/// let transition = PhaseTransition {
///     from: Phase::Ready,
///     to: Phase::Entering,
///     action: Action::Digit(4),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, Phase::Entering);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// Phase before the action
    pub from: Phase,
    /// Phase after the action
    pub to: Phase,
    /// The action that was applied
    pub action: Action,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of phase transitions.
///
/// `record` returns a new history with the transition appended; the
/// original is left untouched.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, Operation, Phase, PhaseHistory, PhaseTransition};
/// use chrono::Utc;
///
/// let history = PhaseHistory::new();
/// let history = history.record(PhaseTransition {
///     from: Phase::Ready,
///     to: Phase::Entering,
///     action: Action::Digit(2),
///     timestamp: Utc::now(),
/// });
/// let history = history.record(PhaseTransition {
///     from: Phase::Entering,
///     to: Phase::AwaitingOperand,
///     action: Action::Operation(Operation::Add),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(
///     history.get_path(),
///     vec![Phase::Ready, Phase::Entering, Phase::AwaitingOperand]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseHistory {
    transitions: Vec<PhaseTransition>,
}

impl PhaseHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place, dropping the oldest entries so at
    /// most `limit` remain. A limit of zero keeps nothing.
    pub fn push_bounded(&mut self, transition: PhaseTransition, limit: usize) {
        self.transitions.push(transition);
        if self.transitions.len() > limit {
            let excess = self.transitions.len() - limit;
            self.transitions.drain(..excess);
        }
    }

    /// Phases traversed: the first `from`, then each `to`.
    pub fn get_path(&self) -> Vec<Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the first and last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// Number of times the calculator entered the error configuration.
    pub fn error_count(&self) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.to.is_error() && !t.from.is_error())
            .count()
    }

    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    fn transition(from: Phase, to: Phase, action: Action) -> PhaseTransition {
        PhaseTransition {
            from,
            to,
            action,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = PhaseHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.error_count(), 0);
    }

    #[test]
    fn record_is_immutable() {
        let history = PhaseHistory::new();
        let new_history = history.record(transition(
            Phase::Ready,
            Phase::Entering,
            Action::Digit(1),
        ));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn push_bounded_drops_oldest_entries() {
        let mut history = PhaseHistory::new();
        for d in 0..5u8 {
            history.push_bounded(
                transition(Phase::Ready, Phase::Entering, Action::Digit(d)),
                3,
            );
        }

        let kept: Vec<Action> = history.transitions().iter().map(|t| t.action).collect();
        assert_eq!(
            kept,
            vec![Action::Digit(2), Action::Digit(3), Action::Digit(4)]
        );
    }

    #[test]
    fn push_bounded_with_zero_limit_keeps_nothing() {
        let mut history = PhaseHistory::new();
        history.push_bounded(transition(Phase::Ready, Phase::Entering, Action::Digit(1)), 0);
        assert!(history.is_empty());
    }

    #[test]
    fn get_path_returns_phase_sequence() {
        let history = PhaseHistory::new()
            .record(transition(Phase::Ready, Phase::Entering, Action::Digit(5)))
            .record(transition(
                Phase::Entering,
                Phase::AwaitingOperand,
                Action::Operation(Operation::Divide),
            ))
            .record(transition(
                Phase::AwaitingOperand,
                Phase::Error,
                Action::Equals,
            ));

        assert_eq!(
            history.get_path(),
            vec![
                Phase::Ready,
                Phase::Entering,
                Phase::AwaitingOperand,
                Phase::Error
            ]
        );
    }

    #[test]
    fn error_count_counts_entries_into_error() {
        let history = PhaseHistory::new()
            .record(transition(Phase::Entering, Phase::Error, Action::Equals))
            .record(transition(Phase::Error, Phase::Ready, Action::Clear))
            .record(transition(Phase::Entering, Phase::Error, Action::Equals));

        assert_eq!(history.error_count(), 2);
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history =
            PhaseHistory::new().record(transition(Phase::Ready, Phase::Entering, Action::Decimal));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = PhaseHistory::new()
            .record(PhaseTransition {
                from: Phase::Ready,
                to: Phase::Entering,
                action: Action::Digit(1),
                timestamp: start,
            })
            .record(PhaseTransition {
                from: Phase::Entering,
                to: Phase::Ready,
                action: Action::Clear,
                timestamp: start + chrono::Duration::milliseconds(250),
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history =
            PhaseHistory::new().record(transition(Phase::Ready, Phase::Entering, Action::Digit(3)));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: PhaseHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}
