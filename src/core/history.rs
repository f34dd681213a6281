//! State transition history tracking.
//!
//! Keeps an immutable, optionally bounded record of the state changes a
//! machine went through.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use vendmill::core::StateTransition;
/// use vendmill::vending::VendingState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: VendingState::NoPayment,
///     to: VendingState::HasPayment,
///     trigger: "insert_payment".to_string(),
///     timestamp: Utc::now(),
///     sequence: 1,
/// };
/// assert_eq!(transition.trigger, "insert_payment");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Name of the event that caused the change
    pub trigger: String,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
    /// Monotonic position of this change within the machine's lifetime
    pub sequence: u64,
}

/// Ordered history of state transitions.
///
/// History is immutable: `record` returns a new history with the
/// transition appended. A history created with [`StateHistory::with_limit`]
/// keeps only the most recent `limit` transitions.
///
/// # Example
///
/// ```rust
/// use vendmill::core::{StateHistory, StateTransition};
/// use vendmill::vending::VendingState;
/// use chrono::Utc;
///
/// let history = StateHistory::new();
///
/// let history = history.record(StateTransition {
///     from: VendingState::NoPayment,
///     to: VendingState::HasPayment,
///     trigger: "insert_payment".to_string(),
///     timestamp: Utc::now(),
///     sequence: 1,
/// });
///
/// let history = history.record(StateTransition {
///     from: VendingState::HasPayment,
///     to: VendingState::Dispensing,
///     trigger: "activate".to_string(),
///     timestamp: Utc::now(),
///     sequence: 2,
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // NoPayment -> HasPayment -> Dispensing
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history that retains at most `limit` transitions.
    ///
    /// A limit of zero is treated as one.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit.max(1)),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched. When the history is bounded
    /// and full, the oldest transition is dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vendmill::core::{StateHistory, StateTransition};
    /// use vendmill::vending::VendingState;
    /// use chrono::Utc;
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(StateTransition {
    ///     from: VendingState::HasPayment,
    ///     to: VendingState::NoPayment,
    ///     trigger: "eject_payment".to_string(),
    ///     timestamp: Utc::now(),
    ///     sequence: 1,
    /// });
    ///
    /// assert_eq!(new_history.transitions().len(), 1);
    /// assert_eq!(history.transitions().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        if let Some(limit) = self.limit {
            if transitions.len() > limit {
                let excess = transitions.len() - limit;
                transitions.drain(..excess);
            }
        }
        Self {
            transitions,
            limit: self.limit,
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained transition followed
    /// by the `to` state of every retained transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last retained transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all retained transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
