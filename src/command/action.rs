//! Invocable actions with a defined inverse.

use std::fmt;
use std::sync::Arc;

/// An invocable unit of behavior that knows how to reverse itself.
///
/// Actions are shared behind `Arc`, so the same action can sit in a
/// registry slot and inside a [`Macro`] at once.
///
/// # Example
///
/// ```rust
/// use vendmill::command::{Action, FnAction};
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let lamp = Arc::new(AtomicBool::new(false));
/// let (on, off) = (Arc::clone(&lamp), Arc::clone(&lamp));
/// let switch_on = FnAction::new(
///     "lamp on",
///     move || on.store(true, Ordering::SeqCst),
///     move || off.store(false, Ordering::SeqCst),
/// );
///
/// switch_on.execute();
/// assert!(lamp.load(Ordering::SeqCst));
/// switch_on.undo();
/// assert!(!lamp.load(Ordering::SeqCst));
/// ```
pub trait Action: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    fn execute(&self);

    /// Reverse the effect of [`execute`](Action::execute).
    fn undo(&self);
}

/// Action that does nothing in either direction.
///
/// Fills every registry slot until something is bound, and stands in as
/// the last invoked action before anything ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOp;

impl Action for NoOp {
    fn name(&self) -> &str {
        "no-op"
    }

    fn execute(&self) {}

    fn undo(&self) {}
}

type Callback = Box<dyn Fn() + Send + Sync>;

/// Action built from a pair of closures.
pub struct FnAction {
    name: String,
    forward: Callback,
    inverse: Callback,
}

impl FnAction {
    pub fn new<F, U>(name: impl Into<String>, forward: F, inverse: U) -> Self
    where
        F: Fn() + Send + Sync + 'static,
        U: Fn() + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            forward: Box::new(forward),
            inverse: Box::new(inverse),
        }
    }
}

impl Action for FnAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self) {
        (self.forward)()
    }

    fn undo(&self) {
        (self.inverse)()
    }
}

impl fmt::Debug for FnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Composite action running a fixed list of actions.
///
/// Both directions walk the list front to back: undoing `[a, b]` runs
/// `a.undo()` and then `b.undo()`. This is not stack order.
pub struct Macro {
    name: String,
    actions: Vec<Arc<dyn Action>>,
}

impl Macro {
    pub fn new(name: impl Into<String>, actions: Vec<Arc<dyn Action>>) -> Self {
        Self {
            name: name.into(),
            actions,
        }
    }

    pub fn actions(&self) -> &[Arc<dyn Action>] {
        &self.actions
    }
}

impl Action for Macro {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self) {
        for action in &self.actions {
            action.execute();
        }
    }

    fn undo(&self) {
        for action in &self.actions {
            action.undo();
        }
    }
}

impl fmt::Debug for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.actions.iter().map(|a| a.name()).collect();
        f.debug_struct("Macro")
            .field("name", &self.name)
            .field("actions", &names)
            .finish()
    }
}
