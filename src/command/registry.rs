//! Slot-indexed command registry with single-level undo.

use super::action::{Action, NoOp};
use super::error::CommandError;
use log::{debug, warn};
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
struct Slot {
    activate: Arc<dyn Action>,
    deactivate: Arc<dyn Action>,
}

impl Slot {
    fn empty(no_op: &Arc<dyn Action>) -> Self {
        Self {
            activate: Arc::clone(no_op),
            deactivate: Arc::clone(no_op),
        }
    }
}

/// Fixed set of slots, each holding an activate and a deactivate action.
///
/// The registry remembers the last action it ran and can undo it once.
/// Actions know nothing about the registry; the registry knows nothing
/// about what its actions do.
///
/// # Example
///
/// ```rust
/// use vendmill::command::{CommandError, CommandRegistry, FnAction};
/// use std::sync::Arc;
///
/// let mut registry = CommandRegistry::new(2);
/// registry
///     .bind(
///         0,
///         Arc::new(FnAction::new("fan on", || {}, || {})),
///         Arc::new(FnAction::new("fan off", || {}, || {})),
///     )
///     .unwrap();
///
/// registry.trigger_activate(0).unwrap();
/// assert_eq!(registry.last_invoked().name(), "fan on");
///
/// assert_eq!(
///     registry.trigger_activate(2),
///     Err(CommandError::OutOfRange { index: 2, slot_count: 2 })
/// );
/// ```
pub struct CommandRegistry {
    slots: Vec<Slot>,
    last_invoked: Arc<dyn Action>,
    invocations: u64,
}

impl CommandRegistry {
    /// Create a registry with `slot_count` slots bound to no-ops.
    pub fn new(slot_count: usize) -> Self {
        let no_op: Arc<dyn Action> = Arc::new(NoOp);
        Self {
            slots: vec![Slot::empty(&no_op); slot_count],
            last_invoked: no_op,
            invocations: 0,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Bind a pair of actions to slot `index`, replacing any earlier pair.
    pub fn bind(
        &mut self,
        index: usize,
        activate: Arc<dyn Action>,
        deactivate: Arc<dyn Action>,
    ) -> Result<(), CommandError> {
        let slot = self.slot_mut(index)?;
        debug!(
            "slot {index} bound to {} / {}",
            activate.name(),
            deactivate.name()
        );
        *slot = Slot {
            activate,
            deactivate,
        };
        Ok(())
    }

    /// Run the activate action of slot `index`.
    pub fn trigger_activate(&mut self, index: usize) -> Result<(), CommandError> {
        let action = Arc::clone(&self.slot(index)?.activate);
        self.invoke(index, action);
        Ok(())
    }

    /// Run the deactivate action of slot `index`.
    pub fn trigger_deactivate(&mut self, index: usize) -> Result<(), CommandError> {
        let action = Arc::clone(&self.slot(index)?.deactivate);
        self.invoke(index, action);
        Ok(())
    }

    /// Reverse the last invoked action.
    ///
    /// Always safe: before anything ran this undoes a no-op. The last
    /// invoked action is left in place, so undoing twice reverses it twice.
    pub fn undo(&mut self) {
        debug!("undoing {}", self.last_invoked.name());
        self.last_invoked.undo();
        self.invocations += 1;
    }

    pub fn last_invoked(&self) -> &dyn Action {
        self.last_invoked.as_ref()
    }

    /// Triggers and undos run so far.
    pub fn invocations(&self) -> u64 {
        self.invocations
    }

    fn invoke(&mut self, index: usize, action: Arc<dyn Action>) {
        debug!("slot {index} runs {}", action.name());
        action.execute();
        self.last_invoked = action;
        self.invocations += 1;
    }

    fn slot(&self, index: usize) -> Result<&Slot, CommandError> {
        let slot_count = self.slots.len();
        self.slots.get(index).ok_or_else(|| {
            warn!("slot {index} requested from a registry of {slot_count}");
            CommandError::OutOfRange { index, slot_count }
        })
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Slot, CommandError> {
        let slot_count = self.slots.len();
        self.slots.get_mut(index).ok_or_else(|| {
            warn!("slot {index} requested from a registry of {slot_count}");
            CommandError::OutOfRange { index, slot_count }
        })
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<(&str, &str)> = self
            .slots
            .iter()
            .map(|s| (s.activate.name(), s.deactivate.name()))
            .collect();
        f.debug_struct("CommandRegistry")
            .field("slots", &slots)
            .field("last_invoked", &self.last_invoked.name())
            .field("invocations", &self.invocations)
            .finish()
    }
}
