//! Builder for constructing vending machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::vending::{PrizeDraw, SeededDraw, ThreadDraw, VendingMachine};
use log::warn;

/// Builder for constructing vending machines with a fluent API.
///
/// `build` checks every setting and reports all violations at once.
///
/// # Example
///
/// ```rust
/// use vendmill::builder::{BuildError, VendingMachineBuilder};
///
/// let machine = VendingMachineBuilder::new()
///     .inventory(10)
///     .prize_odds(4)
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(machine.prize_odds(), 4);
///
/// let err = VendingMachineBuilder::new()
///     .inventory(-1)
///     .prize_odds(0)
///     .build()
///     .unwrap_err();
/// assert_eq!(err.violations().len(), 2);
/// ```
pub struct VendingMachineBuilder {
    inventory: Option<i64>,
    config: MachineConfig,
    draw: Option<Box<dyn PrizeDraw + Send>>,
}

impl VendingMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            inventory: None,
            config: MachineConfig::default(),
            draw: None,
        }
    }

    /// Set the starting stock (required).
    pub fn inventory(mut self, count: i64) -> Self {
        self.inventory = Some(count);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn prize_odds(mut self, odds: u32) -> Self {
        self.config.prize_odds = odds;
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Use a custom prize draw.
    pub fn draw<D>(mut self, draw: D) -> Self
    where
        D: PrizeDraw + Send + 'static,
    {
        self.draw = Some(Box::new(draw));
        self
    }

    /// Use reproducible draws seeded with `seed`.
    pub fn seed(self, seed: u64) -> Self {
        self.draw(SeededDraw::new(seed))
    }

    /// Check every setting, collecting all violations.
    pub fn validate(&self) -> Result<u32, BuildError> {
        let mut errors = Vec::new();

        let inventory = match self.inventory {
            None => {
                errors.push(BuildError::MissingInventory);
                None
            }
            Some(count) if count < 0 => {
                errors.push(BuildError::NegativeInventory(count));
                None
            }
            Some(count) => match u32::try_from(count) {
                Ok(count) => Some(count),
                Err(_) => {
                    errors.push(BuildError::InventoryTooLarge(count));
                    None
                }
            },
        };

        if self.config.prize_odds == 0 {
            errors.push(BuildError::ZeroPrizeOdds);
        }

        if self.config.history_limit == 0 {
            errors.push(BuildError::ZeroHistoryLimit);
        }

        match (inventory, errors.len()) {
            (Some(count), 0) => Ok(count),
            (_, 1) => Err(errors.remove(0)),
            _ => Err(BuildError::Invalid(errors)),
        }
    }

    /// Build the vending machine.
    /// Returns an error if any setting is missing or out of range.
    pub fn build(self) -> Result<VendingMachine, BuildError> {
        let inventory = self.validate().inspect_err(|err| {
            warn!("rejected vending machine configuration: {err}");
        })?;
        let draw = self
            .draw
            .unwrap_or_else(|| Box::new(ThreadDraw) as Box<dyn PrizeDraw + Send>);
        Ok(VendingMachine::from_parts(inventory, self.config, draw))
    }
}

impl Default for VendingMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
