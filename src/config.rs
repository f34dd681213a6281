//! Tunables for a vending machine.

/// A prize is awarded when a draw in `0..DEFAULT_PRIZE_ODDS` lands on zero.
pub const DEFAULT_PRIZE_ODDS: u32 = 10;
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Size of the prize draw range. One in `prize_odds` activations wins.
    pub prize_odds: u32,
    /// Number of state changes kept in the machine's history.
    pub history_limit: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            prize_odds: DEFAULT_PRIZE_ODDS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
