//! Simulation configuration.

use serde::{Deserialize, Serialize};

/// Default upper bound on the simulated clock.
pub const DEFAULT_MAX_TICKS: i64 = 1_000_000;

/// Settings shared by all engines.
///
/// # Example
/// ```
/// use sched_sim::config::SimulationConfig;
///
/// let config = SimulationConfig::new().with_max_ticks(500);
/// assert_eq!(config.max_ticks, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// A run whose clock would pass this value fails with
    /// [`SimulationError::TickLimitExceeded`](crate::SimulationError::TickLimitExceeded).
    pub max_ticks: i64,
    /// Skip input validation. Invalid input then yields undefined metrics.
    pub skip_validation: bool,
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tick limit.
    pub fn with_max_ticks(mut self, max_ticks: i64) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Disables input validation.
    pub fn without_validation(mut self) -> Self {
        self.skip_validation = true;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_ticks: DEFAULT_MAX_TICKS,
            skip_validation: false,
        }
    }
}
