//! Process (job) model.
//!
//! A process is the immutable input unit of a simulation: it becomes
//! runnable at its arrival time and needs a fixed amount of CPU time.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch
//! (t=0). A unit is the smallest preemption granularity.

use serde::{Deserialize, Serialize};

/// A process to be scheduled on the simulated CPU.
///
/// Engines never mutate a `Process`; remaining burst lives in the
/// per-run [`SimulationContext`](crate::dispatching::SimulationContext).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time the process requires.
    pub burst_duration: i64,
    /// Reporting-only priority. Not used by FCFS or SJF selection.
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a process that arrives at t=0 with no CPU demand.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            arrival_time: 0,
            burst_duration: 0,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst duration.
    pub fn with_burst(mut self, burst_duration: i64) -> Self {
        self.burst_duration = burst_duration;
        self
    }

    /// Sets the reporting priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: i64) -> bool {
        self.arrival_time <= clock
    }
}
