//! Per-process timing: the accumulator used while a run is in progress
//! and the finalized metrics row reported afterwards.
//!
//! # Definitions
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Wait | Time eligible but not running |
//! | Turnaround | wait + burst |
//! | Completion | arrival + wait + burst |

use serde::{Deserialize, Serialize};

use super::Process;

/// Mutable per-process counters for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimingAccumulator {
    /// Wait accrued so far.
    pub wait: i64,
    /// Clock value since which the process has been ready but not running.
    pub ready_since: i64,
}

impl TimingAccumulator {
    /// Creates an accumulator for a process that becomes ready on arrival.
    pub fn for_process(process: &Process) -> Self {
        Self {
            wait: 0,
            ready_since: process.arrival_time,
        }
    }

    /// Records a dispatch at `clock`: adds the ready interval to the wait.
    pub fn dispatch(&mut self, clock: i64) {
        self.wait += (clock - self.ready_since).max(0);
    }

    /// Records a preemption at `clock`: the process is ready again from now.
    pub fn preempt(&mut self, clock: i64) {
        self.ready_since = clock;
    }

    /// Finalizes into a metrics row.
    pub fn finish(&self, process: &Process) -> ProcessMetrics {
        ProcessMetrics::from_wait(process, self.wait)
    }
}

/// One row of the timing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process id.
    pub id: String,
    /// Reporting priority.
    pub priority: i64,
    /// Original burst duration.
    pub burst_duration: i64,
    /// Arrival time.
    pub arrival_time: i64,
    /// Total time spent eligible but not running.
    pub wait_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
    /// Clock value at which the process finished.
    pub completion_time: i64,
}

impl ProcessMetrics {
    /// Derives turnaround and completion from the total wait.
    pub fn from_wait(process: &Process, wait_time: i64) -> Self {
        Self {
            id: process.id.clone(),
            priority: process.priority,
            burst_duration: process.burst_duration,
            arrival_time: process.arrival_time,
            wait_time,
            turnaround_time: wait_time + process.burst_duration,
            completion_time: process.arrival_time + wait_time + process.burst_duration,
        }
    }

    /// Whether the row satisfies the turnaround/completion identities.
    pub fn is_consistent(&self) -> bool {
        self.wait_time >= 0
            && self.turnaround_time == self.wait_time + self.burst_duration
            && self.completion_time == self.arrival_time + self.turnaround_time
    }
}
