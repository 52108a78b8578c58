//! Scheduling engines and KPI evaluation.
//!
//! Provides the preemptive shortest-job-first engine, the
//! non-preemptive first-come-first-served engine, and the aggregate
//! metrics both report.
//!
//! # Algorithms
//!
//! `SjfScheduler` advances the clock one unit per tick and re-selects
//! the shortest remaining job every tick, preempting the running
//! process when a shorter one is eligible. `FcfsScheduler` runs every
//! process to completion in input order.
//!
//! # KPI
//!
//! `ScheduleKpi` computes average wait, average turnaround, throughput,
//! makespan and CPU utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod sjf;

pub use fcfs::FcfsScheduler;
pub use kpi::ScheduleKpi;
pub use sjf::SjfScheduler;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::models::{Process, ProcessMetrics, Timeline};
use crate::validation::validate_processes;

/// Available scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Non-preemptive first-come-first-served.
    Fcfs,
    /// Preemptive shortest-job-first (shortest remaining time).
    Sjf,
}

impl Algorithm {
    /// Short name (e.g., "FCFS").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
        }
    }

    /// Long description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come, First-Served",
            Self::Sjf => "Shortest Job First (preemptive)",
        }
    }

    /// Runs this policy over `processes`.
    pub fn run(
        &self,
        config: &SimulationConfig,
        processes: &[Process],
    ) -> Result<SimulationOutcome, SimulationError> {
        match self {
            Self::Fcfs => FcfsScheduler::with_config(config.clone()).run(processes),
            Self::Sjf => SjfScheduler::with_config(config.clone()).run(processes),
        }
    }
}

/// Everything a simulation run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy that produced this outcome.
    pub algorithm: Algorithm,
    /// Gantt timeline.
    pub timeline: Timeline,
    /// One row per input process, in input order.
    pub rows: Vec<ProcessMetrics>,
    /// Aggregate figures.
    pub kpi: ScheduleKpi,
    /// Clock value when the run ended.
    pub final_clock: i64,
}

impl SimulationOutcome {
    /// Finds the timing row for a process.
    pub fn row(&self, process_id: &str) -> Option<&ProcessMetrics> {
        self.rows.iter().find(|r| r.id == process_id)
    }

    /// Whether the timeline and every row satisfy the model invariants:
    /// contiguous timeline, busy time equal to total burst, and the
    /// turnaround/completion identities per row.
    pub fn is_consistent(&self) -> bool {
        let total_burst: i64 = self.rows.iter().map(|r| r.burst_duration).sum();
        self.timeline.is_contiguous()
            && self.timeline.busy_time() == total_burst
            && self.rows.iter().all(ProcessMetrics::is_consistent)
    }
}

/// Validates input unless the configuration opts out.
fn check_input(config: &SimulationConfig, processes: &[Process]) -> Result<(), SimulationError> {
    if config.skip_validation {
        return Ok(());
    }
    validate_processes(processes).map_err(|errors| {
        warn!("rejected workload with {} validation error(s)", errors.len());
        SimulationError::InvalidInput(errors)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new("P1").with_arrival(0).with_burst(3),
            Process::new("P2").with_arrival(1).with_burst(1),
        ]
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::Fcfs.name(), "FCFS");
        assert_eq!(Algorithm::Sjf.name(), "SJF");
        assert!(Algorithm::Sjf.description().contains("preemptive"));
    }

    #[test]
    fn test_algorithm_run_dispatch() {
        let config = SimulationConfig::default();
        let fcfs = Algorithm::Fcfs.run(&config, &sample()).unwrap();
        let sjf = Algorithm::Sjf.run(&config, &sample()).unwrap();
        assert_eq!(fcfs.algorithm, Algorithm::Fcfs);
        assert_eq!(sjf.algorithm, Algorithm::Sjf);
        // P2 preempts P1 under SJF only.
        assert_eq!(fcfs.timeline.len(), 2);
        assert_eq!(sjf.timeline.len(), 3);
    }

    #[test]
    fn test_outcome_row_lookup() {
        let outcome = Algorithm::Fcfs
            .run(&SimulationConfig::default(), &sample())
            .unwrap();
        assert_eq!(outcome.row("P2").unwrap().wait_time, 2);
        assert!(outcome.row("P9").is_none());
        assert!(outcome.is_consistent());
    }

    #[test]
    fn test_invalid_input_rejected() {
        let procs = vec![Process::new("P1").with_burst(-2)];
        for algorithm in [Algorithm::Fcfs, Algorithm::Sjf] {
            let err = algorithm
                .run(&SimulationConfig::default(), &procs)
                .unwrap_err();
            assert!(matches!(err, SimulationError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_outcome_serializes() {
        let outcome = Algorithm::Sjf
            .run(&SimulationConfig::default(), &sample())
            .unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        let back: SimulationOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timeline, outcome.timeline);
        assert_eq!(back.rows, outcome.rows);
    }
}
