//! Non-preemptive first-come-first-served engine.
//!
//! # Algorithm
//!
//! 1. Walk processes in input order (callers pre-sort by arrival).
//! 2. Each process waits `max(0, service_time - arrival)`.
//! 3. It then runs to completion; `service_time` advances to its completion.
//! 4. If the CPU would sit idle before the process arrives, the gap is
//!    recorded as an idle slice.
//! 5. Zero-burst processes get a timing row but no slice and do not
//!    move `service_time`.
//!
//! Throughput is measured against the last computed completion time.
//!
//! # Complexity
//! O(n).

use log::{debug, info};

use super::{check_input, Algorithm, ScheduleKpi, SimulationOutcome};
use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::models::{Process, ProcessMetrics, Timeline, Timeslice};
use crate::validation::is_sorted_by_arrival;

/// First-come-first-served scheduler.
///
/// # Example
///
/// ```
/// use sched_sim::models::Process;
/// use sched_sim::scheduler::FcfsScheduler;
///
/// let procs = vec![
///     Process::new("P1").with_arrival(0).with_burst(5),
///     Process::new("P2").with_arrival(1).with_burst(3),
/// ];
/// let outcome = FcfsScheduler::new().run(&procs).unwrap();
/// assert_eq!(outcome.row("P2").unwrap().wait_time, 4);
/// assert_eq!(outcome.timeline.makespan(), 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FcfsScheduler {
    config: SimulationConfig,
}

impl FcfsScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler with the given configuration.
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Simulates the workload.
    pub fn run(&self, processes: &[Process]) -> Result<SimulationOutcome, SimulationError> {
        check_input(&self.config, processes)?;
        if !is_sorted_by_arrival(processes) {
            debug!("FCFS input not sorted by arrival; running in input order");
        }

        let mut service_time: i64 = 0;
        let mut last_completion: i64 = 0;
        let mut timeline = Timeline::new();
        let mut rows = Vec::with_capacity(processes.len());

        for process in processes {
            let wait = (service_time - process.arrival_time).max(0);

            // Zero-burst processes never occupy the CPU.
            if process.burst_duration == 0 {
                rows.push(ProcessMetrics::from_wait(process, wait));
                continue;
            }

            let overflow = || SimulationError::TickLimitExceeded {
                limit: self.config.max_ticks,
                clock: i64::MAX,
            };
            let start = process.arrival_time.checked_add(wait).ok_or_else(overflow)?;
            let completion = start
                .checked_add(process.burst_duration)
                .ok_or_else(overflow)?;

            if completion > self.config.max_ticks {
                return Err(SimulationError::TickLimitExceeded {
                    limit: self.config.max_ticks,
                    clock: completion,
                });
            }

            if start > service_time {
                debug!("cpu idle from {service_time} until {start}");
                timeline.push(Timeslice::idle(service_time, start));
            }

            rows.push(ProcessMetrics::from_wait(process, wait));
            last_completion = completion;
            service_time = completion;
            timeline.push(Timeslice::new(&process.id, start, service_time));
        }

        let kpi = ScheduleKpi::calculate(&rows, &timeline, last_completion);
        info!(
            "FCFS finished {} process(es) at t={service_time}, avg wait {:.2}",
            rows.len(),
            kpi.average_wait
        );

        Ok(SimulationOutcome {
            algorithm: Algorithm::Fcfs,
            timeline,
            rows,
            kpi,
            final_clock: service_time,
        })
    }
}
