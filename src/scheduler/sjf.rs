//! Preemptive shortest-job-first engine.
//!
//! # Algorithm
//!
//! Discrete time, one unit per tick:
//!
//! 1. Select the eligible process with the least remaining burst.
//! 2. If it differs from the running process, close the running slice,
//!    mark the preempted process ready and dispatch the new one.
//! 3. Consume one unit of the running process and advance the clock.
//! 4. When nothing is eligible and nothing remains, close the last slice
//!    and stop. When nothing is eligible but work remains, jump the clock
//!    to the next arrival and record an idle slice.
//!
//! A process accrues wait every time it is dispatched: the interval since
//! it last became ready (its arrival, or the tick it was preempted).
//!
//! Throughput is measured against the final clock value.
//!
//! # Complexity
//! O(n * T) where T is the makespan.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use log::{debug, info, trace};

use super::{check_input, Algorithm, ScheduleKpi, SimulationOutcome};
use crate::config::SimulationConfig;
use crate::dispatching::{select_shortest_remaining, SimulationContext};
use crate::error::SimulationError;
use crate::models::{Process, Timeline, Timeslice, TimingAccumulator};

/// Preemptive shortest-job-first (shortest remaining time) scheduler.
///
/// # Example
///
/// ```
/// use sched_sim::models::Process;
/// use sched_sim::scheduler::SjfScheduler;
///
/// let procs = vec![
///     Process::new("P1").with_arrival(0).with_burst(4),
///     Process::new("P2").with_arrival(1).with_burst(2),
/// ];
/// let outcome = SjfScheduler::new().run(&procs).unwrap();
/// assert_eq!(
///     outcome.timeline.as_tuples(),
///     vec![("P1", 0, 1), ("P2", 1, 3), ("P1", 3, 6)]
/// );
/// assert_eq!(outcome.row("P1").unwrap().wait_time, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SjfScheduler {
    config: SimulationConfig,
}

impl SjfScheduler {
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

        let mut ctx = SimulationContext::new(processes);
        let mut timing: Vec<TimingAccumulator> = processes
            .iter()
            .map(TimingAccumulator::for_process)
            .collect();
        let mut timeline = Timeline::new();
        let mut current: Option<usize> = None;
        let mut start_time: i64 = 0;

        loop {
            let Some(next) = select_shortest_remaining(&ctx, processes) else {
                close_slice(&mut timeline, processes, current, start_time, ctx.clock);
                match ctx.next_arrival_after(processes) {
                    None => break,
                    Some(arrival) => {
                        debug!("cpu idle from {} until {arrival}", ctx.clock);
                        current = None;
                        start_time = ctx.clock;
                        ctx.clock = arrival;
                        continue;
                    }
                }
            };

            if current != Some(next) {
                close_slice(&mut timeline, processes, current, start_time, ctx.clock);
                if let Some(prev) = current.filter(|&i| ctx.is_unfinished(i)) {
                    debug!(
                        "t={}: {} preempts {} ({} left)",
                        ctx.clock, processes[next].id, processes[prev].id, ctx.remaining[prev]
                    );
                    timing[prev].preempt(ctx.clock);
                }
                timing[next].dispatch(ctx.clock);
                current = Some(next);
                start_time = ctx.clock;
            }

            if ctx.clock >= self.config.max_ticks {
                return Err(SimulationError::TickLimitExceeded {
                    limit: self.config.max_ticks,
                    clock: ctx.clock,
                });
            }

            trace!("t={}: running {}", ctx.clock, processes[next].id);
            ctx.consume(next);
            ctx.clock += 1;
        }

        let rows: Vec<_> = timing
            .iter()
            .zip(processes)
            .map(|(acc, process)| acc.finish(process))
            .collect();
        let kpi = ScheduleKpi::calculate(&rows, &timeline, ctx.clock);
        info!(
            "SJF finished {} process(es) at t={} with {} slice(s), avg wait {:.2}",
            rows.len(),
            ctx.clock,
            timeline.len(),
            kpi.average_wait
        );

        Ok(SimulationOutcome {
            algorithm: Algorithm::Sjf,
            timeline,
            rows,
            kpi,
            final_clock: ctx.clock,
        })
    }
}

/// Appends the interval `[start, stop)` for `current` (idle when `None`).
/// Empty intervals are dropped.
fn close_slice(
    timeline: &mut Timeline,
    processes: &[Process],
    current: Option<usize>,
    start: i64,
    stop: i64,
) {
    if stop <= start {
        return;
    }
    match current {
        Some(i) => timeline.push(Timeslice::new(&processes[i].id, start, stop)),
        None => timeline.push(Timeslice::idle(start, stop)),
    }
}
