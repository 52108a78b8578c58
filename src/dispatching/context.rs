//! Per-run simulation state passed to the selector.

use crate::models::Process;

/// Working copy of a workload for one simulation run.
///
/// Holds the simulated clock and the remaining burst of every process,
/// indexed like the input slice. Created fresh per run; the caller's
/// processes are never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationContext {
    /// Current simulated time.
    pub clock: i64,
    /// Remaining CPU time per process.
    pub remaining: Vec<i64>,
}

impl SimulationContext {
    /// Creates a context at t=0 with every process's full burst remaining.
    pub fn new(processes: &[Process]) -> Self {
        Self {
            clock: 0,
            remaining: processes.iter().map(|p| p.burst_duration).collect(),
        }
    }

    /// Sets the clock.
    pub fn at_time(mut self, clock: i64) -> Self {
        self.clock = clock;
        self
    }

    /// Whether process `index` still needs CPU time.
    #[inline]
    pub fn is_unfinished(&self, index: usize) -> bool {
        self.remaining[index] > 0
    }

    /// Consumes one time unit of process `index`.
    pub fn consume(&mut self, index: usize) {
        debug_assert!(self.remaining[index] > 0);
        self.remaining[index] -= 1;
    }

    /// Earliest arrival strictly after the clock among unfinished processes.
    pub fn next_arrival_after(&self, processes: &[Process]) -> Option<i64> {
        processes
            .iter()
            .enumerate()
            .filter(|&(i, p)| self.is_unfinished(i) && p.arrival_time > self.clock)
            .map(|(_, p)| p.arrival_time)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new("P1").with_arrival(0).with_burst(2),
            Process::new("P2").with_arrival(4).with_burst(1),
            Process::new("P3").with_arrival(6).with_burst(0),
        ]
    }

    #[test]
    fn test_working_copy() {
        let procs = sample();
        let mut ctx = SimulationContext::new(&procs);
        ctx.consume(0);
        assert_eq!(ctx.remaining, vec![1, 1, 0]);
        assert_eq!(procs[0].burst_duration, 2);
        assert!(ctx.is_unfinished(0));
        ctx.consume(0);
        assert!(!ctx.is_unfinished(0));
    }

    #[test]
    fn test_next_arrival_after() {
        let procs = sample();
        let ctx = SimulationContext::new(&procs).at_time(2);
        // P3 has no work, so only P2 counts.
        assert_eq!(ctx.next_arrival_after(&procs), Some(4));

        let ctx = ctx.at_time(4);
        assert_eq!(ctx.next_arrival_after(&procs), None);
    }
}
