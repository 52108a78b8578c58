//! Process selection for the preemptive engine.
//!
//! Provides the shortest-remaining-time selector and the per-run
//! [`SimulationContext`] it reads from.
//!
//! # Selection Rule
//!
//! A process is eligible when it has arrived (`arrival_time <= clock`)
//! and still has work (`remaining > 0`). Among eligible processes the
//! one with strictly smallest remaining burst wins; ties go to the
//! lowest input index.
//!
//! # Complexity
//! O(n) per call. The engine calls it once per tick, O(n * T) overall
//! where T is the makespan.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

mod context;

pub use context::SimulationContext;

use crate::models::Process;

/// Returns the index of the process that should hold the CPU at
/// `ctx.clock`, or `None` when no process is eligible.
///
/// # Example
/// ```
/// use sched_sim::dispatching::{select_shortest_remaining, SimulationContext};
/// use sched_sim::models::Process;
///
/// let procs = vec![
///     Process::new("P1").with_arrival(0).with_burst(4),
///     Process::new("P2").with_arrival(1).with_burst(2),
/// ];
/// let ctx = SimulationContext::new(&procs);
/// assert_eq!(select_shortest_remaining(&ctx, &procs), Some(0));
/// assert_eq!(select_shortest_remaining(&ctx.at_time(1), &procs), Some(1));
/// ```
pub fn select_shortest_remaining(ctx: &SimulationContext, processes: &[Process]) -> Option<usize> {
    let mut best: Option<usize> = None;

    for (i, process) in processes.iter().enumerate() {
        if !ctx.is_unfinished(i) || !process.has_arrived(ctx.clock) {
            continue;
        }
        match best {
            Some(b) if ctx.remaining[i] >= ctx.remaining[b] => {}
            _ => best = Some(i),
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: &str, arrival: i64, burst: i64) -> Process {
        Process::new(id).with_arrival(arrival).with_burst(burst)
    }

    #[test]
    fn test_picks_shortest_remaining() {
        let procs = vec![p("long", 0, 8), p("short", 0, 2), p("medium", 0, 5)];
        let ctx = SimulationContext::new(&procs);
        assert_eq!(select_shortest_remaining(&ctx, &procs), Some(1));
    }

    #[test]
    fn test_uses_remaining_not_original_burst() {
        let procs = vec![p("A", 0, 6), p("B", 0, 4)];
        let mut ctx = SimulationContext::new(&procs);
        for _ in 0..3 {
            ctx.consume(0);
        }
        // A: 3 left, B: 4 left
        assert_eq!(select_shortest_remaining(&ctx, &procs), Some(0));
    }

    #[test]
    fn test_skips_not_arrived() {
        let procs = vec![p("P1", 0, 5), p("P2", 3, 1)];
        let ctx = SimulationContext::new(&procs).at_time(2);
        assert_eq!(select_shortest_remaining(&ctx, &procs), Some(0));
        let ctx = ctx.at_time(3);
        assert_eq!(select_shortest_remaining(&ctx, &procs), Some(1));
    }

    #[test]
    fn test_first_candidate_must_have_arrived() {
        // The first unfinished process has not arrived; it must not be picked.
        let procs = vec![p("late", 5, 1), p("now", 0, 9)];
        let ctx = SimulationContext::new(&procs);
        assert_eq!(select_shortest_remaining(&ctx, &procs), Some(1));
    }

    #[test]
    fn test_skips_finished() {
        let procs = vec![p("done", 0, 0), p("P2", 0, 3)];
        let ctx = SimulationContext::new(&procs);
        assert_eq!(select_shortest_remaining(&ctx, &procs), Some(1));
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let procs = vec![p("P1", 0, 3), p("P2", 0, 3), p("P3", 0, 3)];
        let ctx = SimulationContext::new(&procs);
        for _ in 0..10 {
            assert_eq!(select_shortest_remaining(&ctx, &procs), Some(0));
        }
    }

    #[test]
    fn test_none_when_nothing_eligible() {
        let procs = vec![p("P1", 4, 2)];
        let ctx = SimulationContext::new(&procs);
        assert_eq!(select_shortest_remaining(&ctx, &procs), None);
        assert_eq!(select_shortest_remaining(&SimulationContext::default(), &[]), None);
    }
}
