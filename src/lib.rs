//! CPU scheduling simulator.
//!
//! Simulates how a single CPU would serve a fixed, fully known workload
//! of processes under a scheduling policy, and reports the Gantt
//! timeline, per-process timing and aggregate metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Timeslice`, `Timeline`,
//!   `TimingAccumulator`, `ProcessMetrics`
//! - **`dispatching`**: Shortest-remaining-time selection over a per-run
//!   `SimulationContext`
//! - **`scheduler`**: `SjfScheduler` (preemptive), `FcfsScheduler`,
//!   `ScheduleKpi`
//! - **`report`**: Plain-text Gantt chart and timing table
//! - **`validation`**: Input integrity checks (duplicate IDs, negative times)
//! - **`workload`**: Seedable synthetic workloads
//! - **`config`**, **`error`**: Run settings and failure types
//!
//! # Example
//!
//! ```
//! use sched_sim::{sjf_schedule, models::Process};
//!
//! let procs = vec![
//!     Process::new("P1").with_arrival(0).with_burst(4),
//!     Process::new("P2").with_arrival(1).with_burst(2),
//! ];
//! let mut out = Vec::new();
//! sjf_schedule(&mut out, "Shortest-job-first", &procs).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("Gantt schedule"));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;

use std::io::Write;

use config::SimulationConfig;
use models::Process;
use scheduler::Algorithm;

/// Runs first-come-first-served over `processes` and writes the report to `w`.
pub fn fcfs_schedule<W: Write>(
    w: &mut W,
    title: &str,
    processes: &[Process],
) -> Result<(), SimulationError> {
    schedule_and_report(Algorithm::Fcfs, w, title, processes)
}

/// Runs preemptive shortest-job-first over `processes` and writes the report to `w`.
pub fn sjf_schedule<W: Write>(
    w: &mut W,
    title: &str,
    processes: &[Process],
) -> Result<(), SimulationError> {
    schedule_and_report(Algorithm::Sjf, w, title, processes)
}

fn schedule_and_report<W: Write>(
    algorithm: Algorithm,
    w: &mut W,
    title: &str,
    processes: &[Process],
) -> Result<(), SimulationError> {
    let outcome = algorithm.run(&SimulationConfig::default(), processes)?;
    report::write_report(w, title, &outcome)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn sample() -> Vec<Process> {
        vec![
            Process::new("P1").with_arrival(0).with_burst(5),
            Process::new("P2").with_arrival(1).with_burst(3),
        ]
    }

    #[test]
    fn test_fcfs_schedule_writes_report() {
        let mut out = Vec::new();
        fcfs_schedule(&mut out, "First-come, first-serve", &sample()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("First-come, first-serve"));
        assert!(text.contains("|   P1   |   P2   |"));
    }

    #[test]
    fn test_sjf_schedule_writes_report() {
        let mut out = Vec::new();
        sjf_schedule(&mut out, "Shortest-job-first", &sample()).unwrap();
        let text = String::from_utf8(out).unwrap();
        // P2 (3) is shorter than P1's remaining 4 at t=1.
        assert!(text.contains("|   P1   |   P2   |   P1   |"));
    }

    #[test]
    fn test_invalid_input_writes_nothing() {
        let procs = vec![Process::new("P1").with_arrival(-5).with_burst(1)];
        let mut out = Vec::new();
        let err = sjf_schedule(&mut out, "bad", &procs).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput(_)));
        assert!(out.is_empty());
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_error_propagates() {
        let err = fcfs_schedule(&mut FailingSink, "t", &sample()).unwrap_err();
        assert!(matches!(err, SimulationError::Io(_)));
    }

    #[test]
    fn test_independent_runs_on_threads() {
        let procs = sample();
        let expected = Algorithm::Sjf
            .run(&SimulationConfig::default(), &procs)
            .unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| Algorithm::Sjf.run(&SimulationConfig::default(), &procs)))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap().unwrap(), expected);
            }
        });
    }
}
