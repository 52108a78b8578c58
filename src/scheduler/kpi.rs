//! Aggregate performance metrics (KPIs).
//!
//! Computes the summary figures printed under the timing table from
//! the per-process rows and the timeline of a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Wait | sum(wait) / n |
//! | Average Turnaround | sum(turnaround) / n |
//! | Throughput | n / horizon |
//! | Makespan | Stop time of the last timeslice |
//! | CPU Utilization | busy time / makespan |
//!
//! The throughput horizon is chosen by the engine: FCFS uses the last
//! computed completion time, SJF the final clock value.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{ProcessMetrics, Timeline};

/// Aggregate figures of one simulation run.
///
/// Every figure is 0.0 when its denominator is zero (empty workload or
/// zero-length horizon).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Mean wait time.
    pub average_wait: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Processes completed per time unit.
    pub throughput: f64,
    /// Stop time of the last timeslice.
    pub makespan: i64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from timing rows and a timeline.
    ///
    /// # Arguments
    /// * `rows` - One row per simulated process.
    /// * `timeline` - The run's Gantt timeline.
    /// * `throughput_horizon` - Time span the throughput is measured over.
    pub fn calculate(rows: &[ProcessMetrics], timeline: &Timeline, throughput_horizon: i64) -> Self {
        let count = rows.len() as f64;
        let total_wait: i64 = rows.iter().map(|r| r.wait_time).sum();
        let total_turnaround: i64 = rows.iter().map(|r| r.turnaround_time).sum();

        let (average_wait, average_turnaround) = if rows.is_empty() {
            (0.0, 0.0)
        } else {
            (total_wait as f64 / count, total_turnaround as f64 / count)
        };

        let throughput = if throughput_horizon <= 0 {
            0.0
        } else {
            count / throughput_horizon as f64
        };

        let makespan = timeline.makespan();
        let cpu_utilization = if makespan <= 0 {
            0.0
        } else {
            timeline.busy_time() as f64 / makespan as f64
        };

        Self {
            average_wait,
            average_turnaround,
            throughput,
            makespan,
            cpu_utilization,
        }
    }
}
