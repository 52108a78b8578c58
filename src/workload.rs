//! Synthetic workload generation.
//!
//! Produces random but reproducible process lists for demonstrations
//! and property-style tests. Ids are `P1..Pn` and the result is sorted
//! by arrival, so it can be fed to either engine directly.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::models::Process;

/// Parameters of a random workload.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sched_sim::workload::WorkloadGenerator;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let procs = WorkloadGenerator::new(5).with_burst_range(1, 4).generate(&mut rng);
/// assert_eq!(procs.len(), 5);
/// assert!(procs.iter().all(|p| (1..=4).contains(&p.burst_duration)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Inclusive arrival time bounds.
    pub arrival: (i64, i64),
    /// Inclusive burst duration bounds.
    pub burst: (i64, i64),
    /// Inclusive priority bounds.
    pub priority: (i64, i64),
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default bounds.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival: (0, 10),
            burst: (1, 10),
            priority: (1, 5),
        }
    }

    /// Sets the arrival time bounds.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.arrival = (min, max);
        self
    }

    /// Sets the burst duration bounds.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst = (min, max);
        self
    }

    /// Sets the priority bounds.
    pub fn with_priority_range(mut self, min: i64, max: i64) -> Self {
        self.priority = (min, max);
        self
    }

    /// Generates a workload sorted by arrival time.
    ///
    /// Bounds given in reverse order are swapped.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let arrival = ordered(self.arrival);
        let burst = ordered(self.burst);
        let priority = ordered(self.priority);

        let mut processes: Vec<Process> = (1..=self.count)
            .map(|n| {
                Process::new(format!("P{n}"))
                    .with_arrival(rng.random_range(arrival.clone()))
                    .with_burst(rng.random_range(burst.clone()))
                    .with_priority(rng.random_range(priority.clone()))
            })
            .collect();

        // Stable: equal arrivals keep id order.
        processes.sort_by_key(|p| p.arrival_time);
        processes
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(5)
    }
}

fn ordered((a, b): (i64, i64)) -> RangeInclusive<i64> {
    if a <= b {
        a..=b
    } else {
        b..=a
    }
}
