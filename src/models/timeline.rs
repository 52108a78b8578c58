//! Gantt timeline model.
//!
//! A timeline is the ordered sequence of execution intervals produced
//! by one simulation run. Consecutive slices share a boundary: the
//! stop of one slice is the start of the next, and the first slice
//! starts at t=0.
//!
//! Gaps where no process had arrived yet are recorded as idle slices,
//! so contiguity holds for every workload.

use serde::{Deserialize, Serialize};

/// Process id reported for idle slices.
pub const IDLE_ID: &str = "IDLE";

/// One execution interval `[start_time, stop_time)` on the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeslice {
    /// Process that occupied the CPU (`IDLE` for idle slices).
    pub process_id: String,
    /// Start of the interval.
    pub start_time: i64,
    /// End of the interval (exclusive).
    pub stop_time: i64,
    /// Whether the CPU was idle during this interval.
    #[serde(default)]
    pub idle: bool,
}

impl Timeslice {
    /// Creates a slice for a running process.
    pub fn new(process_id: impl Into<String>, start_time: i64, stop_time: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start_time,
            stop_time,
            idle: false,
        }
    }

    /// Creates an idle slice.
    pub fn idle(start_time: i64, stop_time: i64) -> Self {
        Self {
            process_id: IDLE_ID.to_string(),
            start_time,
            stop_time,
            idle: true,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop_time - self.start_time
    }
}

/// Ordered, contiguous sequence of [`Timeslice`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in execution order.
    pub slices: Vec<Timeslice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: Timeslice) {
        debug_assert!(slice.start_time <= slice.stop_time);
        self.slices.push(slice);
    }

    /// Number of slices (idle included).
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether the timeline has no slices.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Iterates over the slices in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Timeslice> {
        self.slices.iter()
    }

    /// Stop time of the last slice, or 0.
    pub fn makespan(&self) -> i64 {
        self.slices.last().map(|s| s.stop_time).unwrap_or(0)
    }

    /// Total time the CPU spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.slices
            .iter()
            .filter(|s| !s.idle)
            .map(Timeslice::duration)
            .sum()
    }

    /// Total idle time.
    pub fn idle_time(&self) -> i64 {
        self.slices
            .iter()
            .filter(|s| s.idle)
            .map(Timeslice::duration)
            .sum()
    }

    /// Whether the timeline starts at 0 and has no gaps or overlaps.
    ///
    /// An empty timeline is trivially contiguous.
    pub fn is_contiguous(&self) -> bool {
        match self.slices.first() {
            None => true,
            Some(first) if first.start_time != 0 => false,
            Some(_) => self
                .slices
                .windows(2)
                .all(|w| w[0].stop_time == w[1].start_time),
        }
    }

    /// All slices run by the given process.
    pub fn slices_for(&self, process_id: &str) -> Vec<&Timeslice> {
        self.slices
            .iter()
            .filter(|s| !s.idle && s.process_id == process_id)
            .collect()
    }

    /// Boundaries as `(process_id, start, stop)` tuples, idle included.
    pub fn as_tuples(&self) -> Vec<(&str, i64, i64)> {
        self.slices
            .iter()
            .map(|s| (s.process_id.as_str(), s.start_time, s.stop_time))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Timeslice;
    type IntoIter = std::slice::Iter<'a, Timeslice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}
