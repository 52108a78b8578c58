//! Simulation domain models.
//!
//! Provides the data types shared by every scheduling engine: the
//! input workload, the Gantt timeline produced by a run, and the
//! per-process timing rows.
//!
//! # Domain Mappings
//!
//! | sched-sim | Textbook term | Job-shop analogue |
//! |-----------|---------------|-------------------|
//! | Process | Process / job | Task |
//! | Timeslice | Gantt bar | Assignment |
//! | Timeline | Gantt chart | Schedule |
//! | ProcessMetrics | Timing table row | Task KPI |

mod process;
mod timeline;
mod timing;

pub use process::Process;
pub use timeline::{Timeline, Timeslice, IDLE_ID};
pub use timing::{ProcessMetrics, TimingAccumulator};
