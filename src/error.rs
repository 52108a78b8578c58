//! Errors surfaced by simulation runs.

use std::fmt;
use std::io;

use crate::validation::ValidationError;

/// Failure of a simulation run or of writing its report.
#[derive(Debug)]
pub enum SimulationError {
    /// The workload failed validation. Carries every detected problem.
    InvalidInput(Vec<ValidationError>),
    /// The simulated clock would pass the configured limit.
    TickLimitExceeded {
        /// Configured limit.
        limit: i64,
        /// Clock value that hit the limit.
        clock: i64,
    },
    /// Writing the report failed.
    Io(io::Error),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid workload ({} problem(s))", errors.len())?;
                for e in errors {
                    write!(f, "; {}", e.message)?;
                }
                Ok(())
            }
            Self::TickLimitExceeded { limit, clock } => {
                write!(f, "tick limit {limit} exceeded at clock {clock}")
            }
            Self::Io(e) => write!(f, "report output failed: {e}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SimulationError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}
