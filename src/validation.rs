//! Input validation for simulation workloads.
//!
//! Checks structural integrity of a process list before it reaches an
//! engine. Detects:
//! - Duplicate process IDs
//! - Empty process IDs
//! - Negative arrival times
//! - Negative burst durations
//!
//! Engines assume validated input; running them on a workload that
//! fails these checks is rejected up front instead of corrupting metrics.

use crate::models::Process;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty ID.
    EmptyId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process has a negative burst duration.
    NegativeBurst,
}

impl ValidationError {
    /// Creates an error of the given kind.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a workload.
///
/// Checks:
/// 1. No empty process IDs
/// 2. No duplicate process IDs
/// 3. All arrival times are non-negative
/// 4. All burst durations are non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Process with empty ID",
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_duration < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeBurst,
                format!(
                    "Process '{}' has negative burst duration {}",
                    p.id, p.burst_duration
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether processes are listed in non-decreasing arrival order.
pub fn is_sorted_by_arrival(processes: &[Process]) -> bool {
    processes
        .windows(2)
        .all(|w| w[0].arrival_time <= w[1].arrival_time)
}
