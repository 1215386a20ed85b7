//! Input validation for assignment problems.
//!
//! Checks structural integrity of tasks and resources before the search
//! begins. Detects:
//! - Empty task or resource lists
//! - Non-positive resource speeds (division by zero in every objective)
//! - Negative cost rates
//! - Task identifiers that are not exactly `0..N-1`
//! - Zero-length tasks
//!
//! The optimizer indexes its buckets by task id, so identifier density
//! is a hard precondition, not a style preference.

use crate::models::{Resource, Task};

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
    /// No tasks were supplied.
    EmptyTaskList,
    /// No resources were supplied.
    EmptyResourceList,
    /// A resource has speed <= 0.
    NonPositiveSpeed,
    /// A resource has a negative cost rate.
    NegativeCostRate,
    /// Task ids are not exactly the dense range 0..N-1.
    NonDenseTaskIds,
    /// A task has zero instruction length.
    ZeroLengthTask,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for an assignment problem.
///
/// Checks:
/// 1. At least one task and one resource
/// 2. Every resource speed is strictly positive
/// 3. No resource has a negative cost rate
/// 4. Task ids form exactly the dense range `0..N-1`, in position order
/// 5. Every task has a positive instruction length
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(tasks: &[Task], resources: &[Resource]) -> ValidationResult {
    let mut errors = Vec::new();

    if tasks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTaskList,
            "At least one task is required",
        ));
    }
    if resources.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyResourceList,
            "At least one resource is required",
        ));
    }

    for r in resources {
        if r.speed <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveSpeed,
                format!("Resource {} has non-positive speed {}", r.id, r.speed),
            ));
        }
        if r.cost_rate < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeCostRate,
                format!("Resource {} has negative cost rate {}", r.id, r.cost_rate),
            ));
        }
    }

    // Buckets hold ids and the optimizer indexes the task slice by id,
    // so task i must sit at position i.
    if tasks.iter().enumerate().any(|(i, t)| t.id != i) {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonDenseTaskIds,
            format!(
                "Task ids must be exactly 0..{} and match their position",
                tasks.len()
            ),
        ));
    }

    for t in tasks {
        if t.length == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroLengthTask,
                format!("Task {} has zero instruction length", t.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
