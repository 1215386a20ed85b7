//! Task model.
//!
//! A task is a unit of work with an instruction-length cost. Tasks are
//! identified by dense indices `0..N-1`; the optimizer's bucket
//! representation indexes by task id, so identifiers must form exactly
//! that range (checked by [`crate::validation::validate_input`]).

use serde::{Deserialize, Serialize};

/// A unit of work to be assigned to a resource.
///
/// `total_length` is an opaque value supplied by the host environment;
/// it may differ from `length` (e.g., when the host accounts for input
/// and output file transfer) and feeds only the reliability term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier, dense in `0..N-1`.
    pub id: usize,
    /// Instruction length (positive).
    pub length: u64,
    /// Total length as reported by the host (defaults to `length`).
    pub total_length: u64,
}

impl Task {
    /// Creates a task with the given id and instruction length.
    pub fn new(id: usize, length: u64) -> Self {
        Self {
            id,
            length,
            total_length: length,
        }
    }

    /// Sets the host-reported total length.
    pub fn with_total_length(mut self, total_length: u64) -> Self {
        self.total_length = total_length;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_defaults_total_length() {
        let t = Task::new(3, 4000);
        assert_eq!(t.id, 3);
        assert_eq!(t.length, 4000);
        assert_eq!(t.total_length, 4000);
    }

    #[test]
    fn test_task_with_total_length() {
        let t = Task::new(0, 1000).with_total_length(1600);
        assert_eq!(t.length, 1000);
        assert_eq!(t.total_length, 1600);
    }
}
