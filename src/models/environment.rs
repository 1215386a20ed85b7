//! Host environment capability contract.
//!
//! The optimizer consumes two functions from the execution environment:
//! a per-task/resource execution duration (used by the cost objective)
//! and a failure rate (used by the reliability objective). Both are
//! pluggable so a host simulator can substitute its own accounting.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use super::{Resource, Task};

/// Duration and failure-rate functions supplied by the host environment.
///
/// Implementations must be pure with respect to a single search run:
/// the optimizer calls these repeatedly and assumes identical answers
/// for identical arguments.
pub trait ExecutionEnvironment: Send + Sync + Debug {
    /// Execution duration of `task` on `resource`, in seconds.
    ///
    /// May differ from the plain `length / speed` ratio used for
    /// makespan (e.g., a host that charges file transfer time).
    fn execution_duration(&self, task: &Task, resource: &Resource) -> f64;

    /// Failure rate for a set of assigned task ids on a resource.
    ///
    /// The default is the constant placeholder `1.0`.
    fn failure_rate(&self, _assigned: &[usize], _resource: &Resource) -> f64 {
        1.0
    }
}

/// Default environment: duration is the `length / speed` ratio and the
/// failure rate is the constant `1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleEnvironment;

impl ExecutionEnvironment for SimpleEnvironment {
    fn execution_duration(&self, task: &Task, resource: &Resource) -> f64 {
        task.length as f64 / resource.speed
    }
}
