//! Multi-objective fitness evaluator.
//!
//! Scores a candidate as `w1 * makespan + w2 * cost + w3 * reliability`
//! with fixed weights `(0.5, 0.2, 0.3)`. Lower is better.
//!
//! The reliability term is `exp(-x)` per resource, summed, and *added*
//! to the minimized score, so a resource whose term sits closer to 1
//! (more reliable under the usual reading) raises the score. This is the
//! model's defined behavior, kept as-is; see DESIGN.md.

use crate::models::{ExecutionEnvironment, Resource, Task};

use super::Flower;

/// Objective weights: makespan, cost, reliability.
pub const WEIGHTS: [f64; 3] = [0.5, 0.2, 0.3];

/// Computes the scalar quality of a [`Flower`] (lower = better).
///
/// Borrows the run's tasks, resources, and host environment; evaluation
/// is a pure function of the flower's current bucket contents, so
/// calling it twice on an unmutated candidate yields identical scores.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    tasks: &'a [Task],
    resources: &'a [Resource],
    env: &'a dyn ExecutionEnvironment,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator over the run's inputs.
    pub fn new(
        tasks: &'a [Task],
        resources: &'a [Resource],
        env: &'a dyn ExecutionEnvironment,
    ) -> Self {
        Self {
            tasks,
            resources,
            env,
        }
    }

    /// Weighted multi-objective score of a candidate.
    pub fn evaluate(&self, flower: &Flower) -> f64 {
        let mut cost_total = 0.0;
        let mut reliability_total = 0.0;
        for (i, resource) in self.resources.iter().enumerate() {
            let bucket = &flower.buckets[i];
            cost_total += self.execution_cost(bucket, resource);
            reliability_total += self.reliability(bucket, resource);
        }
        WEIGHTS[0] * self.makespan(flower) + WEIGHTS[1] * cost_total + WEIGHTS[2] * reliability_total
    }

    /// Completion time of the slowest-finishing resource.
    ///
    /// Per resource: sum of assigned instruction lengths divided by
    /// speed. A resource with no assigned tasks contributes 0.
    pub fn makespan(&self, flower: &Flower) -> f64 {
        self.resources
            .iter()
            .enumerate()
            .map(|(i, resource)| {
                let total_length: u64 = flower.buckets[i]
                    .iter()
                    .map(|&t| self.tasks[t].length)
                    .sum();
                total_length as f64 / resource.speed
            })
            .fold(0.0, f64::max)
    }

    /// Monetary cost of a bucket: host-supplied execution duration times
    /// the resource's cost rate, summed over assigned tasks.
    fn execution_cost(&self, bucket: &[usize], resource: &Resource) -> f64 {
        bucket
            .iter()
            .map(|&t| self.env.execution_duration(&self.tasks[t], resource) * resource.cost_rate)
            .sum()
    }

    /// Reliability term of a bucket:
    /// `exp(-Σ (total_length / speed) * failure_rate)`.
    fn reliability(&self, bucket: &[usize], resource: &Resource) -> f64 {
        let sum: f64 = bucket
            .iter()
            .map(|&t| {
                (self.tasks[t].total_length as f64 / resource.speed)
                    * self.env.failure_rate(bucket, resource)
            })
            .sum();
        (-sum).exp()
    }
}
