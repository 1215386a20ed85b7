//! Resource model.
//!
//! A resource is a processing unit with a speed (instructions/second)
//! and an economic cost rate. Resources are identified by dense indices
//! `0..M-1` matching their position in the caller's resource list.

use serde::{Deserialize, Serialize};

/// A processing unit that tasks can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier, dense in `0..M-1`.
    pub id: usize,
    /// Processing speed in instructions per second (positive).
    pub speed: f64,
    /// Economic cost per instruction-second (non-negative, default 0).
    pub cost_rate: f64,
}

impl Resource {
    /// Creates a resource with the given id and processing speed.
    pub fn new(id: usize, speed: f64) -> Self {
        Self {
            id,
            speed,
            cost_rate: 0.0,
        }
    }

    /// Sets the cost rate.
    pub fn with_cost_rate(mut self, cost_rate: f64) -> Self {
        self.cost_rate = cost_rate;
        self
    }
}
