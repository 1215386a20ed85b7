//! Flower pollination metaheuristic for task-to-resource assignment.
//!
//! Assigns a fixed set of compute tasks to a fixed set of processing
//! resources, minimizing a weighted combination of makespan, execution
//! cost, and a reliability term. The search is population-based: candidate
//! assignments ("flowers") are recombined by single-split pollination,
//! repaired back to a valid one-task-one-resource partition, and kept
//! greedily when they improve.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Resource`, and the
//!   `ExecutionEnvironment` capability contract supplied by the host
//! - **`fpa`**: The optimizer — `Flower`, pollination, repair, fitness,
//!   and the `FlowerPollination` search loop
//! - **`validation`**: Input integrity checks (empty inputs, non-positive
//!   speeds, non-dense task identifiers)
//!
//! # References
//!
//! - Yang (2012), "Flower Pollination Algorithm for Global Optimization"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod fpa;
pub mod models;
pub mod validation;
