//! Flower-pollination assignment optimizer.
//!
//! Implements a population-based search over task-to-resource
//! assignments. Each candidate (a [`Flower`]) partitions task ids across
//! per-resource buckets. Generations recombine candidates by single-split
//! pollination, repair the partition invariant, and keep improvements
//! greedily at both the candidate and the global-best level.
//!
//! # Pipeline
//!
//! Every pollination call produces a child that may violate the
//! one-task-one-resource invariant; [`repair`] must run before the child
//! is evaluated or bred again. [`FlowerPollination::run`] applies the
//! operators in that order for a fixed number of generations.
//!
//! # Submodules
//!
//! - `flower`: candidate representation and the pollination operator
//! - `fitness`: weighted makespan + cost + reliability evaluator
//! - `repair`: duplicate and unassigned-task resolution
//! - `search`: population management and the generation loop
//!
//! # Reference
//! Yang (2012), "Flower Pollination Algorithm for Global Optimization"

mod fitness;
mod flower;
mod repair;
mod search;

pub use fitness::{FitnessEvaluator, WEIGHTS};
pub use flower::{Flower, pollinate, pollinate_at};
pub use repair::{RepairOutcome, repair};
pub use search::{FlowerPollination, PollinationConfig, PollinationResult};
