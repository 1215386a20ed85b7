//! Population management and the generation loop.
//!
//! [`FlowerPollination`] owns the population for the lifetime of a run.
//! Initialization seeds one sparse base flower per task, diversifies
//! each by pollinating it against a random partner, and repairs the
//! result. The improvement loop then runs a fixed number of generations:
//! each candidate is perturbed by local pollination (cyclic successor)
//! or global pollination (current best), repaired, and kept greedily.
//!
//! The loop is single-threaded by design: a candidate late in a
//! generation may pollinate against a global best replaced earlier in
//! the same generation, and that sequential dependency is part of the
//! algorithm's behavior.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::models::{ExecutionEnvironment, Resource, Task};
use crate::validation::{validate_input, ValidationError};

use super::{pollinate, repair, FitnessEvaluator, Flower};

/// Search parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollinationConfig {
    /// Number of improvement generations (default: 100).
    pub generations: usize,
    /// Probability of local pollination per candidate (default: 0.8);
    /// otherwise the candidate pollinates with the global best.
    pub switch_probability: f64,
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for PollinationConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            switch_probability: 0.8,
            seed: None,
        }
    }
}

impl PollinationConfig {
    /// Sets the generation count.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the local-pollination probability (clamped to 0.0..=1.0).
    pub fn with_switch_probability(mut self, probability: f64) -> Self {
        self.switch_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Sets the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Outcome of a completed search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollinationResult {
    /// Entry `i` lists the resource index task `i` was assigned to
    /// (one element per task; empty if the task was left unassigned).
    pub assignments: Vec<Vec<usize>>,
    /// Fitness of the emitted global best.
    pub best_fitness: f64,
    /// Fitness of the global best right after initialization.
    pub initial_best_fitness: f64,
    /// Global-best fitness at the end of each generation.
    pub best_fitness_history: Vec<f64>,
    /// Tasks without a resource in the emitted best (0 for a complete
    /// schedule; non-zero surfaces an incomplete repair).
    pub unassigned: usize,
    /// Number of generations run.
    pub generations: usize,
}

/// Flower-pollination search over task-to-resource assignments.
///
/// # Example
/// ```
/// use fpa_schedule::fpa::{FlowerPollination, PollinationConfig};
/// use fpa_schedule::models::{Resource, SimpleEnvironment, Task};
///
/// let tasks: Vec<Task> = (0..4).map(|i| Task::new(i, 1000)).collect();
/// let resources = vec![
///     Resource::new(0, 250.0).with_cost_rate(0.5),
///     Resource::new(1, 500.0).with_cost_rate(1.0),
/// ];
/// let env = SimpleEnvironment;
/// let config = PollinationConfig::default().with_generations(10).with_seed(42);
///
/// let search = FlowerPollination::new(&tasks, &resources, &env, config).unwrap();
/// let result = search.run();
/// assert_eq!(result.assignments.len(), 4);
/// ```
#[derive(Debug)]
pub struct FlowerPollination<'a> {
    tasks: &'a [Task],
    resources: &'a [Resource],
    evaluator: FitnessEvaluator<'a>,
    config: PollinationConfig,
}

impl<'a> FlowerPollination<'a> {
    /// Creates a search over the given inputs, failing fast on
    /// precondition violations (empty inputs, non-positive speeds,
    /// non-dense task ids).
    pub fn new(
        tasks: &'a [Task],
        resources: &'a [Resource],
        env: &'a dyn ExecutionEnvironment,
        config: PollinationConfig,
    ) -> Result<Self, Vec<ValidationError>> {
        validate_input(tasks, resources)?;
        Ok(Self {
            tasks,
            resources,
            evaluator: FitnessEvaluator::new(tasks, resources, env),
            config,
        })
    }

    /// Runs the search to completion and emits the global best as a
    /// per-task assignment list.
    pub fn run(self) -> PollinationResult {
        let n = self.tasks.len();
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let mut population = self.create_population(&mut rng);
        let mut fitness: Vec<f64> = population
            .iter()
            .map(|f| self.evaluator.evaluate(f))
            .collect();

        // Initial global best: lowest score, first-seen on ties.
        let mut best_index = 0;
        for (i, &score) in fitness.iter().enumerate() {
            if score < fitness[best_index] {
                best_index = i;
            }
        }
        let mut best = population[best_index].clone();
        let initial_best_fitness = fitness[best_index];
        debug!(best_index, initial_best_fitness, "population initialized");

        let mut history = Vec::with_capacity(self.config.generations);
        for generation in 0..self.config.generations {
            for j in 0..n {
                let mut child = if rng.random::<f64>() <= self.config.switch_probability {
                    // Local pollination with the cyclic successor.
                    pollinate(&population[j], &population[(j + 1) % n], &mut rng)
                } else {
                    // Global pollination with the current best.
                    pollinate(&population[j], &best, &mut rng)
                };
                repair(&mut child, self.tasks, self.resources);
                let child_fitness = self.evaluator.evaluate(&child);

                if child_fitness < fitness[j] {
                    population[j] = child.clone();
                    fitness[j] = child_fitness;
                }

                // The best may have been replaced earlier in this same
                // generation, so its score is recomputed fresh.
                if child_fitness < self.evaluator.evaluate(&best) {
                    trace!(
                        generation,
                        candidate = j,
                        fitness = child_fitness,
                        "global best improved"
                    );
                    best = child;
                }
            }
            history.push(self.evaluator.evaluate(&best));
        }

        let best_fitness = self.evaluator.evaluate(&best);
        let assignments = best.task_assignments(n);
        let unassigned = assignments.iter().filter(|owners| owners.is_empty()).count();
        debug!(
            best_fitness,
            unassigned,
            generations = self.config.generations,
            "search converged"
        );

        PollinationResult {
            assignments,
            best_fitness,
            initial_best_fitness,
            best_fitness_history: history,
            unassigned,
            generations: self.config.generations,
        }
    }

    /// Builds the initial population: N flowers, each seeded with a
    /// single random placement of its own task, then diversified by
    /// pollination against a random distinct partner and repaired.
    fn create_population<R: Rng>(&self, rng: &mut R) -> Vec<Flower> {
        let n = self.tasks.len();
        let m = self.resources.len();
        let mut population = vec![Flower::empty(m); n];

        for (i, flower) in population.iter_mut().enumerate() {
            let bucket = rng.random_range(0..m);
            flower.buckets[bucket].push(self.tasks[i].id);
        }

        // A single-candidate population has no distinct partner to
        // diversify against; its lone base flower is already valid.
        if n > 1 {
            for i in 0..n {
                let partner = loop {
                    let p = rng.random_range(0..n);
                    if p != i {
                        break p;
                    }
                };
                let mut child = pollinate(&population[i], &population[partner], rng);
                repair(&mut child, self.tasks, self.resources);
                population[i] = child;
            }
        }

        population
    }
}
