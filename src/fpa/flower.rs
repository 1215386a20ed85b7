//! Candidate representation and the pollination operator.
//!
//! A [`Flower`] holds one candidate assignment as `M` ordered buckets of
//! task ids, one bucket per resource. Outside the window between
//! pollination and repair, every task id in `0..N` appears in exactly one
//! bucket exactly once. Order within a bucket is insertion order and
//! carries no scheduling priority.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One candidate solution: a partition of task ids across resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flower {
    /// Bucket `r` holds the task ids currently assigned to resource `r`.
    pub buckets: Vec<Vec<usize>>,
}

impl Flower {
    /// Creates a flower with `resource_count` empty buckets.
    pub fn empty(resource_count: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); resource_count],
        }
    }

    /// Number of resource buckets.
    pub fn resource_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of task ids across all buckets (duplicates counted).
    pub fn assigned_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Builds the reverse index: for each task id in `0..task_count`,
    /// the resources that currently claim it, in bucket order.
    ///
    /// Rebuilt fresh on every call; bucket contents mutate during repair
    /// and a cached index would go stale.
    pub fn claimants(&self, task_count: usize) -> Vec<Vec<usize>> {
        let mut index = vec![Vec::new(); task_count];
        for (resource, bucket) in self.buckets.iter().enumerate() {
            for &task in bucket {
                if task < task_count {
                    index[task].push(resource);
                }
            }
        }
        index
    }

    /// Whether every task id in `0..task_count` appears in exactly one
    /// bucket, exactly once.
    pub fn is_valid_partition(&self, task_count: usize) -> bool {
        self.assigned_count() == task_count
            && self
                .claimants(task_count)
                .iter()
                .all(|owners| owners.len() == 1)
    }

    /// Converts the partition into per-task form: entry `i` lists the
    /// resource indices task `i` is assigned to (exactly one element for
    /// a valid partition; empty for a task left unassigned).
    pub fn task_assignments(&self, task_count: usize) -> Vec<Vec<usize>> {
        self.claimants(task_count)
    }
}

/// Single-split bucket crossover at a fixed split index.
///
/// Buckets at indices `<= split` are copied whole from `parent1`, the
/// rest from `parent2`. The child is not guaranteed to be a valid
/// partition; callers must run [`super::repair`] before using it.
pub fn pollinate_at(parent1: &Flower, parent2: &Flower, split: usize) -> Flower {
    let m = parent1.resource_count();
    debug_assert_eq!(m, parent2.resource_count());

    let mut child = Flower::empty(m);
    for i in 0..m {
        if i <= split {
            child.buckets[i] = parent1.buckets[i].clone();
        } else {
            child.buckets[i] = parent2.buckets[i].clone();
        }
    }
    child
}

/// Single-split bucket crossover at a random split index in `[0, M)`.
pub fn pollinate<R: Rng>(parent1: &Flower, parent2: &Flower, rng: &mut R) -> Flower {
    let split = rng.random_range(0..parent1.resource_count());
    pollinate_at(parent1, parent2, split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn parent_pair() -> (Flower, Flower) {
        let p1 = Flower {
            buckets: vec![vec![0, 1], vec![2], vec![3]],
        };
        let p2 = Flower {
            buckets: vec![vec![3], vec![0, 2], vec![1]],
        };
        (p1, p2)
    }

    #[test]
    fn test_empty_flower() {
        let f = Flower::empty(3);
        assert_eq!(f.resource_count(), 3);
        assert_eq!(f.assigned_count(), 0);
        assert!(!f.is_valid_partition(1));
        assert!(f.is_valid_partition(0));
    }

    #[test]
    fn test_claimants_index() {
        let f = Flower {
            buckets: vec![vec![0, 2], vec![2], vec![]],
        };
        let index = f.claimants(4);
        assert_eq!(index[0], vec![0]);
        assert_eq!(index[1], Vec::<usize>::new());
        assert_eq!(index[2], vec![0, 1]);
        assert_eq!(index[3], Vec::<usize>::new());
    }

    #[test]
    fn test_valid_partition() {
        let (p1, _) = parent_pair();
        assert!(p1.is_valid_partition(4));
        // Duplicate task 0
        let dup = Flower {
            buckets: vec![vec![0, 1], vec![0], vec![2, 3]],
        };
        assert!(!dup.is_valid_partition(4));
        // Missing task 3
        let missing = Flower {
            buckets: vec![vec![0, 1], vec![2], vec![]],
        };
        assert!(!missing.is_valid_partition(4));
    }

    #[test]
    fn test_pollinate_at_splits_exactly() {
        let (p1, p2) = parent_pair();

        let child = pollinate_at(&p1, &p2, 1);
        assert_eq!(child.buckets[0], p1.buckets[0]);
        assert_eq!(child.buckets[1], p1.buckets[1]);
        assert_eq!(child.buckets[2], p2.buckets[2]);

        // Split at M-1 copies parent 1 entirely
        let child = pollinate_at(&p1, &p2, 2);
        assert_eq!(child.buckets, p1.buckets);

        // Split 0 keeps only parent 1's first bucket
        let child = pollinate_at(&p1, &p2, 0);
        assert_eq!(child.buckets[0], p1.buckets[0]);
        assert_eq!(child.buckets[1], p2.buckets[1]);
        assert_eq!(child.buckets[2], p2.buckets[2]);
    }

    #[test]
    fn test_pollinate_preserves_bucket_count() {
        let (p1, p2) = parent_pair();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let child = pollinate(&p1, &p2, &mut rng);
            assert_eq!(child.resource_count(), 3);
        }
    }

    #[test]
    fn test_task_assignments_shape() {
        let (p1, _) = parent_pair();
        let answer = p1.task_assignments(4);
        assert_eq!(answer, vec![vec![0], vec![0], vec![1], vec![2]]);
    }
}
