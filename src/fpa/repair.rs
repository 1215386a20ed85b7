//! Feasibility repair for freshly pollinated candidates.
//!
//! Pollination copies whole buckets from two parents, so a child may
//! claim a task twice or not at all. Repair mutates the child in place:
//! duplicates are removed from the claimant with the higher current
//! execution duration, and unassigned tasks go to the least-loaded
//! resource with remaining capacity (`floor(N/M) + 1` per bucket).
//!
//! Duplicate resolution compares only the first two claimants; a task
//! claimed by three or more resources keeps its extra copies. This is
//! the defined behavior, pinned by a boundary test (see DESIGN.md).

use tracing::trace;

use crate::models::{Resource, Task};

use super::Flower;

/// Diagnostics from one repair pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairOutcome {
    /// Tasks that had more than one claimant.
    pub duplicates_resolved: usize,
    /// Tasks left unassigned because every resource was at capacity.
    pub unassigned: usize,
}

/// Restores the one-task-one-resource invariant on `flower` in place.
///
/// The claimant index is built once up front; duplicate removal only
/// touches the duplicated task's own buckets, so other tasks' claimant
/// lists stay accurate. Load snapshots are recomputed per resolution
/// since each removal or addition changes bucket loads.
pub fn repair(flower: &mut Flower, tasks: &[Task], resources: &[Resource]) -> RepairOutcome {
    let n = tasks.len();
    let m = resources.len();
    let capacity = n / m + 1;
    let index = flower.claimants(n);
    let mut outcome = RepairOutcome::default();

    for task in 0..n {
        if index[task].len() > 1 {
            resolve_duplicate(flower, task, &index[task], tasks, resources);
            outcome.duplicates_resolved += 1;
        }
    }

    for task in 0..n {
        if index[task].is_empty() && !assign_unassigned(flower, task, tasks, resources, capacity) {
            trace!(task, capacity, "no resource below capacity; task left unassigned");
            outcome.unassigned += 1;
        }
    }

    outcome
}

/// Per-resource load snapshot: `(resource id, current execution duration)`
/// where duration is the bucket's total instruction length over speed.
fn execution_times(flower: &Flower, tasks: &[Task], resources: &[Resource]) -> Vec<(usize, f64)> {
    resources
        .iter()
        .enumerate()
        .map(|(i, resource)| {
            let total_length: u64 = flower.buckets[i].iter().map(|&t| tasks[t].length).sum();
            (i, total_length as f64 / resource.speed)
        })
        .collect()
}

/// Removes `task` from whichever of the first two claimants currently
/// has the higher execution duration; ties remove from the first-listed.
fn resolve_duplicate(
    flower: &mut Flower,
    task: usize,
    claimants: &[usize],
    tasks: &[Task],
    resources: &[Resource],
) {
    let times = execution_times(flower, tasks, resources);
    let (first, second) = (claimants[0], claimants[1]);
    let loser = if times[first].1 >= times[second].1 {
        first
    } else {
        second
    };
    if let Some(pos) = flower.buckets[loser].iter().position(|&t| t == task) {
        flower.buckets[loser].remove(pos);
    }
}

/// Assigns `task` to the least-loaded resource whose bucket is below
/// `capacity`. Returns `false` when every resource is at capacity.
fn assign_unassigned(
    flower: &mut Flower,
    task: usize,
    tasks: &[Task],
    resources: &[Resource],
    capacity: usize,
) -> bool {
    let mut times = execution_times(flower, tasks, resources);
    // Stable sort: equal durations keep resource-id order.
    times.sort_by(|a, b| a.1.total_cmp(&b.1));

    for &(resource, _) in &times {
        if flower.buckets[resource].len() < capacity {
            flower.buckets[resource].push(task);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fpa::pollinate_at;

    fn uniform_tasks(n: usize, length: u64) -> Vec<Task> {
        (0..n).map(|i| Task::new(i, length)).collect()
    }

    fn uniform_resources(m: usize, speed: f64) -> Vec<Resource> {
        (0..m).map(|i| Resource::new(i, speed)).collect()
    }

    #[test]
    fn test_duplicate_removed_from_higher_duration_claimant() {
        let tasks = uniform_tasks(4, 10);
        let resources = uniform_resources(2, 10.0);
        // Resource 0 carries more load, so it loses the duplicate of task 3.
        let mut flower = Flower {
            buckets: vec![vec![0, 1, 3], vec![2, 3]],
        };

        let outcome = repair(&mut flower, &tasks, &resources);
        assert_eq!(outcome.duplicates_resolved, 1);
        assert_eq!(flower.buckets[0], vec![0, 1]);
        assert_eq!(flower.buckets[1], vec![2, 3]);
        assert!(flower.is_valid_partition(4));
    }

    #[test]
    fn test_duplicate_tie_removes_first_listed_claimant() {
        let tasks = uniform_tasks(3, 10);
        let resources = uniform_resources(2, 10.0);
        // Equal loads: the first-listed claimant (resource 0) loses task 0.
        let mut flower = Flower {
            buckets: vec![vec![0, 1], vec![0, 2]],
        };

        repair(&mut flower, &tasks, &resources);
        assert_eq!(flower.buckets[0], vec![1]);
        assert_eq!(flower.buckets[1], vec![0, 2]);
        assert!(flower.is_valid_partition(3));
    }

    #[test]
    fn test_three_claimants_not_fully_resolved() {
        // Boundary: only the first two claimants are compared, so a
        // three-way duplicate keeps a copy on the third resource.
        let tasks = uniform_tasks(1, 10);
        let resources = uniform_resources(3, 10.0);
        let mut flower = Flower {
            buckets: vec![vec![0], vec![0], vec![0]],
        };

        let outcome = repair(&mut flower, &tasks, &resources);
        assert_eq!(outcome.duplicates_resolved, 1);
        let owners = flower.claimants(1);
        assert_eq!(owners[0].len(), 2);
        assert!(!flower.is_valid_partition(1));
    }

    #[test]
    fn test_unassigned_goes_to_least_loaded() {
        let tasks = uniform_tasks(4, 10);
        let resources = uniform_resources(2, 10.0);
        // Task 3 unassigned; resource 1 is lighter.
        let mut flower = Flower {
            buckets: vec![vec![0, 1], vec![2]],
        };

        let outcome = repair(&mut flower, &tasks, &resources);
        assert_eq!(outcome.unassigned, 0);
        assert_eq!(flower.buckets[1], vec![2, 3]);
        assert!(flower.is_valid_partition(4));
    }

    #[test]
    fn test_capacity_cap_respected() {
        // N=7, M=2 → capacity 4. Resource 1 has the lowest duration but
        // already holds 4 tasks, so task 6 must go to resource 0.
        let tasks = uniform_tasks(7, 10);
        let resources = vec![Resource::new(0, 1.0), Resource::new(1, 1000.0)];
        let mut flower = Flower {
            buckets: vec![vec![4, 5], vec![0, 1, 2, 3]],
        };

        repair(&mut flower, &tasks, &resources);
        assert_eq!(flower.buckets[0], vec![4, 5, 6]);
        assert_eq!(flower.buckets[1].len(), 4);
        assert!(flower.is_valid_partition(7));
    }

    #[test]
    fn test_all_resources_at_capacity_leaves_task_unassigned() {
        // The assignment helper reports failure instead of overfilling;
        // reachable only through pathological inputs, surfaced here.
        let tasks = uniform_tasks(4, 10);
        let resources = uniform_resources(2, 10.0);
        let mut flower = Flower {
            buckets: vec![vec![0, 1, 2], vec![0, 1, 2]],
        };

        let placed = assign_unassigned(&mut flower, 3, &tasks, &resources, 3);
        assert!(!placed);
        assert_eq!(flower.assigned_count(), 6);
    }

    #[test]
    fn test_repair_after_pollination_restores_partition() {
        let tasks = uniform_tasks(6, 10);
        let resources = uniform_resources(3, 10.0);
        let p1 = Flower {
            buckets: vec![vec![0, 1], vec![2, 3], vec![4, 5]],
        };
        let p2 = Flower {
            buckets: vec![vec![5, 4], vec![3, 0], vec![1, 2]],
        };

        for split in 0..3 {
            let mut child = pollinate_at(&p1, &p2, split);
            repair(&mut child, &tasks, &resources);
            assert!(
                child.is_valid_partition(6),
                "split {split} left an invalid partition: {:?}",
                child.buckets
            );
        }
    }

    #[test]
    fn test_repair_on_valid_partition_is_noop() {
        let tasks = uniform_tasks(4, 10);
        let resources = uniform_resources(2, 10.0);
        let mut flower = Flower {
            buckets: vec![vec![0, 2], vec![1, 3]],
        };
        let before = flower.clone();

        let outcome = repair(&mut flower, &tasks, &resources);
        assert_eq!(outcome, RepairOutcome::default());
        assert_eq!(flower, before);
    }
}
