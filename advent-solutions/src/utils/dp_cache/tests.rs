//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

/// Steps for the Collatz sequence starting at `n` to reach 1
struct Collatz;

impl DpProblem<u64, u64> for Collatz {
    fn deps(&self, n: &u64) -> Vec<u64> {
        match *n {
            0 | 1 => vec![],
            n if n % 2 == 0 => vec![n / 2],
            n => vec![3 * n + 1],
        }
    }

    fn compute(&self, _n: &u64, deps: Vec<u64>) -> u64 {
        deps.first().map_or(0, |d| d + 1)
    }
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::new(VecBackend::new(), Fibonacci);

    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&2), 1);
    assert_eq!(cache.get(&10), 55);
    assert_eq!(cache.get(&20), 6765);
    assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
}

#[test]
fn test_collatz_known_values() {
    let cache = DpCache::new(HashMapBackend::new(), Collatz);

    assert_eq!(cache.get(&1), 0);
    assert_eq!(cache.get(&8), 3);
    assert_eq!(cache.get(&27), 111);
    assert_eq!(cache.get(&97), 118);
}

#[test]
fn test_diamond_dependency_memoization() {
    // 0 depends on 1 and 2, both depend on 3
    struct Diamond {
        count: Rc<Cell<u32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 5,
            }
        }
    }

    let count = Rc::new(Cell::new(0));
    let cache = DpCache::new(
        VecBackend::new(),
        Diamond {
            count: Rc::clone(&count),
        },
    );

    assert_eq!(cache.get(&0), 25);
    assert_eq!(count.get(), 4);

    // everything is cached now
    assert_eq!(cache.get(&0), 25);
    assert_eq!(cache.get(&3), 5);
    assert_eq!(count.get(), 4);
}

#[test]
fn test_closure_problem_with_tuple_index() {
    // lattice paths to (r, c) moving only down or right
    let paths = ClosureProblem::new(
        |&(r, c): &(usize, usize)| {
            let mut deps = Vec::new();
            if r > 0 {
                deps.push((r - 1, c));
            }
            if c > 0 {
                deps.push((r, c - 1));
            }
            deps
        },
        |_: &(usize, usize), deps: Vec<u64>| if deps.is_empty() { 1 } else { deps.iter().sum() },
    );
    let cache = DpCache::new(HashMapBackend::new(), paths);

    assert_eq!(cache.get(&(4, 4)), 70);
    assert_eq!(cache.get(&(2, 3)), 10);
    assert_eq!(cache.into_backend().len(), 25);
}

#[test]
fn test_vec_backend_get_or_insert() {
    let mut backend: VecBackend<i32> = VecBackend::with_capacity(4);
    assert_eq!(backend.get(&3), None);

    assert_eq!(*backend.get_or_insert(3, || 7), 7);
    assert_eq!(*backend.get_or_insert(3, || 9), 7);
    assert_eq!(backend.get(&3), Some(&7));
    assert_eq!(backend.get(&1), None);
    assert_eq!(backend.get(&100), None);
}

#[test]
fn test_hashmap_backend_get_or_insert() {
    let mut backend: HashMapBackend<String, i32> = HashMapBackend::new();
    assert!(backend.is_empty());

    assert_eq!(*backend.get_or_insert("a".to_string(), || 1), 1);
    assert_eq!(*backend.get_or_insert("a".to_string(), || 2), 1);
    assert_eq!(backend.get(&"a".to_string()), Some(&1));
    assert_eq!(backend.get(&"b".to_string()), None);
    assert_eq!(backend.len(), 1);
}

proptest! {
    #[test]
    fn prop_collatz_matches_direct_count(n in 1u64..2000) {
        let cache = DpCache::new(HashMapBackend::new(), Collatz);

        let mut steps = 0;
        let mut x = n;
        while x != 1 {
            x = if x % 2 == 0 { x / 2 } else { 3 * x + 1 };
            steps += 1;
        }

        prop_assert_eq!(cache.get(&n), steps);
    }

    #[test]
    fn prop_fibonacci_recurrence(n in 2usize..80) {
        let cache = DpCache::new(VecBackend::new(), Fibonacci);
        prop_assert_eq!(cache.get(&n), cache.get(&(n - 1)) + cache.get(&(n - 2)));
    }
}
