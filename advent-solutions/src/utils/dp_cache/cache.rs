//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// Memoizing cache that resolves dependencies lazily and computes each value
/// exactly once.
///
/// Dependencies must form a DAG; a cycle recurses until the stack overflows.
///
/// ```rust
/// use advent_solutions::utils::dp_cache::{ClosureProblem, DpCache, HashMapBackend};
///
/// // number of ways to climb `n` stairs taking 1, 2 or 3 steps
/// let stairs = ClosureProblem::new(
///     |n: &u32| (1..=3).filter(|s| s <= n).map(|s| n - s).collect(),
///     |n: &u32, deps: Vec<u64>| if *n == 0 { 1 } else { deps.iter().sum() },
/// );
/// let cache = DpCache::new(HashMapBackend::new(), stairs);
/// assert_eq!(cache.get(&4), 7);
/// ```
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn new(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Value at `index`, computing it and any missing dependencies first.
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        // no borrow is held while dependencies recurse
        let deps = self.problem.deps(index);
        let dep_values: Vec<K> = deps.into_iter().map(|dep| self.get(&dep)).collect();

        self.backend
            .borrow_mut()
            .get_or_insert(index.clone(), || self.problem.compute(index, dep_values))
            .clone()
    }

    /// The problem definition this cache evaluates
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Give back the backend with everything computed so far
    pub fn into_backend(self) -> B {
        self.backend.into_inner()
    }
}
