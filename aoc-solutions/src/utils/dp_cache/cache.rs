//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// Dependencies are resolved recursively and each value is computed exactly once. No borrow
/// of the backend is held while dependencies are being resolved.
///
/// # Warning: No Cycle Detection
///
/// **Users MUST ensure dependencies form a DAG.**
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{ClosureProblem, DpCache, HashMapBackend};
///
/// let factorial = ClosureProblem::new(
///     |n: &u64| if *n == 0 { vec![] } else { vec![n - 1] },
///     |n: &u64, deps: Vec<u64>| if *n == 0 { 1 } else { n * deps[0] },
/// );
///
/// let cache = DpCache::with_problem(HashMapBackend::new(), factorial);
/// assert_eq!(cache.get(&5), 120);
/// ```
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a new DpCache with the given backend and problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for `index`, computing it and its dependencies if necessary.
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        let dep_values: Vec<K> = self
            .problem
            .deps(index)
            .into_iter()
            .map(|dep| self.get(&dep))
            .collect();

        self.backend
            .borrow_mut()
            .get_or_insert(index.clone(), || self.problem.compute(index, dep_values))
            .clone()
    }
}
