//! Trait-based DP problem definition.

use std::marker::PhantomData;

/// A dynamic programming problem: how indices depend on each other and how a value is
/// computed from its dependencies.
///
/// # Type Parameters
///
/// - `I`: Index type for the DP cache
/// - `K`: Value type stored in the cache
pub trait DpProblem<I, K> {
    /// Returns the indices that this index depends on.
    ///
    /// For base cases, return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Computes the value for the given index.
    ///
    /// `deps` holds the values of the indices returned by `deps()`, in the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}

/// Adapts a pair of closures to [`DpProblem`]
pub struct ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    dep_fn: D,
    compute_fn: C,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, D, C> ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    pub fn new(dep_fn: D, compute_fn: C) -> Self {
        Self {
            dep_fn,
            compute_fn,
            _phantom: PhantomData,
        }
    }
}

impl<I, K, D, C> DpProblem<I, K> for ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    fn deps(&self, index: &I) -> Vec<I> {
        (self.dep_fn)(index)
    }

    fn compute(&self, index: &I, deps: Vec<K>) -> K {
        (self.compute_fn)(index, deps)
    }
}
