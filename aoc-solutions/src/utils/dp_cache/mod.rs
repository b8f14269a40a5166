//! Dynamic Programming Cache with Lazy Evaluation
//!
//! Memoization for problems where each value depends on other values in a directed acyclic
//! graph. Values are computed on first request and stored in a pluggable [`Backend`].
//!
//! # Backend Types
//!
//! - [`VecBackend`]: Dense, sequential `usize` indices (auto-growing)
//! - [`HashMapBackend`]: Arbitrary hashable index types
//!
//! # Warning: Cycle Behavior
//!
//! **The cache does NOT detect cycles.** A cyclic dependency graph overflows the stack.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<usize, u64> for Fibonacci {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] }
//!         else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n as u64 }
//!         else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
//! assert_eq!(cache.get(&10), 55);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::{ClosureProblem, DpProblem};
