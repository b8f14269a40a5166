//! Puzzle Solver Library
//!
//! The shared contract between the daily puzzle solutions and the runner that executes them.
//!
//! # Overview
//!
//! This library provides:
//! - The [`Solver`] trait: two computations over the lines of an input fixture
//! - A [`SolverRegistry`] resolving exactly one solver per (year, day)
//! - Explicit registration, either by hand through [`RegistryBuilder`] or with
//!   `#[derive(AutoRegisterSolver)]`
//! - A [`Stopwatch`] that times work and reports to an injected [`TimingSink`]
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{Part, PuzzleId, RegistryBuilder, SolveError, Solver, SolverExt};
//!
//! #[derive(Default)]
//! struct LineCount;
//!
//! impl Solver for LineCount {
//!     fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
//!         Ok(input.len().to_string())
//!     }
//!
//!     fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
//!         Ok(input.iter().filter(|l| l.is_empty()).count().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register(2024, 1, aoc_solver::construct::<LineCount>)
//!     .unwrap()
//!     .build();
//!
//! let input = vec!["1".to_string(), String::new(), "2".to_string()];
//! let solver = registry.resolve(PuzzleId::new(2024, 1)).unwrap();
//! assert_eq!(solver.solve(Part::A, &input).unwrap(), "3");
//! assert_eq!(solver.solve(Part::B, &input).unwrap(), "1");
//! ```
//!
//! ## Plugin Registration
//!
//! ```ignore
//! #[derive(Default, AutoRegisterSolver)]
//! #[aoc(year = 2024, day = 6, tags = ["grid"])]
//! pub struct GuardGallivant;
//! ```
//!
//! The year and day are taken from the attribute. `RegistryBuilder::register_all_plugins`
//! picks up every derived solver linked into the binary.

mod error;
mod registry;
mod solver;
mod timing;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, MAX_YEARS, RegistryBuilder, SolverFactory, SolverPlugin,
    SolverRegistry, construct,
};
pub use solver::{Part, PuzzleId, Solver, SolverExt};
pub use timing::{ConsoleSink, Stopwatch, Timed, TimingSink, format_timing};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use aoc_solver_macros::AutoRegisterSolver;
