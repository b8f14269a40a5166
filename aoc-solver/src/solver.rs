//! Core solver trait and related types

use crate::error::SolveError;
use std::fmt;

/// Composite key selecting one puzzle: a (year, day) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    pub year: u16,
    pub day: u8,
}

impl PuzzleId {
    pub const fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/day{:02}", self.year, self.day)
    }
}

/// Which of the two computations of a puzzle to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    A,
    B,
}

impl Part {
    /// Both parts, in execution order
    pub const ALL: [Part; 2] = [Part::A, Part::B];

    /// Interpret a command-line part flag.
    ///
    /// `"b"` (any case, surrounding whitespace ignored) selects part B; every other value
    /// falls back to part A.
    pub fn from_flag(flag: &str) -> Self {
        if flag.trim().eq_ignore_ascii_case("b") {
            Part::B
        } else {
            Part::A
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::A => f.write_str("a"),
            Part::B => f.write_str("b"),
        }
    }
}

/// Core trait that every puzzle solver implements.
///
/// A solver maps the ordered lines of one input fixture to a textual answer, once per part.
/// Instances are created fresh for every resolution, so implementations should keep any
/// working state local to a call.
///
/// # Example
///
/// ```
/// use aoc_solver::{ParseError, SolveError, Solver};
///
/// #[derive(Default)]
/// struct SumAndProduct;
///
/// fn numbers(input: &[String]) -> Result<Vec<i64>, ParseError> {
///     input
///         .iter()
///         .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.clone())))
///         .collect()
/// }
///
/// impl Solver for SumAndProduct {
///     fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
///         Ok(numbers(input)?.iter().sum::<i64>().to_string())
///     }
///
///     fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
///         Ok(numbers(input)?.iter().product::<i64>().to_string())
///     }
/// }
///
/// let input = vec!["2".to_string(), "3".to_string()];
/// assert_eq!(SumAndProduct.part_a(&input).unwrap(), "5");
/// assert_eq!(SumAndProduct.part_b(&input).unwrap(), "6");
/// ```
pub trait Solver {
    /// Solve the first part of the puzzle
    fn part_a(&self, input: &[String]) -> Result<String, SolveError>;

    /// Solve the second part of the puzzle
    fn part_b(&self, input: &[String]) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Dispatch to the computation for `part`
    fn solve(&self, part: Part, input: &[String]) -> Result<String, SolveError> {
        match part {
            Part::A => self.part_a(input),
            Part::B => self.part_b(input),
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
