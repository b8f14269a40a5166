//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver could not make sense of its input
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The input parsed, but the puzzle has no answer for it
    #[error("No solution: {0}")]
    NoSolution(String),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for solver resolution
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SolverError {
    /// No solver registered for the given year and day
    #[error("Solver for day {1} year {0} not found")]
    NotFound(u16, u8),
    /// More than one solver registered for the given year and day
    #[error("Solver for day {day} year {year} is ambiguous: {count} candidates registered")]
    Ambiguous { year: u16, day: u8, count: usize },
}

/// Error type for registration failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// Year or day outside the range a puzzle calendar can hold
    #[error("Invalid puzzle identifier: year {0} day {1}")]
    InvalidYearDay(u16, u8),
}
