//! Error types for the CLI

use aoc_solver::{Part, PuzzleId, RegistrationError, SolveError, SolverError};
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Fixture loading error
    #[error(transparent)]
    Input(#[from] InputError),

    /// Solver resolution error
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// A solver rejected its input or failed while solving
    #[error("{id} part {part}: {source}")]
    Solve {
        id: PuzzleId,
        part: Part,
        #[source]
        source: SolveError,
    },

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Report invariant error
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Writing to standard output failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Input loader errors
#[derive(Error, Debug)]
pub enum InputError {
    /// The fixture or directory does not exist
    #[error("Input not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Any other read failure
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A year or day directory whose name is not a number
    #[error("Directory name {name:?} in {} is not a number", parent.display())]
    InvalidDirectoryName { parent: PathBuf, name: String },

    /// A year directory without day directories
    #[error("No day directories in {}", path.display())]
    NoDays { path: PathBuf },

    /// The input tree has no directory for the requested year
    #[error("No input directory for year {year} in {}", root.display())]
    YearNotFound { year: u16, root: PathBuf },
}

/// Report invariant errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// A day without a record for one of its parts
    #[error("Day {day} has no part {missing} result")]
    IncompleteDay { day: u8, missing: Part },

    /// A day with several records for the same part
    #[error("Day {day} has more than one part {part} result")]
    DuplicatePart { day: u8, part: Part },
}
