//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Year used when `--year` is omitted
pub const DEFAULT_YEAR: u16 = 2024;

/// Puzzle solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Solve daily puzzles and report timings", version)]
pub struct Args {
    /// Root of the `<year>/<day>/<file>` input tree [env: AOC_INPUT_DATA_DIRECTORY]
    #[arg(long, global = true)]
    pub input_data_directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Solve a single part of one day
    Solve {
        /// Day to solve
        #[arg(short, long)]
        day: u8,

        /// Part to solve: `b` selects part B, anything else part A
        #[arg(short, long)]
        part: String,

        /// Input file name inside the day's directory
        #[arg(short, long)]
        input: String,

        /// Puzzle year
        #[arg(short, long, default_value_t = DEFAULT_YEAR)]
        year: u16,
    },

    /// Run both parts over a range of days and print a table
    Report {
        /// Only report this day (reports every day up to the latest input if omitted)
        #[arg(short, long)]
        day: Option<u8>,

        /// Puzzle year
        #[arg(short, long, default_value_t = DEFAULT_YEAR)]
        year: u16,
    },
}
