//! AOC CLI - Command-line interface for running puzzle solvers and timing reports

mod aggregator;
mod cli;
mod config;
mod error;
mod input;
mod output;
mod report;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::{
    ConsoleSink, Part, PuzzleId, RegistryBuilder, SolverExt, SolverRegistry, Stopwatch,
    TimingSink,
};
use clap::Parser;
use cli::{Args, Command};
use config::Config;
use error::{CliError, InputError};
use input::InputLoader;
use output::OutputFormatter;
use report::ReportRunner;
use std::ops::RangeInclusive;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so they never mix with answers and tables on stdout
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    tracing::debug!(solvers = registry.len(), "registry built");

    let loader = InputLoader::new(config.input_data_directory);
    execute(config.command, &registry, &loader, Stopwatch::new(ConsoleSink))
}

fn execute<S: TimingSink>(
    command: Command,
    registry: &SolverRegistry,
    loader: &InputLoader,
    stopwatch: Stopwatch<S>,
) -> Result<(), CliError> {
    match command {
        Command::Solve {
            day,
            part,
            input,
            year,
        } => {
            let answer = solve(registry, loader, &stopwatch, year, day, &part, &input)?;
            println!("Answer: {}", answer);
            Ok(())
        }
        Command::Report { day, year } => {
            let days = report_days(loader, year, day)?;
            let report = ReportRunner::new(registry, loader, stopwatch).run(year, days)?;
            let rows = report.rows()?;
            OutputFormatter::new(true).print_report(&rows)?;
            Ok(())
        }
    }
}

/// Days a report covers: the requested one, or every day up to the latest input of `year`
fn report_days(
    loader: &InputLoader,
    year: u16,
    day: Option<u8>,
) -> Result<RangeInclusive<u8>, CliError> {
    if let Some(day) = day {
        return Ok(day..=day);
    }
    if !loader.has_year(year) {
        if let Ok(years) = loader.years() {
            tracing::info!(?years, "available input years");
        }
        return Err(InputError::YearNotFound {
            year,
            root: loader.root().to_path_buf(),
        }
        .into());
    }
    Ok(1..=loader.latest_day(year)?)
}

fn solve<S: TimingSink>(
    registry: &SolverRegistry,
    loader: &InputLoader,
    stopwatch: &Stopwatch<S>,
    year: u16,
    day: u8,
    part_flag: &str,
    input_name: &str,
) -> Result<String, CliError> {
    println!("Solving for Day {} Part {}", day, part_flag);

    let id = PuzzleId::new(year, day);
    let part = Part::from_flag(part_flag);
    let solver = registry.resolve(id)?;

    let input = stopwatch
        .try_time("Read input file", || loader.load_lines(year, day, input_name))?
        .value;

    let answer = stopwatch
        .try_time("Solve", || solver.solve(part, &input))
        .map_err(|source| CliError::Solve { id, part, source })?
        .value;
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solutions::year_2024::{day_1::HistorianHysteria, day_6::GuardGallivant};
    use aoc_solver::{SolverError, construct};
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;
    use std::time::Duration;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl TimingSink for Recorder {
        fn record(&self, action: &str, _elapsed: Duration) {
            self.0.borrow_mut().push(action.to_string());
        }
    }

    fn registry() -> SolverRegistry {
        RegistryBuilder::new()
            .register(2024, 1, construct::<HistorianHysteria>)
            .unwrap()
            .register(2024, 6, construct::<GuardGallivant>)
            .unwrap()
            .build()
    }

    fn write_fixture(root: &Path, day: u8, name: &str, content: &str) {
        let dir = root.join("2024").join(day.to_string());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    const LISTS: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    #[test]
    fn test_solve_unknown_day_is_resolution_error() {
        let tmp = TempDir::new().unwrap();
        let loader = InputLoader::new(tmp.path());
        let sink = Recorder::default();

        let stopwatch = Stopwatch::new(&sink);

        let err = solve(&registry(), &loader, &stopwatch, 2024, 99, "a", "actual.txt").unwrap_err();

        assert!(matches!(err, CliError::Solver(SolverError::NotFound(2024, 99))));
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn test_solve_part_flag_selects_part() {
        let tmp = TempDir::new().unwrap();
        write_fixture(tmp.path(), 1, "example.txt", LISTS);
        let registry = registry();
        let loader = InputLoader::new(tmp.path());
        let sink = Recorder::default();
        let stopwatch = Stopwatch::new(&sink);

        let answer = |flag: &str| solve(&registry, &loader, &stopwatch, 2024, 1, flag, "example.txt");
        assert_eq!(answer("a").unwrap(), "11");
        assert_eq!(answer("B").unwrap(), "31");
        assert_eq!(answer(" b ").unwrap(), "31");
        // Unrecognised flags fall back to part A
        assert_eq!(answer("c").unwrap(), "11");
        assert_eq!(answer("").unwrap(), "11");

        assert_eq!(&sink.0.borrow()[..2], ["Read input file", "Solve"]);
    }

    #[test]
    fn test_solve_missing_fixture_is_input_error() {
        let tmp = TempDir::new().unwrap();
        let loader = InputLoader::new(tmp.path());

        let err = execute(
            Command::Solve {
                day: 1,
                part: "a".to_string(),
                input: "missing.txt".to_string(),
                year: 2024,
            },
            &registry(),
            &loader,
            Stopwatch::new(Recorder::default()),
        )
        .unwrap_err();

        assert!(matches!(err, CliError::Input(InputError::NotFound { .. })));
    }

    #[test]
    fn test_report_days_ignores_unrelated_directories() {
        let tmp = TempDir::new().unwrap();
        write_fixture(tmp.path(), 6, "actual.txt", ".#.\n...\n.^.\n");
        fs::create_dir_all(tmp.path().join("templates")).unwrap();
        fs::create_dir_all(tmp.path().join(".git")).unwrap();
        let loader = InputLoader::new(tmp.path());

        assert_eq!(report_days(&loader, 2024, None).unwrap(), 1..=6);
        assert_eq!(report_days(&loader, 2024, Some(3)).unwrap(), 3..=3);
    }

    #[test]
    fn test_report_days_missing_year() {
        let tmp = TempDir::new().unwrap();
        write_fixture(tmp.path(), 6, "actual.txt", "");
        let loader = InputLoader::new(tmp.path());

        let err = report_days(&loader, 2023, None).unwrap_err();
        assert!(matches!(
            err,
            CliError::Input(InputError::YearNotFound { year: 2023, .. })
        ));
    }

    #[test]
    fn test_report_single_day_runs_both_parts() {
        let tmp = TempDir::new().unwrap();
        write_fixture(tmp.path(), 6, "actual.txt", ".#.\n...\n.^.\n");
        let loader = InputLoader::new(tmp.path());
        let sink = Recorder::default();

        execute(
            Command::Report {
                day: Some(6),
                year: 2024,
            },
            &registry(),
            &loader,
            Stopwatch::new(&sink),
        )
        .unwrap();

        assert_eq!(
            sink.0.borrow().as_slice(),
            ["Read input file", "Solve Part A", "Solve Part B"]
        );
    }
}
