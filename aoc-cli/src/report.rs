//! Sequential execution of every solver for a range of days

use crate::aggregator::{ExecutionRecord, Report};
use crate::error::CliError;
use crate::input::InputLoader;
use aoc_solver::{Part, PuzzleId, SolverExt, SolverRegistry, Stopwatch, TimingSink};
use std::ops::RangeInclusive;

/// Fixture the report runs each day against
pub const REPORT_INPUT: &str = "actual.txt";

/// Runs both parts of each day in order and collects the measurements
pub struct ReportRunner<'a, S> {
    registry: &'a SolverRegistry,
    loader: &'a InputLoader,
    stopwatch: Stopwatch<S>,
}

impl<'a, S: TimingSink> ReportRunner<'a, S> {
    pub fn new(
        registry: &'a SolverRegistry,
        loader: &'a InputLoader,
        stopwatch: Stopwatch<S>,
    ) -> Self {
        Self {
            registry,
            loader,
            stopwatch,
        }
    }

    /// Run every day in `days`, stopping at the first failure
    pub fn run(&self, year: u16, days: RangeInclusive<u8>) -> Result<Report, CliError> {
        let mut report = Report::new();
        for day in days {
            println!("Generating report for Day {}", day);
            self.run_day(PuzzleId::new(year, day), &mut report)?;
        }
        Ok(report)
    }

    fn run_day(&self, id: PuzzleId, report: &mut Report) -> Result<(), CliError> {
        let solver = self.registry.resolve(id)?;
        let input = self
            .stopwatch
            .try_time("Read input file", || {
                self.loader.load_lines(id.year, id.day, REPORT_INPUT)
            })?
            .value;

        for part in Part::ALL {
            let action = format!("Solve Part {}", part.to_string().to_uppercase());
            let timed = self
                .stopwatch
                .try_time(&action, || solver.solve(part, &input))
                .map_err(|source| CliError::Solve { id, part, source })?;
            tracing::debug!(%id, %part, elapsed = ?timed.elapsed, "part solved");
            report.push(ExecutionRecord {
                id,
                part,
                answer: timed.value,
                elapsed: timed.elapsed,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use aoc_solutions::year_2024::{day_6::GuardGallivant, day_15::WarehouseWoes};
    use aoc_solver::{RegistryBuilder, SolverError, construct};
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
            .register(2024, 6, construct::<GuardGallivant>)
            .unwrap()
            .register(2024, 15, construct::<WarehouseWoes>)
            .unwrap()
            .build()
    }

    fn write_fixture(root: &Path, day: u8, content: &str) {
        let dir = root.join("2024").join(day.to_string());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(REPORT_INPUT), content).unwrap();
    }

    #[test]
    fn test_single_day_produces_both_parts() {
        let tmp = TempDir::new().unwrap();
        write_fixture(tmp.path(), 6, ".#.\n...\n.^.\n");
        let registry = registry();
        let loader = InputLoader::new(tmp.path());
        let sink = Recorder::default();

        let report = ReportRunner::new(&registry, &loader, Stopwatch::new(&sink))
            .run(2024, 6..=6)
            .unwrap();

        assert_eq!(report.len(), 2);
        let rows = report.rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].day, 6);
        assert_eq!(rows[0].a.answer, "3");
        assert_eq!(rows[0].b.answer, "0");
        assert_eq!(
            sink.0.borrow().as_slice(),
            ["Read input file", "Solve Part A", "Solve Part B"]
        );
    }

    #[test]
    fn test_solver_failure_aborts_report() {
        let tmp = TempDir::new().unwrap();
        write_fixture(tmp.path(), 15, "#####\n#.@O#\n#####\n<>\n");
        let registry = registry();
        let loader = InputLoader::new(tmp.path());
        let sink = Recorder::default();

        let err = ReportRunner::new(&registry, &loader, Stopwatch::new(&sink))
            .run(2024, 15..=15)
            .unwrap_err();

        assert!(matches!(
            err,
            CliError::Solve {
                part: Part::A,
                ..
            }
        ));
        assert_eq!(sink.0.borrow().as_slice(), ["Read input file"]);
    }

    #[test]
    fn test_missing_solver_aborts_before_reading() {
        let tmp = TempDir::new().unwrap();
        write_fixture(tmp.path(), 6, ".#.\n...\n.^.\n");
        let registry = registry();
        let loader = InputLoader::new(tmp.path());

        let err = ReportRunner::new(&registry, &loader, Stopwatch::new(Recorder::default()))
            .run(2024, 5..=6)
            .unwrap_err();

        assert!(matches!(err, CliError::Solver(SolverError::NotFound(2024, 5))));
    }

    #[test]
    fn test_missing_fixture_is_input_error() {
        let tmp = TempDir::new().unwrap();
        let registry = registry();
        let loader = InputLoader::new(tmp.path());

        let err = ReportRunner::new(&registry, &loader, Stopwatch::new(Recorder::default()))
            .run(2024, 6..=6)
            .unwrap_err();

        assert!(matches!(err, CliError::Input(InputError::NotFound { .. })));
    }
}
