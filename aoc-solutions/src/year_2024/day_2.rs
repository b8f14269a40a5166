//! Red-Nosed Reports: classify level sequences as safe or unsafe

use anyhow::Context;
use aoc_solver::{AutoRegisterSolver, SolveError, Solver};
use itertools::Itertools;

use crate::utils::invalid_format;

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 2)]
pub struct RedNosedReports;

fn parse(input: &[String]) -> anyhow::Result<Vec<Vec<i32>>> {
    input
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            line.split_whitespace()
                .map(str::parse)
                .collect::<Result<Vec<i32>, _>>()
                .with_context(|| format!("(line {}) levels must be integers", idx + 1))
        })
        .collect()
}

/// Strictly monotonic, with every step between 1 and 3
fn is_safe(levels: impl Iterator<Item = i32> + Clone) -> bool {
    let diffs = levels.tuple_windows().map(|(a, b)| b - a);
    diffs.clone().all(|d| (1..=3).contains(&d)) || diffs.clone().all(|d| (-3..=-1).contains(&d))
}

/// Safe outright, or safe once any single level is removed
fn is_safe_dampened(levels: &[i32]) -> bool {
    is_safe(levels.iter().copied())
        || (0..levels.len()).any(|skip| {
            is_safe(
                levels
                    .iter()
                    .enumerate()
                    .filter(move |(i, _)| *i != skip)
                    .map(|(_, v)| *v),
            )
        })
}

impl Solver for RedNosedReports {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        let reports = parse(input).map_err(invalid_format)?;
        let safe = reports
            .iter()
            .filter(|levels| is_safe(levels.iter().copied()))
            .count();
        Ok(safe.to_string())
    }

    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        let reports = parse(input).map_err(invalid_format)?;
        let safe = reports.iter().filter(|levels| is_safe_dampened(levels)).count();
        Ok(safe.to_string())
    }
}
