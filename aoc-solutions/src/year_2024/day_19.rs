//! Linen Layout: build designs out of an unlimited supply of towel patterns

use aoc_solver::{AutoRegisterSolver, ParseError, SolveError, Solver};

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};
use crate::utils::split_sections;

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 19, tags = ["dp"])]
pub struct LinenLayout;

/// Ways to build the suffix of `design` starting at a byte offset
struct Arrangements<'a> {
    towels: &'a [&'a str],
    design: &'a str,
}

impl DpProblem<usize, u64> for Arrangements<'_> {
    fn deps(&self, start: &usize) -> Vec<usize> {
        let rest = &self.design[*start..];
        self.towels
            .iter()
            .filter(|towel| rest.starts_with(**towel))
            .map(|towel| start + towel.len())
            .collect()
    }

    fn compute(&self, start: &usize, deps: Vec<u64>) -> u64 {
        if *start == self.design.len() {
            1
        } else {
            deps.iter().sum()
        }
    }
}

fn parse(input: &[String]) -> Result<(Vec<&str>, Vec<&str>), ParseError> {
    let (towels, designs) = split_sections(input)?;
    let towels: Vec<&str> = towels
        .iter()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if towels.is_empty() {
        return Err(ParseError::MissingData("no towel patterns".into()));
    }
    let designs = designs
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .collect();
    Ok((towels, designs))
}

fn arrangements(towels: &[&str], design: &str) -> u64 {
    let cache = DpCache::with_problem(
        VecBackend::with_capacity(design.len() + 1),
        Arrangements { towels, design },
    );
    cache.get(&0)
}

impl Solver for LinenLayout {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        let (towels, designs) = parse(input)?;
        let possible = designs
            .iter()
            .filter(|design| arrangements(&towels, design) > 0)
            .count();
        Ok(possible.to_string())
    }

    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        let (towels, designs) = parse(input)?;
        let total: u64 = designs.iter().map(|design| arrangements(&towels, design)).sum();
        Ok(total.to_string())
    }
}
