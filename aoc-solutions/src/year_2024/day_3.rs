//! Mull It Over: sum the valid `mul(x,y)` instructions in corrupted memory

use aoc_solver::{AutoRegisterSolver, SolveError, Solver};
use regex::Regex;

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 3, tags = ["regex"])]
pub struct MullItOver;

fn compile(pattern: &str) -> Result<Regex, SolveError> {
    Regex::new(pattern).map_err(|e| SolveError::SolveFailed(Box::new(e)))
}

fn product(a: &str, b: &str) -> u64 {
    // Both groups match 1-3 digits, so parsing cannot fail
    a.parse::<u64>().unwrap_or(0) * b.parse::<u64>().unwrap_or(0)
}

impl Solver for MullItOver {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        let mul = compile(r"mul\((\d{1,3}),(\d{1,3})\)")?;
        let sum: u64 = input
            .iter()
            .flat_map(|line| mul.captures_iter(line))
            .map(|cap| product(&cap[1], &cap[2]))
            .sum();
        Ok(sum.to_string())
    }

    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        let instruction = compile(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")?;

        // do()/don't() state carries over line breaks
        let mut enabled = true;
        let mut sum = 0u64;
        for cap in input.iter().flat_map(|line| instruction.captures_iter(line)) {
            match &cap[0] {
                "do()" => enabled = true,
                "don't()" => enabled = false,
                _ if enabled => sum += product(&cap[1], &cap[2]),
                _ => {}
            }
        }
        Ok(sum.to_string())
    }
}
