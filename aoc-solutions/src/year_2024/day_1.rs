//! Historian Hysteria: compare two location lists

use std::collections::HashMap;

use anyhow::{Context, anyhow};
use aoc_solver::{AutoRegisterSolver, SolveError, Solver};

use crate::utils::invalid_format;

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 1, tags = ["lists"])]
pub struct HistorianHysteria;

fn parse(input: &[String]) -> anyhow::Result<(Vec<u32>, Vec<u32>)> {
    input
        .iter()
        .enumerate()
        .map(|(idx, line)| -> anyhow::Result<(u32, u32)> {
            let mut fields = line.split_whitespace();
            let (Some(left), Some(right), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(anyhow!("(line {}) expected two numbers", idx + 1));
            };
            Ok((
                left.parse().with_context(|| format!("(line {})", idx + 1))?,
                right.parse().with_context(|| format!("(line {})", idx + 1))?,
            ))
        })
        .collect()
}

impl Solver for HistorianHysteria {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        let (mut left, mut right) = parse(input).map_err(invalid_format)?;
        left.sort_unstable();
        right.sort_unstable();

        let distance: u64 = left
            .iter()
            .zip(&right)
            .map(|(l, r)| u64::from(l.abs_diff(*r)))
            .sum();
        Ok(distance.to_string())
    }

    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        let (left, right) = parse(input).map_err(invalid_format)?;

        let mut counts: HashMap<u32, u64> = HashMap::new();
        for value in right {
            *counts.entry(value).or_default() += 1;
        }

        let similarity: u64 = left
            .iter()
            .map(|l| u64::from(*l) * counts.get(l).copied().unwrap_or(0))
            .sum();
        Ok(similarity.to_string())
    }
}
