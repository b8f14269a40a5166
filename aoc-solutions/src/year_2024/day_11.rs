//! Plutonian Pebbles: count stones after repeated blinking
//!
//! Stones never interact, so the count for `(stone, blinks)` is memoized and shared between
//! every stone that reaches the same engraving.

use anyhow::Context;
use aoc_solver::{AutoRegisterSolver, SolveError, Solver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::invalid_format;

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 11, tags = ["dp"])]
pub struct PlutonianPebbles;

/// Stones after one blink
fn blink(stone: u64) -> Vec<u64> {
    if stone == 0 {
        return vec![1];
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        vec![stone / half, stone % half]
    } else {
        vec![stone * 2024]
    }
}

/// Number of stones `stone` turns into after `blinks` blinks
struct StoneCount;

impl DpProblem<(u64, u8), u64> for StoneCount {
    fn deps(&self, &(stone, blinks): &(u64, u8)) -> Vec<(u64, u8)> {
        if blinks == 0 {
            vec![]
        } else {
            blink(stone).into_iter().map(|s| (s, blinks - 1)).collect()
        }
    }

    fn compute(&self, &(_, blinks): &(u64, u8), deps: Vec<u64>) -> u64 {
        if blinks == 0 { 1 } else { deps.iter().sum() }
    }
}

fn count_after(input: &[String], blinks: u8) -> Result<String, SolveError> {
    let stones = input
        .iter()
        .flat_map(|line| line.split_whitespace())
        .map(|s| s.parse::<u64>().with_context(|| format!("bad stone {s:?}")))
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(invalid_format)?;

    let cache = DpCache::with_problem(HashMapBackend::new(), StoneCount);
    let total: u64 = stones.iter().map(|&s| cache.get(&(s, blinks))).sum();
    Ok(total.to_string())
}

impl Solver for PlutonianPebbles {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        count_after(input, 25)
    }

    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        count_after(input, 75)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::lines;

    #[test]
    fn test_blink_rules() {
        assert_eq!(blink(0), vec![1]);
        assert_eq!(blink(1000), vec![10, 0]);
        assert_eq!(blink(17), vec![1, 7]);
        assert_eq!(blink(125), vec![253000]);
    }

    #[test]
    fn test_example() {
        let input = lines("125 17");
        assert_eq!(PlutonianPebbles.part_a(&input).unwrap(), "55312");
        assert_eq!(PlutonianPebbles.part_b(&input).unwrap(), "65601038650482");
    }
}
