//! Bridge Repair: find which calibration equations can be made true
//!
//! Each equation is searched backwards from its test value: the last operand is undone with the
//! inverse of every operator, so impossible branches are cut as soon as a division leaves a
//! remainder or a subtraction would underflow.

use anyhow::{Context, anyhow};
use aoc_solver::{AutoRegisterSolver, SolveError, Solver};
use rayon::prelude::*;

use crate::utils::invalid_format;

/// Number of chunks the equations are split into for the parallel sum
const CHUNKS: usize = 128;

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 7, tags = ["parallel"])]
pub struct BridgeRepair;

struct Equation {
    target: u64,
    operands: Vec<u64>,
}

/// Inverse of an operator: given the running value and the last operand, the value before it
type Inverse = fn(u64, u64) -> Option<u64>;

fn undo_mul(acc: u64, operand: u64) -> Option<u64> {
    (operand != 0 && acc % operand == 0).then(|| acc / operand)
}

fn undo_add(acc: u64, operand: u64) -> Option<u64> {
    acc.checked_sub(operand)
}

fn undo_concat(acc: u64, operand: u64) -> Option<u64> {
    let shift = 10u64.checked_pow(operand.checked_ilog10().unwrap_or(0) + 1)?;
    (acc % shift == operand).then(|| acc / shift)
}

fn parse(input: &[String]) -> anyhow::Result<Vec<Equation>> {
    input
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let (target, rest) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("(line {}) missing ':'", idx + 1))?;
            let operands = rest
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<Vec<u64>, _>>()
                .with_context(|| format!("(line {}) bad operand", idx + 1))?;
            if operands.is_empty() {
                return Err(anyhow!("(line {}) no operands", idx + 1));
            }
            Ok(Equation {
                target: target
                    .trim()
                    .parse()
                    .with_context(|| format!("(line {}) bad test value", idx + 1))?,
                operands,
            })
        })
        .collect()
}

impl Equation {
    fn solvable(&self, inverses: &[Inverse]) -> bool {
        let mut stack = vec![(self.operands.len() - 1, self.target)];
        while let Some((index, acc)) = stack.pop() {
            if index == 0 {
                if acc == self.operands[0] {
                    return true;
                }
                continue;
            }
            stack.extend(
                inverses
                    .iter()
                    .filter_map(|undo| undo(acc, self.operands[index]))
                    .map(|prev| (index - 1, prev)),
            );
        }
        false
    }
}

fn calibration_sum(input: &[String], inverses: &[Inverse]) -> Result<String, SolveError> {
    let equations = parse(input).map_err(invalid_format)?;
    let chunk_size = equations.len().div_ceil(CHUNKS).max(1);

    let sum: u64 = equations
        .par_chunks(chunk_size)
        .map(|chunk| {
            chunk
                .iter()
                .filter(|eq| eq.solvable(inverses))
                .map(|eq| eq.target)
                .sum::<u64>()
        })
        .sum();
    Ok(sum.to_string())
}

impl Solver for BridgeRepair {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        calibration_sum(input, &[undo_mul, undo_add])
    }

    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        calibration_sum(input, &[undo_concat, undo_mul, undo_add])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::lines;

    const EXAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20";

    #[test]
    fn test_example() {
        let input = lines(EXAMPLE);
        assert_eq!(BridgeRepair.part_a(&input).unwrap(), "3749");
        assert_eq!(BridgeRepair.part_b(&input).unwrap(), "11387");
    }

    #[test]
    fn test_undo_concat() {
        assert_eq!(undo_concat(156, 6), Some(15));
        assert_eq!(undo_concat(1510, 10), Some(15));
        assert_eq!(undo_concat(156, 7), None);
    }

    #[test]
    fn test_rejects_missing_colon() {
        let err = BridgeRepair.part_a(&lines("190 10 19")).unwrap_err();
        assert!(matches!(err, SolveError::Parse(_)));
    }
}
