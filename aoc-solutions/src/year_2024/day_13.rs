//! Claw Contraption: cheapest button presses to win each prize
//!
//! Every machine is a 2x2 linear system, solved directly with Cramer's rule. Only
//! non-negative integer solutions count.

use anyhow::{anyhow, ensure};
use aoc_solver::{AutoRegisterSolver, SolveError, Solver};
use regex::Regex;

use crate::utils::invalid_format;

/// Offset added to both prize coordinates in part B
const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 13, tags = ["math"])]
pub struct ClawContraption;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl Machine {
    /// Tokens needed to win, at 3 per A press and 1 per B press
    fn cost(&self) -> Option<i64> {
        let det = self.a.0 * self.b.1 - self.a.1 * self.b.0;
        if det == 0 {
            return None;
        }
        let a_num = self.prize.0 * self.b.1 - self.prize.1 * self.b.0;
        let b_num = self.a.0 * self.prize.1 - self.a.1 * self.prize.0;
        if a_num % det != 0 || b_num % det != 0 {
            return None;
        }
        let (presses_a, presses_b) = (a_num / det, b_num / det);
        (presses_a >= 0 && presses_b >= 0).then_some(presses_a * 3 + presses_b)
    }
}

fn parse(input: &[String]) -> anyhow::Result<Vec<Machine>> {
    let number = Regex::new(r"-?\d+")?;
    let mut rows = input.iter().filter(|line| !line.trim().is_empty()).map(|line| -> anyhow::Result<(i64, i64)> {
        let values: Vec<i64> = number
            .find_iter(line)
            .map(|m| m.as_str().parse())
            .collect::<Result<_, _>>()?;
        ensure!(values.len() == 2, "expected two numbers in {line:?}");
        Ok((values[0], values[1]))
    });

    let mut machines = Vec::new();
    while let Some(a) = rows.next() {
        let (Some(b), Some(prize)) = (rows.next(), rows.next()) else {
            return Err(anyhow!("machine {} is incomplete", machines.len() + 1));
        };
        machines.push(Machine {
            a: a?,
            b: b?,
            prize: prize?,
        });
    }
    Ok(machines)
}

fn total_cost(machines: impl Iterator<Item = Machine>) -> String {
    machines.filter_map(|m| m.cost()).sum::<i64>().to_string()
}

impl Solver for ClawContraption {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        let machines = parse(input).map_err(invalid_format)?;
        Ok(total_cost(machines.into_iter()))
    }

    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        let machines = parse(input).map_err(invalid_format)?;
        Ok(total_cost(machines.into_iter().map(|m| Machine {
            prize: (m.prize.0 + PRIZE_OFFSET, m.prize.1 + PRIZE_OFFSET),
            ..m
        })))
    }
}
