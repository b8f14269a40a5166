//! Chronospatial Computer: run a 3-bit program and find the input that makes it print itself

use anyhow::{Context, anyhow};
use aoc_solver::{AutoRegisterSolver, ParseError, SolveError, Solver};

use crate::utils::{invalid_format, split_sections};

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 17, tags = ["vm"])]
pub struct ChronospatialComputer;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Computer {
    registers: [u64; 3],
    program: Vec<u8>,
}

fn parse(input: &[String]) -> Result<Computer, ParseError> {
    let (registers, program) = split_sections(input)?;
    parse_sections(registers, program).map_err(invalid_format)
}

fn value_after_colon(line: &str) -> anyhow::Result<&str> {
    line.split_once(':')
        .map(|(_, v)| v.trim())
        .ok_or_else(|| anyhow!("missing ':' in {line:?}"))
}

fn parse_sections(registers: &[String], program: &[String]) -> anyhow::Result<Computer> {
    let values = registers
        .iter()
        .map(|line| value_after_colon(line)?.parse::<u64>().context("bad register"))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let registers: [u64; 3] = values
        .try_into()
        .map_err(|v: Vec<u64>| anyhow!("expected 3 registers, found {}", v.len()))?;

    let line = program.first().ok_or_else(|| anyhow!("missing program"))?;
    let program = value_after_colon(line)?
        .split(',')
        .map(|op| match op.trim().parse::<u8>() {
            Ok(v) if v < 8 => Ok(v),
            _ => Err(anyhow!("invalid 3-bit value {op:?}")),
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Computer { registers, program })
}

/// Division of `a` by `2^shift`; shifts of 64 bits or more leave nothing
fn dv(a: u64, shift: u64) -> u64 {
    u32::try_from(shift)
        .ok()
        .and_then(|s| a.checked_shr(s))
        .unwrap_or(0)
}

impl Computer {
    /// Run to completion with register A set to `a`, collecting the output
    fn run(&self, a: u64) -> Result<Vec<u8>, SolveError> {
        let [_, mut b, mut c] = self.registers;
        let mut a = a;
        let mut ip = 0;
        let mut out = Vec::new();

        while ip + 1 < self.program.len() {
            let (opcode, operand) = (self.program[ip], self.program[ip + 1]);
            let literal = u64::from(operand);
            let combo_value = match operand {
                0..=3 => Some(literal),
                4 => Some(a),
                5 => Some(b),
                6 => Some(c),
                _ => None,
            };
            let combo = || {
                combo_value
                    .ok_or_else(|| SolveError::NoSolution("reserved combo operand 7".into()))
            };
            match opcode {
                0 => a = dv(a, combo()?),
                1 => b ^= literal,
                2 => b = combo()? & 7,
                3 if a != 0 => {
                    ip = operand as usize;
                    continue;
                }
                3 => {}
                4 => b ^= c,
                5 => out.push((combo()? & 7) as u8),
                6 => b = dv(a, combo()?),
                _ => c = dv(a, combo()?),
            }
            ip += 2;
        }
        Ok(out)
    }

    /// Smallest A whose output reproduces the program.
    ///
    /// The programs consume A three bits per output, so A is built from the most significant
    /// digit down: each extra octal digit must make the output match one more trailing
    /// instruction of the program.
    fn find_quine(&self, position: usize, prefix: u64) -> Result<Option<u64>, SolveError> {
        for digit in 0..8 {
            let a = (prefix << 3) | digit;
            if self.run(a)? != self.program[position..] {
                continue;
            }
            if position == 0 {
                return Ok(Some(a));
            }
            if let Some(found) = self.find_quine(position - 1, a)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}

impl Solver for ChronospatialComputer {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        let computer = parse(input)?;
        let out = computer.run(computer.registers[0])?;
        Ok(out
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(","))
    }

    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        let computer = parse(input)?;
        let last = computer
            .program
            .len()
            .checked_sub(1)
            .ok_or_else(|| ParseError::MissingData("empty program".into()))?;
        computer
            .find_quine(last, 0)?
            .map(|a| a.to_string())
            .ok_or_else(|| SolveError::NoSolution("no value of A reproduces the program".into()))
    }
}
