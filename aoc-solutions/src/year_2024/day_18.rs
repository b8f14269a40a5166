//! RAM Run: shortest path through a memory grid as bytes fall into it

use std::collections::VecDeque;

use anyhow::{Context, anyhow, ensure};
use aoc_solver::{AutoRegisterSolver, SolveError, Solver};

use crate::utils::{Grid, Pos, invalid_format};

/// Memory size and fallen byte count are not part of the input; they default to the real
/// puzzle's 71x71 space with 1024 bytes.
#[derive(Debug, Clone, Copy, AutoRegisterSolver)]
#[aoc(year = 2024, day = 18, tags = ["grid", "pathfinding"])]
pub struct RamRun {
    pub size: usize,
    pub fallen: usize,
}

impl Default for RamRun {
    fn default() -> Self {
        Self {
            size: 71,
            fallen: 1024,
        }
    }
}

impl RamRun {
    fn parse(&self, input: &[String]) -> anyhow::Result<Vec<Pos>> {
        input
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                let (x, y) = line
                    .trim()
                    .split_once(',')
                    .ok_or_else(|| anyhow!("(line {}) expected X,Y", idx + 1))?;
                let pos = Pos::new(
                    y.parse().with_context(|| format!("(line {})", idx + 1))?,
                    x.parse().with_context(|| format!("(line {})", idx + 1))?,
                );
                ensure!(
                    pos.row < self.size && pos.col < self.size,
                    "(line {}) byte outside the {}x{} memory space",
                    idx + 1,
                    self.size,
                    self.size
                );
                Ok(pos)
            })
            .collect()
    }

    /// Steps from the top-left to the bottom-right corner once `bytes` have fallen
    fn shortest_path(&self, bytes: &[Pos]) -> Option<usize> {
        if self.size == 0 {
            return None;
        }
        let mut grid = Grid::filled(self.size, self.size, b'.');
        for byte in bytes {
            grid.set(*byte, b'#');
        }
        let start = Pos::new(0, 0);
        let exit = Pos::new(self.size - 1, self.size - 1);
        if grid.get(start) != Some(b'.') || grid.get(exit) != Some(b'.') {
            return None;
        }

        let mut steps = vec![usize::MAX; self.size * self.size];
        let mut queue = VecDeque::from([start]);
        steps[grid.index(start)?] = 0;
        while let Some(pos) = queue.pop_front() {
            let here = steps[grid.index(pos)?];
            if pos == exit {
                return Some(here);
            }
            for next in grid.neighbours(pos) {
                let Some(i) = grid.index(next) else { continue };
                if grid.get(next) == Some(b'.') && steps[i] == usize::MAX {
                    steps[i] = here + 1;
                    queue.push_back(next);
                }
            }
        }
        None
    }
}

impl Solver for RamRun {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        let bytes = self.parse(input).map_err(invalid_format)?;
        let fallen = &bytes[..self.fallen.min(bytes.len())];
        self.shortest_path(fallen)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::NoSolution("the exit is unreachable".into()))
    }

    /// Coordinates of the first byte that cuts the exit off
    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        let bytes = self.parse(input).map_err(invalid_format)?;

        // Reachability only gets worse as bytes fall, so binary search the byte count
        let cut_off = (0..=bytes.len())
            .collect::<Vec<_>>()
            .partition_point(|&n| self.shortest_path(&bytes[..n]).is_some());
        let byte = cut_off
            .checked_sub(1)
            .and_then(|i| bytes.get(i))
            .ok_or_else(|| SolveError::NoSolution("the exit is never cut off".into()))?;
        Ok(format!("{},{}", byte.col, byte.row))
    }
}
