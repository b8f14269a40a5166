//! Guard Gallivant: follow a patrolling guard and find obstructions that trap it in a loop

use aoc_solver::{AutoRegisterSolver, ParseError, SolveError, Solver};

use crate::utils::{Direction, Grid, Pos};

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 6, tags = ["grid"])]
pub struct GuardGallivant;

struct Lab {
    grid: Grid,
    start: Pos,
    facing: Direction,
}

impl Lab {
    fn parse(input: &[String]) -> Result<Self, ParseError> {
        let mut grid = Grid::parse(input)?;
        let (start, facing) = grid
            .positions()
            .find_map(|p| grid.get(p).and_then(Direction::from_arrow).map(|d| (p, d)))
            .ok_or_else(|| ParseError::MissingData("no guard on the map".into()))?;
        grid.set(start, b'.');
        Ok(Self {
            grid,
            start,
            facing,
        })
    }

    fn blocked(&self, pos: Pos, extra: Option<Pos>) -> bool {
        self.grid.get(pos) == Some(b'#') || extra == Some(pos)
    }

    /// Walk from `(pos, dir)` until the guard leaves the map (`false`) or repeats a turn
    /// (`true`). `extra` is an additional obstruction.
    fn loops_from(&self, mut pos: Pos, mut dir: Direction, extra: Option<Pos>) -> bool {
        let mut turns = vec![[false; 4]; self.grid.width() * self.grid.height()];
        loop {
            let Some(next) = self.grid.step(pos, dir) else {
                return false;
            };
            if self.blocked(next, extra) {
                let Some(i) = self.grid.index(pos) else {
                    return false;
                };
                if std::mem::replace(&mut turns[i][dir.index()], true) {
                    return true;
                }
                dir = dir.turn_right();
            } else {
                pos = next;
            }
        }
    }

    /// Every step of the unobstructed patrol, as the state before the step and the cell
    /// stepped into
    fn patrol(&self) -> Vec<(Pos, Direction, Pos)> {
        let mut steps = Vec::new();
        let (mut pos, mut dir) = (self.start, self.facing);
        // Without extra obstructions the patrol cannot repeat a state more than the grid holds
        let limit = self.grid.width() * self.grid.height() * 4;
        while let Some(next) = self.grid.step(pos, dir) {
            if steps.len() > limit {
                break;
            }
            if self.blocked(next, None) {
                dir = dir.turn_right();
            } else {
                steps.push((pos, dir, next));
                pos = next;
            }
        }
        steps
    }
}

impl Solver for GuardGallivant {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        let lab = Lab::parse(input)?;
        if lab.loops_from(lab.start, lab.facing, None) {
            return Err(SolveError::NoSolution("the guard never leaves".into()));
        }

        let mut visited = vec![false; lab.grid.width() * lab.grid.height()];
        let mark = |visited: &mut Vec<bool>, p: Pos| {
            if let Some(i) = lab.grid.index(p) {
                visited[i] = true;
            }
        };
        mark(&mut visited, lab.start);
        for (_, _, next) in lab.patrol() {
            mark(&mut visited, next);
        }
        Ok(visited.iter().filter(|v| **v).count().to_string())
    }

    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        let lab = Lab::parse(input)?;

        // An obstruction only matters on a cell the guard reaches; test it from the state
        // just before the first time the guard enters that cell.
        let mut tried = vec![false; lab.grid.width() * lab.grid.height()];
        if let Some(i) = lab.grid.index(lab.start) {
            tried[i] = true;
        }

        let mut count = 0usize;
        for (pos, dir, next) in lab.patrol() {
            let Some(i) = lab.grid.index(next) else {
                continue;
            };
            if std::mem::replace(&mut tried[i], true) {
                continue;
            }
            if lab.loops_from(pos, dir, Some(next)) {
                count += 1;
            }
        }
        Ok(count.to_string())
    }
}
