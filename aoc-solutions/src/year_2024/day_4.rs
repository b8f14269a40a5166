//! Ceres Search: find XMAS in a word search

use aoc_solver::{AutoRegisterSolver, SolveError, Solver};

use crate::utils::Grid;

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 4, tags = ["grid"])]
pub struct CeresSearch;

const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Cell at `(row, col)` offset by `steps` times `delta`
fn at(grid: &Grid, row: usize, col: usize, delta: (isize, isize), steps: isize) -> Option<u8> {
    let r = row.checked_add_signed(delta.0 * steps)?;
    let c = col.checked_add_signed(delta.1 * steps)?;
    grid.get(crate::utils::Pos::new(r, c))
}

impl Solver for CeresSearch {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        let grid = Grid::parse(input)?;
        let directions = [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .chain(DIAGONALS);

        let count = grid
            .positions()
            .filter(|p| grid.get(*p) == Some(b'X'))
            .map(|p| {
                directions
                    .clone()
                    .filter(|&d| {
                        b"MAS"
                            .iter()
                            .zip(1..)
                            .all(|(&c, step)| at(&grid, p.row, p.col, d, step) == Some(c))
                    })
                    .count()
            })
            .sum::<usize>();
        Ok(count.to_string())
    }

    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        let grid = Grid::parse(input)?;

        let count = grid
            .positions()
            .filter(|p| grid.get(*p) == Some(b'A'))
            .filter(|p| {
                let corner = |d| at(&grid, p.row, p.col, d, 1);
                let diagonal_ok = |a: Option<u8>, b: Option<u8>| {
                    matches!((a, b), (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')))
                };
                diagonal_ok(corner(DIAGONALS[0]), corner(DIAGONALS[3]))
                    && diagonal_ok(corner(DIAGONALS[1]), corner(DIAGONALS[2]))
            })
            .count();
        Ok(count.to_string())
    }
}
