//! Resonant Collinearity: count antinodes of same-frequency antenna pairs

use std::collections::{HashMap, HashSet};

use aoc_solver::{AutoRegisterSolver, SolveError, Solver};
use itertools::Itertools;

use crate::utils::{Grid, Pos};

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 8, tags = ["grid"])]
pub struct ResonantCollinearity;

struct City {
    grid: Grid,
    antennas: HashMap<u8, Vec<Pos>>,
}

impl City {
    fn parse(input: &[String]) -> Result<Self, SolveError> {
        let grid = Grid::parse(input)?;
        let antennas = grid
            .positions()
            .filter_map(|p| grid.get(p).filter(u8::is_ascii_alphanumeric).map(|f| (f, p)))
            .into_group_map();
        Ok(Self { grid, antennas })
    }

    fn offset(&self, pos: Pos, delta: (isize, isize), times: isize) -> Option<Pos> {
        let next = Pos::new(
            pos.row.checked_add_signed(delta.0 * times)?,
            pos.col.checked_add_signed(delta.1 * times)?,
        );
        self.grid.contains(next).then_some(next)
    }

    /// Count antinode cells; `harmonics` extends each pair's line across the whole map
    fn antinodes(&self, harmonics: bool) -> usize {
        let mut found = HashSet::new();
        for positions in self.antennas.values() {
            for (a, b) in positions.iter().tuple_combinations() {
                let delta = (
                    b.row as isize - a.row as isize,
                    b.col as isize - a.col as isize,
                );
                if harmonics {
                    found.extend((0..).map_while(|k| self.offset(*b, delta, k)));
                    found.extend((0..).map_while(|k| self.offset(*a, delta, -k)));
                } else {
                    found.extend(self.offset(*b, delta, 1));
                    found.extend(self.offset(*a, delta, -1));
                }
            }
        }
        found.len()
    }
}

impl Solver for ResonantCollinearity {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        Ok(City::parse(input)?.antinodes(false).to_string())
    }

    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        Ok(City::parse(input)?.antinodes(true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::lines;

    const EXAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............";

    #[test]
    fn test_example() {
        let input = lines(EXAMPLE);
        assert_eq!(ResonantCollinearity.part_a(&input).unwrap(), "14");
        assert_eq!(ResonantCollinearity.part_b(&input).unwrap(), "34");
    }
}
