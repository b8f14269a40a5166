//! Hoof It: score and rate hiking trails on a topographic map

use std::collections::HashSet;

use aoc_solver::{AutoRegisterSolver, ParseError, SolveError, Solver};

use crate::utils::{Grid, Pos};

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 10, tags = ["grid"])]
pub struct HoofIt;

/// Heights per cell; `.` marks impassable ground
struct TopographicMap {
    grid: Grid,
}

impl TopographicMap {
    fn parse(input: &[String]) -> Result<Self, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some(bad) = grid
            .positions()
            .find(|p| !matches!(grid.get(*p), Some(b'0'..=b'9' | b'.')))
        {
            return Err(ParseError::InvalidFormat(format!(
                "unexpected map character at row {} column {}",
                bad.row + 1,
                bad.col + 1
            )));
        }
        Ok(Self { grid })
    }

    fn height(&self, pos: Pos) -> Option<u8> {
        self.grid.get(pos).filter(u8::is_ascii_digit).map(|c| c - b'0')
    }

    fn trailheads(&self) -> impl Iterator<Item = Pos> + '_ {
        self.grid.positions().filter(|p| self.height(*p) == Some(0))
    }

    /// Summits reachable from `pos`, once per distinct path
    fn ascend(&self, pos: Pos, summits: &mut Vec<Pos>) {
        let Some(height) = self.height(pos) else {
            return;
        };
        if height == 9 {
            summits.push(pos);
            return;
        }
        for next in self.grid.neighbours(pos) {
            if self.height(next) == Some(height + 1) {
                self.ascend(next, summits);
            }
        }
    }

    fn summits_from(&self, head: Pos) -> Vec<Pos> {
        let mut summits = Vec::new();
        self.ascend(head, &mut summits);
        summits
    }
}

impl Solver for HoofIt {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        let map = TopographicMap::parse(input)?;
        let score: usize = map
            .trailheads()
            .map(|head| map.summits_from(head).into_iter().collect::<HashSet<_>>().len())
            .sum();
        Ok(score.to_string())
    }

    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        let map = TopographicMap::parse(input)?;
        let rating: usize = map.trailheads().map(|head| map.summits_from(head).len()).sum();
        Ok(rating.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::lines;

    const EXAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732";

    #[test]
    fn test_example() {
        let input = lines(EXAMPLE);
        assert_eq!(HoofIt.part_a(&input).unwrap(), "36");
        assert_eq!(HoofIt.part_b(&input).unwrap(), "81");
    }

    #[test]
    fn test_impassable_tiles() {
        let input = lines("...0...\n...1...\n...2...\n6543456\n7.....7\n8.....8\n9.....9");
        assert_eq!(HoofIt.part_a(&input).unwrap(), "2");
    }
}
