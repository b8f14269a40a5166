//! Race Condition: count cheats through walls that save enough time on a single-lane track

use aoc_solver::{AutoRegisterSolver, ParseError, SolveError, Solver};
use rayon::prelude::*;

use crate::utils::{Grid, Pos};

/// The minimum saving is not part of the input; it defaults to the real puzzle's 100
/// picoseconds.
#[derive(Debug, Clone, Copy, AutoRegisterSolver)]
#[aoc(year = 2024, day = 20, tags = ["grid", "parallel"])]
pub struct RaceCondition {
    pub min_saving: usize,
}

impl Default for RaceCondition {
    fn default() -> Self {
        Self { min_saving: 100 }
    }
}

/// Track tiles in race order, from `S` to `E`
fn track(input: &[String]) -> Result<Vec<Pos>, SolveError> {
    let grid = Grid::parse(input)?;
    let start = grid
        .find(b'S')
        .ok_or_else(|| ParseError::MissingData("no start tile".into()))?;
    let end = grid
        .find(b'E')
        .ok_or_else(|| ParseError::MissingData("no end tile".into()))?;

    let mut path = vec![start];
    let mut previous: Option<Pos> = None;
    let mut current = start;
    while current != end {
        let next = grid
            .neighbours(current)
            .find(|n| Some(*n) != previous && grid.get(*n) != Some(b'#'))
            .ok_or_else(|| SolveError::NoSolution("the track is broken".into()))?;
        previous = Some(current);
        current = next;
        path.push(next);
        if path.len() > grid.width() * grid.height() {
            return Err(SolveError::NoSolution("the track loops".into()));
        }
    }
    Ok(path)
}

impl RaceCondition {
    /// Cheats of at most `max_cheat` picoseconds saving at least `min_saving`
    fn count_cheats(&self, path: &[Pos], max_cheat: usize) -> usize {
        (0..path.len())
            .into_par_iter()
            .map(|i| {
                path.iter()
                    .enumerate()
                    .skip(i + self.min_saving.max(1))
                    .filter(|&(j, to)| {
                        let distance = path[i].manhattan(*to);
                        distance <= max_cheat && j - i - distance >= self.min_saving
                    })
                    .count()
            })
            .sum()
    }
}

impl Solver for RaceCondition {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        let path = track(input)?;
        Ok(self.count_cheats(&path, 2).to_string())
    }

    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        let path = track(input)?;
        Ok(self.count_cheats(&path, 20).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::lines;

    const EXAMPLE: &str = "\
###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############";

    #[test]
    fn test_example_two_picosecond_cheats() {
        let input = lines(EXAMPLE);
        let solver = RaceCondition { min_saving: 20 };
        assert_eq!(solver.part_a(&input).unwrap(), "5");
        let solver = RaceCondition { min_saving: 1 };
        assert_eq!(solver.part_a(&input).unwrap(), "44");
    }

    #[test]
    fn test_example_long_cheats() {
        let input = lines(EXAMPLE);
        let solver = RaceCondition { min_saving: 76 };
        assert_eq!(solver.part_b(&input).unwrap(), "3");
        let solver = RaceCondition { min_saving: 50 };
        assert_eq!(solver.part_b(&input).unwrap(), "285");
    }

    #[test]
    fn test_track_length() {
        let path = track(&lines(EXAMPLE)).unwrap();
        assert_eq!(path.len(), 85);
    }
}
