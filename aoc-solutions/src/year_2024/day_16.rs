//! Reindeer Maze: cheapest route through a maze where turning costs 1000 and stepping 1

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use aoc_solver::{AutoRegisterSolver, ParseError, SolveError, Solver};

use crate::utils::{Direction, Grid, Pos};

const STEP_COST: u64 = 1;
const TURN_COST: u64 = 1000;

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 16, tags = ["grid", "pathfinding"])]
pub struct ReindeerMaze;

struct Maze {
    grid: Grid,
    start: Pos,
    end: Pos,
}

type State = (Pos, Direction);

impl Maze {
    fn parse(input: &[String]) -> Result<Self, ParseError> {
        let grid = Grid::parse(input)?;
        let start = grid
            .find(b'S')
            .ok_or_else(|| ParseError::MissingData("no start tile".into()))?;
        let end = grid
            .find(b'E')
            .ok_or_else(|| ParseError::MissingData("no end tile".into()))?;
        Ok(Self { grid, start, end })
    }

    fn slot(&self, (pos, dir): State) -> usize {
        self.grid.index(pos).unwrap_or(0) * 4 + dir.index()
    }

    fn open(&self, pos: Pos) -> bool {
        self.grid.get(pos).is_some_and(|c| c != b'#')
    }

    /// Dijkstra over (tile, facing). `backward` walks moves in reverse, giving the cheapest
    /// cost from each state to one of `sources`.
    fn distances(&self, sources: &[State], backward: bool) -> Vec<u64> {
        let mut dist = vec![u64::MAX; self.grid.width() * self.grid.height() * 4];
        let mut heap = BinaryHeap::new();
        for &source in sources {
            dist[self.slot(source)] = 0;
            heap.push(Reverse((0, source)));
        }

        while let Some(Reverse((cost, (pos, dir)))) = heap.pop() {
            if cost > dist[self.slot((pos, dir))] {
                continue;
            }
            let move_dir = if backward { dir.reverse() } else { dir };
            let stepped = self
                .grid
                .step(pos, move_dir)
                .filter(|p| self.open(*p))
                .map(|p| (cost + STEP_COST, (p, dir)));
            let turns = [dir.turn_left(), dir.turn_right()].map(|d| (cost + TURN_COST, (pos, d)));

            for (next_cost, next) in stepped.into_iter().chain(turns) {
                let slot = self.slot(next);
                if next_cost < dist[slot] {
                    dist[slot] = next_cost;
                    heap.push(Reverse((next_cost, next)));
                }
            }
        }
        dist
    }

    fn best_cost(&self, forward: &[u64]) -> Option<u64> {
        Direction::ALL
            .into_iter()
            .map(|d| forward[self.slot((self.end, d))])
            .min()
            .filter(|c| *c != u64::MAX)
    }
}

fn unreachable() -> SolveError {
    SolveError::NoSolution("the end tile cannot be reached".into())
}

impl Solver for ReindeerMaze {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        let maze = Maze::parse(input)?;
        let forward = maze.distances(&[(maze.start, Direction::East)], false);
        let best = maze.best_cost(&forward).ok_or_else(unreachable)?;
        Ok(best.to_string())
    }

    /// Tiles lying on at least one cheapest route
    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        let maze = Maze::parse(input)?;
        let forward = maze.distances(&[(maze.start, Direction::East)], false);
        let best = maze.best_cost(&forward).ok_or_else(unreachable)?;

        let ends: Vec<State> = Direction::ALL
            .into_iter()
            .map(|d| (maze.end, d))
            .filter(|s| forward[maze.slot(*s)] == best)
            .collect();
        let backward = maze.distances(&ends, true);

        let tiles = maze
            .grid
            .positions()
            .filter(|p| {
                Direction::ALL.into_iter().any(|d| {
                    let slot = maze.slot((*p, d));
                    forward[slot] != u64::MAX
                        && backward[slot] != u64::MAX
                        && forward[slot] + backward[slot] == best
                })
            })
            .count();
        Ok(tiles.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::lines;

    const FIRST: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############";

    const SECOND: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################";

    #[test]
    fn test_first_example() {
        let input = lines(FIRST);
        assert_eq!(ReindeerMaze.part_a(&input).unwrap(), "7036");
        assert_eq!(ReindeerMaze.part_b(&input).unwrap(), "45");
    }

    #[test]
    fn test_second_example() {
        let input = lines(SECOND);
        assert_eq!(ReindeerMaze.part_a(&input).unwrap(), "11048");
        assert_eq!(ReindeerMaze.part_b(&input).unwrap(), "64");
    }

    #[test]
    fn test_walled_in_end() {
        let input = lines("#####\n#S#E#\n#####");
        assert!(matches!(
            ReindeerMaze.part_a(&input).unwrap_err(),
            SolveError::NoSolution(_)
        ));
    }
}
