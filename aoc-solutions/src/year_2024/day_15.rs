//! Warehouse Woes: push boxes around a warehouse following a robot's moves

use std::collections::HashSet;

use aoc_solver::{AutoRegisterSolver, ParseError, SolveError, Solver};

use crate::utils::{Direction, Grid, Pos, split_sections};

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 15, tags = ["grid", "simulation"])]
pub struct WarehouseWoes;

struct Warehouse {
    grid: Grid,
    robot: Pos,
}

fn parse(input: &[String], widen: bool) -> Result<(Warehouse, Vec<Direction>), ParseError> {
    let (map, moves) = split_sections(input)?;

    let rows: Vec<String> = if widen {
        map.iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        'O' => "[]",
                        '@' => "@.",
                        '#' => "##",
                        _ => "..",
                    })
                    .collect()
            })
            .collect()
    } else {
        map.to_vec()
    };

    let mut grid = Grid::parse(&rows)?;
    let robot = grid
        .find(b'@')
        .ok_or_else(|| ParseError::MissingData("no robot in the warehouse".into()))?;
    grid.set(robot, b'.');

    let moves = moves
        .iter()
        .flat_map(|line| line.trim().bytes())
        .map(|c| {
            Direction::from_arrow(c)
                .ok_or_else(|| ParseError::InvalidFormat(format!("unknown move {:?}", c as char)))
        })
        .collect::<Result<_, _>>()?;

    Ok((Warehouse { grid, robot }, moves))
}

impl Warehouse {
    /// Every box cell that has to move for the robot to step in `dir`, or `None` when a
    /// wall is in the way
    fn pushed_cells(&self, dir: Direction) -> Option<Vec<Pos>> {
        let mut frontier = vec![self.robot];
        let mut seen = HashSet::new();

        while let Some(pos) = frontier.pop() {
            let next = self.grid.step(pos, dir)?;
            if !seen.insert(next) {
                continue;
            }
            match self.grid.get(next)? {
                b'#' => return None,
                b'O' => frontier.push(next),
                half @ (b'[' | b']') => {
                    frontier.push(next);
                    // Vertical pushes drag the other half of a wide box along
                    if matches!(dir, Direction::North | Direction::South) {
                        let side = if half == b'[' {
                            Direction::East
                        } else {
                            Direction::West
                        };
                        let partner = self.grid.step(next, side)?;
                        if seen.insert(partner) {
                            frontier.push(partner);
                        }
                    }
                }
                _ => {}
            }
        }

        Some(
            seen.into_iter()
                .filter(|p| matches!(self.grid.get(*p), Some(b'O' | b'[' | b']')))
                .collect(),
        )
    }

    fn step(&mut self, dir: Direction) {
        let Some(cells) = self.pushed_cells(dir) else {
            return;
        };
        let Some(robot) = self.grid.step(self.robot, dir) else {
            return;
        };

        let moved: Vec<(Pos, u8)> = cells
            .iter()
            .filter_map(|p| Some((self.grid.step(*p, dir)?, self.grid.get(*p)?)))
            .collect();
        for p in &cells {
            self.grid.set(*p, b'.');
        }
        for (p, c) in moved {
            self.grid.set(p, c);
        }
        self.robot = robot;
    }

    fn gps_sum(&self) -> usize {
        self.grid
            .positions()
            .filter(|p| matches!(self.grid.get(*p), Some(b'O' | b'[')))
            .map(|p| 100 * p.row + p.col)
            .sum()
    }
}

fn simulate(input: &[String], widen: bool) -> Result<String, SolveError> {
    let (mut warehouse, moves) = parse(input, widen)?;
    for dir in moves {
        warehouse.step(dir);
    }
    Ok(warehouse.gps_sum().to_string())
}

impl Solver for WarehouseWoes {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        simulate(input, false)
    }

    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        simulate(input, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::lines;

    const SMALL: &str = "\
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<";

    const WIDE: &str = "\
#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^^<<^^";

    #[test]
    fn test_small_example() {
        assert_eq!(WarehouseWoes.part_a(&lines(SMALL)).unwrap(), "2028");
    }

    #[test]
    fn test_wide_example() {
        assert_eq!(WarehouseWoes.part_b(&lines(WIDE)).unwrap(), "618");
    }

    #[test]
    fn test_missing_separator_is_format_error() {
        let input = lines("#####\n#@O.#\n#####\n<>");
        let err = WarehouseWoes.part_a(&input).unwrap_err();
        assert!(matches!(err, SolveError::Parse(ParseError::InvalidFormat(_))));
    }
}
