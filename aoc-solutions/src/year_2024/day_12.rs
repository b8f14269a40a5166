//! Garden Groups: fence every region of a garden plot map

use aoc_solver::{AutoRegisterSolver, SolveError, Solver};

use crate::utils::{Direction, Grid, Pos};

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 12, tags = ["grid"])]
pub struct GardenGroups;

struct Region {
    area: usize,
    perimeter: usize,
    /// A polygon has as many sides as corners
    corners: usize,
}

fn same_plant(grid: &Grid, plant: u8, pos: Option<Pos>) -> bool {
    pos.and_then(|p| grid.get(p)) == Some(plant)
}

fn corners_at(grid: &Grid, pos: Pos, plant: u8) -> usize {
    Direction::ALL
        .into_iter()
        .filter(|&d| {
            let side = grid.step(pos, d);
            let other = grid.step(pos, d.turn_right());
            let diagonal = side.and_then(|s| grid.step(s, d.turn_right()));

            let side_same = same_plant(grid, plant, side);
            let other_same = same_plant(grid, plant, other);
            let outer = !side_same && !other_same;
            let inner = side_same && other_same && !same_plant(grid, plant, diagonal);
            outer || inner
        })
        .count()
}

fn regions(grid: &Grid) -> Vec<Region> {
    let mut seen = vec![false; grid.width() * grid.height()];
    let mut regions = Vec::new();

    for start in grid.positions() {
        let (Some(i), Some(plant)) = (grid.index(start), grid.get(start)) else {
            continue;
        };
        if std::mem::replace(&mut seen[i], true) {
            continue;
        }

        let mut region = Region {
            area: 0,
            perimeter: 0,
            corners: 0,
        };
        let mut stack = vec![start];
        while let Some(pos) = stack.pop() {
            region.area += 1;
            region.corners += corners_at(grid, pos, plant);
            let same: Vec<Pos> = grid
                .neighbours(pos)
                .filter(|n| grid.get(*n) == Some(plant))
                .collect();
            region.perimeter += 4 - same.len();
            for next in same {
                if let Some(j) = grid.index(next)
                    && !std::mem::replace(&mut seen[j], true)
                {
                    stack.push(next);
                }
            }
        }
        regions.push(region);
    }
    regions
}

impl Solver for GardenGroups {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        let grid = Grid::parse(input)?;
        let price: usize = regions(&grid).iter().map(|r| r.area * r.perimeter).sum();
        Ok(price.to_string())
    }

    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        let grid = Grid::parse(input)?;
        let price: usize = regions(&grid).iter().map(|r| r.area * r.corners).sum();
        Ok(price.to_string())
    }
}
