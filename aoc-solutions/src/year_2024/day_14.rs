//! Restroom Redoubt: predict robot positions on a wrapping floor

use anyhow::anyhow;
use aoc_solver::{AutoRegisterSolver, SolveError, Solver};
use regex::Regex;

use crate::utils::invalid_format;

/// Seconds simulated for the safety factor
const SECONDS: i64 = 100;
/// Both coordinate spreads fall below this once the robots form a picture
const MAX_STD_DEV: f64 = 25.0;

/// The floor size is not part of the input; it defaults to the real puzzle's 101x103.
#[derive(Debug, Clone, Copy, AutoRegisterSolver)]
#[aoc(year = 2024, day = 14, tags = ["simulation"])]
pub struct RestroomRedoubt {
    pub width: i64,
    pub height: i64,
}

impl Default for RestroomRedoubt {
    fn default() -> Self {
        Self {
            width: 101,
            height: 103,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Robot {
    pos: (i64, i64),
    vel: (i64, i64),
}

fn parse(input: &[String]) -> anyhow::Result<Vec<Robot>> {
    let pattern = Regex::new(r"^p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)$")?;
    input
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let caps = pattern
                .captures(line.trim())
                .ok_or_else(|| anyhow!("input {line:?} does not match expected format"))?;
            let field = |i: usize| -> anyhow::Result<i64> { Ok(caps[i].parse()?) };
            Ok(Robot {
                pos: (field(1)?, field(2)?),
                vel: (field(3)?, field(4)?),
            })
        })
        .collect()
}

fn std_dev(values: impl Iterator<Item = i64> + Clone) -> f64 {
    let n = values.clone().count().max(1) as f64;
    let mean = values.clone().sum::<i64>() as f64 / n;
    (values.map(|v| (v as f64 - mean).powi(2)).sum::<f64>() / n).sqrt()
}

impl RestroomRedoubt {
    fn position_after(&self, robot: &Robot, seconds: i64) -> (i64, i64) {
        (
            (robot.pos.0 + robot.vel.0 * seconds).rem_euclid(self.width),
            (robot.pos.1 + robot.vel.1 * seconds).rem_euclid(self.height),
        )
    }
}

impl Solver for RestroomRedoubt {
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        let robots = parse(input).map_err(invalid_format)?;
        let (mid_x, mid_y) = (self.width / 2, self.height / 2);

        let mut quadrants = [0u64; 4];
        for robot in &robots {
            let (x, y) = self.position_after(robot, SECONDS);
            if x == mid_x || y == mid_y {
                continue;
            }
            let index = usize::from(x > mid_x) + 2 * usize::from(y > mid_y);
            quadrants[index] += 1;
        }
        Ok(quadrants.iter().product::<u64>().to_string())
    }

    /// First second at which the robots cluster tightly enough to draw a picture
    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        let robots = parse(input).map_err(invalid_format)?;

        // Positions repeat after width * height seconds
        for second in 0..self.width * self.height {
            let positions: Vec<(i64, i64)> = robots
                .iter()
                .map(|r| self.position_after(r, second))
                .collect();
            let spread_x = std_dev(positions.iter().map(|p| p.0));
            let spread_y = std_dev(positions.iter().map(|p| p.1));
            if spread_x < MAX_STD_DEV && spread_y < MAX_STD_DEV {
                return Ok(second.to_string());
            }
        }
        Err(SolveError::NoSolution("robots never cluster".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::lines;

    const EXAMPLE: &str = "\
p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3";

    fn small_room() -> RestroomRedoubt {
        RestroomRedoubt {
            width: 11,
            height: 7,
        }
    }

    #[test]
    fn test_example_safety_factor() {
        assert_eq!(small_room().part_a(&lines(EXAMPLE)).unwrap(), "12");
    }

    #[test]
    fn test_wraps_around() {
        let robot = Robot {
            pos: (2, 4),
            vel: (2, -3),
        };
        assert_eq!(small_room().position_after(&robot, 5), (1, 3));
    }

    #[test]
    fn test_cluster_in_small_room() {
        // Every robot in a small room sits well within the spread limit
        assert_eq!(small_room().part_b(&lines(EXAMPLE)).unwrap(), "0");
    }

    #[test]
    fn test_rejects_garbage() {
        let err = small_room().part_a(&lines("p=1,2 v=3")).unwrap_err();
        assert!(matches!(err, SolveError::Parse(_)));
    }
}
