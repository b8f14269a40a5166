//! Rectangular byte grid shared by the map-shaped puzzles.

use aoc_solver::ParseError;

/// Row/column coordinate inside a [`Grid`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// The four compass directions, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub fn reverse(self) -> Self {
        self.turn_right().turn_right()
    }

    /// Dense index, usable for per-direction lookup tables
    pub fn index(self) -> usize {
        self as usize
    }

    /// Arrow characters used by the puzzles: `^`, `>`, `v`, `<`
    pub fn from_arrow(c: u8) -> Option<Self> {
        match c {
            b'^' => Some(Direction::North),
            b'>' => Some(Direction::East),
            b'v' => Some(Direction::South),
            b'<' => Some(Direction::West),
            _ => None,
        }
    }
}

/// Immutable-size grid of ASCII cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Grid of `width` x `height` cells, all set to `fill`
    pub fn filled(width: usize, height: usize, fill: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Parse rows of equal length; at least one non-empty row is required
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, ParseError> {
        let width = lines
            .first()
            .map(|l| l.as_ref().len())
            .filter(|&w| w > 0)
            .ok_or_else(|| ParseError::MissingData("empty grid".to_string()))?;

        let mut cells = Vec::with_capacity(width * lines.len());
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref().as_bytes();
            if line.len() != width {
                return Err(ParseError::InvalidFormat(format!(
                    "grid row {} has width {}, expected {}",
                    row + 1,
                    line.len(),
                    width
                )));
            }
            cells.extend_from_slice(line);
        }

        Ok(Self {
            width,
            height: lines.len(),
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, pos: Pos) -> Option<u8> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrite a cell. Positions outside the grid are ignored.
    pub fn set(&mut self, pos: Pos, value: u8) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = value;
        }
    }

    /// Neighbouring position one step in `dir`, if it lies inside the grid
    pub fn step(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        let next = match dir {
            Direction::North => Pos::new(pos.row.checked_sub(1)?, pos.col),
            Direction::East => Pos::new(pos.row, pos.col + 1),
            Direction::South => Pos::new(pos.row + 1, pos.col),
            Direction::West => Pos::new(pos.row, pos.col.checked_sub(1)?),
        };
        self.contains(next).then_some(next)
    }

    /// In-grid orthogonal neighbours of `pos`
    pub fn neighbours(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(pos, dir))
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// First position holding `value`, scanning row by row
    pub fn find(&self, value: u8) -> Option<Pos> {
        self.cells
            .iter()
            .position(|&c| c == value)
            .map(|i| self.pos_of(i))
    }

    /// All positions, row by row
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cells.len()).map(|i| self.pos_of(i))
    }

    /// Dense index of a position, for flat per-cell tables
    pub fn index(&self, pos: Pos) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.width + pos.col)
    }

    fn pos_of(&self, index: usize) -> Pos {
        Pos::new(index / self.width, index % self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = Grid::parse(&["...", ".."]).unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
        assert!(matches!(
            Grid::parse::<&str>(&[]).unwrap_err(),
            ParseError::MissingData(_)
        ));
    }

    #[test]
    fn test_step_stays_inside() {
        let grid = Grid::parse(&["ab", "cd"]).unwrap();
        let origin = Pos::new(0, 0);
        assert_eq!(grid.step(origin, Direction::North), None);
        assert_eq!(grid.step(origin, Direction::West), None);
        assert_eq!(grid.step(origin, Direction::East), Some(Pos::new(0, 1)));
        assert_eq!(grid.step(Pos::new(0, 1), Direction::East), None);
        assert_eq!(grid.get(Pos::new(1, 1)), Some(b'd'));
        assert_eq!(grid.find(b'c'), Some(Pos::new(1, 0)));
        assert_eq!(grid.neighbours(origin).count(), 2);
    }

    #[test]
    fn test_turns_are_inverse() {
        for dir in Direction::ALL {
            assert_eq!(dir.turn_right().turn_left(), dir);
            assert_eq!(dir.reverse().reverse(), dir);
        }
    }
}
