//! Character grids addressed by signed row/column positions.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use advent_solver::ParseError;

/// Row/column position. Signed so that off-grid positions can be represented
/// and simply fail bounds checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: i64,
    pub col: i64,
}

impl Pos {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// The adjacent position in `dir`
    pub fn step(self, dir: Direction) -> Self {
        self + dir.offset()
    }

    pub fn manhattan(self, other: Self) -> u64 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// All eight surrounding positions, unchecked
    pub fn around(self) -> impl Iterator<Item = Pos> {
        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| Pos::new(dr, dc)))
            .filter(|d| *d != Pos::default())
            .map(move |d| self + d)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, rhs: Pos) -> Pos {
        Pos::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Pos;

    fn sub(self, rhs: Pos) -> Pos {
        Pos::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<i64> for Pos {
    type Output = Pos;

    fn mul(self, rhs: i64) -> Pos {
        Pos::new(self.row * rhs, self.col * rhs)
    }
}

/// Compass direction with north pointing to row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Clockwise from north
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
        self.turn_right().opposite()
    }

    pub fn opposite(self) -> Self {
        self.turn_right().turn_right()
    }

    pub fn offset(self) -> Pos {
        match self {
            Direction::North => Pos::new(-1, 0),
            Direction::East => Pos::new(0, 1),
            Direction::South => Pos::new(1, 0),
            Direction::West => Pos::new(0, -1),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Stable index in `0..4`, following [`Direction::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Rectangular grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl Grid<u8> {
    /// Parse text into a byte grid without interpreting the cells.
    pub fn parse_bytes(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, Some)
    }
}

impl<T> Grid<T> {
    /// Parse text into a grid, mapping each byte through `cell`.
    ///
    /// Blank lines are skipped. Rows must all have the same width and `cell`
    /// returning `None` rejects the byte.
    pub fn parse_with(input: &str, mut cell: impl FnMut(u8) -> Option<T>) -> Result<Self, ParseError> {
        let mut cells = Vec::with_capacity(input.len());
        let mut width = None;
        let mut height = 0;

        for (row, line) in input.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let line = line.trim_end();
            match width {
                None => width = Some(line.len()),
                Some(w) if w != line.len() => {
                    return Err(ParseError::invalid(format!(
                        "row {} has {} columns, expected {w}",
                        row + 1,
                        line.len()
                    )));
                }
                Some(_) => {}
            }
            for (col, b) in line.bytes().enumerate() {
                let value = cell(b).ok_or_else(|| {
                    ParseError::invalid(format!(
                        "unexpected {:?} at row {}, column {}",
                        b as char,
                        row + 1,
                        col + 1
                    ))
                })?;
                cells.push(value);
            }
            height += 1;
        }

        let width = width.ok_or_else(|| ParseError::missing("empty grid"))?;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn filled(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            cells: vec![value; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Pos) -> bool {
        (0..self.height as i64).contains(&pos.row) && (0..self.width as i64).contains(&pos.col)
    }

    fn offset(&self, pos: Pos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.row as usize * self.width + pos.col as usize)
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.offset(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        self.offset(pos).map(|i| &mut self.cells[i])
    }

    /// In-bounds orthogonal neighbours of `pos`
    pub fn neighbours(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |d| pos.step(d))
            .filter(|p| self.contains(*p))
    }

    /// In-bounds neighbours of `pos`, diagonals included
    pub fn neighbours8(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        pos.around().filter(|p| self.contains(*p))
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<T> {
        let (width, height) = (self.width as i64, self.height as i64);
        (0..height).flat_map(move |row| (0..width).map(move |col| Pos::new(row, col)))
    }

    /// Positions with their cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> + '_ {
        self.positions().zip(self.cells.iter())
    }

    /// First position (row-major) whose cell matches
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Pos> {
        self.iter().find(|(_, v)| pred(v)).map(|(p, _)| p)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter().skip(col).step_by(self.width)
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    /// Panics when `pos` is outside the grid; use [`Grid::get`] otherwise.
    fn index(&self, pos: Pos) -> &T {
        match self.offset(pos) {
            Some(i) => &self.cells[i],
            None => panic!("{pos} is outside a {}x{} grid", self.height, self.width),
        }
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut T {
        match self.offset(pos) {
            Some(i) => &mut self.cells[i],
            None => panic!("{pos} is outside a {}x{} grid", self.height, self.width),
        }
    }
}

impl fmt::Display for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}
