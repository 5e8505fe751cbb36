//! Pipe maze: the loop through the start tile and the area it encloses.

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::grid::{Direction, Grid, Pos};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 10, tags = ["2023", "grid"])]
pub struct Solver;

fn connections(tile: u8) -> &'static [Direction] {
    use Direction::*;
    match tile {
        b'|' => &[North, South],
        b'-' => &[East, West],
        b'L' => &[North, East],
        b'J' => &[North, West],
        b'7' => &[South, West],
        b'F' => &[South, East],
        _ => &[],
    }
}

pub struct Maze {
    grid: Grid<u8>,
    /// Loop corners and straights in walking order, starting at `S`
    path: Option<Vec<Pos>>,
}

impl Maze {
    fn walk(&self) -> Result<Vec<Pos>, SolveError> {
        let start = self
            .grid
            .find(|&b| b == b'S')
            .ok_or_else(|| SolveError::failed("no start tile"))?;

        let mut dir = Direction::ALL
            .into_iter()
            .find(|&d| {
                self.grid
                    .get(start.step(d))
                    .is_some_and(|&t| connections(t).contains(&d.opposite()))
            })
            .ok_or_else(|| SolveError::failed("start tile is not connected"))?;

        let mut path = vec![start];
        let mut pos = start.step(dir);
        while pos != start {
            path.push(pos);
            let tile = self.grid.get(pos).copied().unwrap_or(b'.');
            dir = connections(tile)
                .iter()
                .copied()
                .find(|&d| d != dir.opposite())
                .filter(|_| connections(tile).contains(&dir.opposite()))
                .ok_or_else(|| SolveError::failed(format!("pipe broken at {pos}")))?;
            pos = pos.step(dir);
        }
        log::debug!("loop length {}", path.len());
        Ok(path)
    }

    fn path(&mut self) -> Result<&[Pos], SolveError> {
        if self.path.is_none() {
            self.path = Some(self.walk()?);
        }
        Ok(self.path.as_deref().unwrap_or_default())
    }
}

impl PuzzleParser for Solver {
    type Input<'a> = Maze;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let grid = Grid::parse_with(input, |b| b"|-LJ7F.S".contains(&b).then_some(b))?;
        Ok(Maze { grid, path: None })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok((input.path()?.len() / 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let path = input.path()?;

        // shoelace gives twice the polygon area through the tile centres,
        // Pick's theorem turns that into the count of interior tiles
        let twice_area = path
            .iter()
            .zip(path.iter().cycle().skip(1))
            .map(|(a, b)| a.row * b.col - a.col * b.row)
            .sum::<i64>()
            .abs();
        let boundary = path.len() as i64;
        let interior = (twice_area - boundary) / 2 + 1;
        Ok(interior.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    #[test]
    fn test_part1_examples() {
        let simple = "-L|F7\n7S-7|\nL|7||\n-L-J|\nL|-JF\n";
        assert_eq!(solve::<Solver>(simple, 1), "4");

        let complex = "7-F7-\n.FJ|7\nSJLL7\n|F--J\nLJ.LJ\n";
        assert_eq!(solve::<Solver>(complex, 1), "8");
    }

    #[test]
    fn test_part2_examples() {
        let open = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";
        assert_eq!(solve::<Solver>(open, 2), "4");

        let squeezed = "\
..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........
";
        assert_eq!(solve::<Solver>(squeezed, 2), "4");

        let larger = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";
        assert_eq!(solve::<Solver>(larger, 2), "8");
    }

    #[test]
    fn test_missing_start_fails() {
        let mut maze = Solver::parse("F7\nLJ").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut maze).is_err());
    }
}
