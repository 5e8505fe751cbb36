//! Parabolic reflector dish: rolling rocks and the load they put on the
//! north beams.

use std::collections::HashMap;

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::grid::{Direction, Grid, Pos};

const SPIN_CYCLES: usize = 1_000_000_000;

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 14, tags = ["2023", "simulation"])]
pub struct Solver;

/// Position `step` cells in from the edge that `dir` points at, along `lane`.
fn cell(grid: &Grid<u8>, dir: Direction, lane: usize, step: usize) -> Pos {
    let (h, w) = (grid.height() - 1, grid.width() - 1);
    let (row, col) = match dir {
        Direction::North => (step, lane),
        Direction::South => (h - step, lane),
        Direction::West => (lane, step),
        Direction::East => (lane, w - step),
    };
    Pos::new(row as i64, col as i64)
}

fn tilt(grid: &mut Grid<u8>, dir: Direction) {
    let (lanes, len) = if dir.is_vertical() {
        (grid.width(), grid.height())
    } else {
        (grid.height(), grid.width())
    };
    for lane in 0..lanes {
        let mut free = 0;
        for step in 0..len {
            let pos = cell(grid, dir, lane, step);
            match grid[pos] {
                b'#' => free = step + 1,
                b'O' => {
                    grid[pos] = b'.';
                    let target = cell(grid, dir, lane, free);
                    grid[target] = b'O';
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

fn spin(grid: &mut Grid<u8>) {
    for dir in [Direction::North, Direction::West, Direction::South, Direction::East] {
        tilt(grid, dir);
    }
}

fn north_load(grid: &Grid<u8>) -> usize {
    grid.iter()
        .filter(|&(_, &b)| b == b'O')
        .map(|(p, _)| grid.height() - p.row as usize)
        .sum()
}

impl PuzzleParser for Solver {
    type Input<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        Grid::parse_with(input, |b| b"O#.".contains(&b).then_some(b))
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut grid = input.clone();
        tilt(&mut grid, Direction::North);
        Ok(north_load(&grid).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut grid = input.clone();
        let mut seen = HashMap::from([(grid.clone(), 0)]);
        // loads[k] is the load after k spin cycles
        let mut loads = vec![north_load(&grid)];

        for done in 1..=SPIN_CYCLES {
            spin(&mut grid);
            if let Some(&first) = seen.get(&grid) {
                let period = done - first;
                log::debug!("spin cycle repeats after {first} cycles, period {period}");
                let offset = (SPIN_CYCLES - first) % period;
                return Ok(loads[first + offset].to_string());
            }
            seen.insert(grid.clone(), done);
            loads.push(north_load(&grid));
        }
        Ok(north_load(&grid).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const EXAMPLE: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

    #[test]
    fn test_part1_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "136");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "64");
    }

    #[test]
    fn test_single_spin() {
        let mut grid = Solver::parse(EXAMPLE).unwrap();
        spin(&mut grid);
        let expected = "\
.....#....
....#...O#
...OO##...
.OO#......
.....OOO#.
.O#...O#.#
....O#....
......OOOO
#...O###..
#..OO#....
";
        assert_eq!(grid.to_string(), expected);
    }
}
