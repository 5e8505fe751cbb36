//! The floor will be lava: light beams bouncing through mirrors and
//! splitters.

use rayon::prelude::*;

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::grid::{Direction, Grid, Pos};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 16, tags = ["2023", "grid"])]
pub struct Solver;

/// Directions a beam travelling in `dir` leaves `tile` in, with how many of
/// the two slots are used.
fn deflect(tile: u8, dir: Direction) -> ([Direction; 2], usize) {
    use Direction::*;
    match (tile, dir) {
        (b'/', North) => ([East, East], 1),
        (b'/', East) => ([North, North], 1),
        (b'/', South) => ([West, West], 1),
        (b'/', West) => ([South, South], 1),
        (b'\\', North) => ([West, West], 1),
        (b'\\', West) => ([North, North], 1),
        (b'\\', South) => ([East, East], 1),
        (b'\\', East) => ([South, South], 1),
        (b'|', East | West) => ([North, South], 2),
        (b'-', North | South) => ([East, West], 2),
        _ => ([dir, dir], 1),
    }
}

/// Number of tiles a beam entering at `start` heading `dir` passes through.
fn energized(grid: &Grid<u8>, start: Pos, dir: Direction) -> usize {
    // bit `d.index()` set once a beam went through heading `d`
    let mut seen = Grid::filled(grid.width(), grid.height(), 0u8);
    let mut beams = vec![(start, dir)];

    while let Some((pos, dir)) = beams.pop() {
        let Some(&tile) = grid.get(pos) else {
            continue;
        };
        let mask = 1u8 << dir.index();
        if seen[pos] & mask != 0 {
            continue;
        }
        seen[pos] |= mask;

        let (outs, count) = deflect(tile, dir);
        beams.extend(outs[..count].iter().map(|&d| (pos.step(d), d)));
    }

    seen.iter().filter(|&(_, &m)| m != 0).count()
}

impl PuzzleParser for Solver {
    type Input<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        Grid::parse_with(input, |b| b"./\\|-".contains(&b).then_some(b))
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(energized(input, Pos::new(0, 0), Direction::East).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let (h, w) = (input.height() as i64, input.width() as i64);
        let entries: Vec<(Pos, Direction)> = (0..h)
            .flat_map(|r| {
                [
                    (Pos::new(r, 0), Direction::East),
                    (Pos::new(r, w - 1), Direction::West),
                ]
            })
            .chain((0..w).flat_map(|c| {
                [
                    (Pos::new(0, c), Direction::South),
                    (Pos::new(h - 1, c), Direction::North),
                ]
            }))
            .collect();

        let grid = &*input;
        let best = entries
            .par_iter()
            .map(|&(pos, dir)| energized(grid, pos, dir))
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const EXAMPLE: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....
";

    #[test]
    fn test_part1_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "46");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "51");
    }

    #[test]
    fn test_splitter_loops_terminate() {
        let grid = Solver::parse("-|\n|-").unwrap();
        assert_eq!(energized(&grid, Pos::new(0, 0), Direction::East), 4);
    }
}
