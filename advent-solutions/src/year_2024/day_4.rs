//! Ceres search: word search for `XMAS` and crossed `MAS`.

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::grid::{Grid, Pos};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2024, day = 4, tags = ["2024", "grid"])]
pub struct Solver;

fn spells(grid: &Grid<u8>, start: Pos, step: Pos, word: &[u8]) -> bool {
    word.iter()
        .enumerate()
        .all(|(i, &c)| grid.get(start + step * i as i64) == Some(&c))
}

impl PuzzleParser for Solver {
    type Input<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        Grid::parse_bytes(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let grid = &*input;
        let origin = Pos::default();
        let count = grid
            .iter()
            .filter(|&(_, &c)| c == b'X')
            .map(|(p, _)| {
                origin
                    .around()
                    .filter(|&step| spells(grid, p, step, b"XMAS"))
                    .count()
            })
            .sum::<usize>();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let grid = &*input;
        let diagonal = |p: Pos, step: Pos| {
            spells(grid, p - step, step, b"MAS") || spells(grid, p - step, step, b"SAM")
        };
        let count = grid
            .iter()
            .filter(|&(p, &c)| {
                c == b'A' && diagonal(p, Pos::new(1, 1)) && diagonal(p, Pos::new(1, -1))
            })
            .count();
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const EXAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn test_part1_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "18");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "9");
    }

    #[test]
    fn test_small_cross() {
        assert_eq!(solve::<Solver>("M.S\n.A.\nM.S", 2), "1");
        assert_eq!(solve::<Solver>("M.M\n.A.\nS.M", 2), "0");
    }
}
