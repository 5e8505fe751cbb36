//! Gear ratios: part numbers in an engine schematic.

use std::collections::HashMap;

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::grid::{Grid, Pos};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 3, tags = ["2023", "grid"])]
pub struct Solver;

/// A horizontal run of digits
#[derive(Debug, Clone, Copy)]
struct Number {
    row: i64,
    start: i64,
    end: i64,
    value: u64,
}

impl Number {
    /// Every cell bordering the number, diagonals included
    fn border(&self) -> impl Iterator<Item = Pos> + '_ {
        (self.start - 1..=self.end).flat_map(move |col| {
            [self.row - 1, self.row, self.row + 1]
                .into_iter()
                .map(move |row| Pos::new(row, col))
                .filter(move |p| p.row != self.row || p.col < self.start || p.col >= self.end)
        })
    }
}

#[derive(Debug)]
pub struct Schematic {
    grid: Grid<u8>,
    numbers: Vec<Number>,
}

fn is_symbol(b: u8) -> bool {
    b != b'.' && !b.is_ascii_digit()
}

impl PuzzleParser for Solver {
    type Input<'a> = Schematic;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let grid = Grid::parse_bytes(input)?;
        let mut numbers = Vec::new();

        for (row, cells) in grid.rows().enumerate() {
            let mut col = 0;
            while col < cells.len() {
                if !cells[col].is_ascii_digit() {
                    col += 1;
                    continue;
                }
                let start = col;
                let mut value = 0u64;
                while col < cells.len() && cells[col].is_ascii_digit() {
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add((cells[col] - b'0') as u64))
                        .ok_or_else(|| {
                            ParseError::invalid(format!("number too large on line {}", row + 1))
                        })?;
                    col += 1;
                }
                numbers.push(Number {
                    row: row as i64,
                    start: start as i64,
                    end: col as i64,
                    value,
                });
            }
        }

        Ok(Schematic { grid, numbers })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let grid = &input.grid;
        input
            .numbers
            .iter()
            .filter(|n| n.border().any(|p| grid.get(p).is_some_and(|&b| is_symbol(b))))
            .try_fold(0u64, |sum, n| sum.checked_add(n.value))
            .map(|sum| sum.to_string())
            .ok_or_else(|| SolveError::failed("part number sum overflowed"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut gears: HashMap<Pos, Vec<u64>> = HashMap::new();
        for number in &input.numbers {
            for pos in number.border() {
                if input.grid.get(pos) == Some(&b'*') {
                    gears.entry(pos).or_default().push(number.value);
                }
            }
        }

        gears
            .values()
            .filter(|parts| parts.len() == 2)
            .try_fold(0u64, |sum, parts| {
                sum.checked_add(parts[0].checked_mul(parts[1])?)
            })
            .map(|sum| sum.to_string())
            .ok_or_else(|| SolveError::failed("gear ratio sum overflowed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const EXAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn test_part1_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "4361");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "467835");
    }

    #[test]
    fn test_number_at_row_end() {
        assert_eq!(solve::<Solver>("..*\n.12", 1), "12");
    }

    #[test]
    fn test_oversized_number_is_rejected() {
        assert_eq!(solve::<Solver>("18446744073709551615*", 1), "18446744073709551615");

        let err = Solver::parse("..\n99999999999999999999").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_gear_ratio_overflow_fails() {
        let mut input = Solver::parse("9999999999*9999999999").unwrap();
        assert!(<Solver as PartSolver<2>>::solve(&mut input).is_err());
    }
}
