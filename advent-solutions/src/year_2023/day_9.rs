//! Mirage maintenance: extrapolating sequences by repeated differences.

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::parsing::{numbers, parse_lines};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 9, tags = ["2023", "math"])]
pub struct Solver;

/// Next value of the sequence. Works on a reversed slice to get the
/// previous value instead.
fn extrapolate(values: &[i64]) -> i64 {
    if values.iter().all(|&v| v == 0) {
        return 0;
    }
    let diffs: Vec<i64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    values.last().copied().unwrap_or_default() + extrapolate(&diffs)
}

impl PuzzleParser for Solver {
    type Input<'a> = Vec<Vec<i64>>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        parse_lines(input, |line| Ok(numbers(line)?))
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let sum: i64 = input.iter().map(|s| extrapolate(s)).sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let sum: i64 = input
            .iter()
            .map(|s| {
                let reversed: Vec<_> = s.iter().rev().copied().collect();
                extrapolate(&reversed)
            })
            .sum();
        Ok(sum.to_string())
    }
}
