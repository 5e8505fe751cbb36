//! Bridge repair: which calibration equations can be made true with
//! left-to-right operators.

use anyhow::Context;

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::parsing::{parse_lines, split_pair};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2024, day = 7, tags = ["2024", "math"])]
pub struct Solver;

pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

/// Works backwards from the target, undoing the last operator against the
/// last operand.
fn solvable(target: u64, operands: &[u64], concat: bool) -> bool {
    let Some((&last, rest)) = operands.split_last() else {
        return false;
    };
    if rest.is_empty() {
        return target == last;
    }

    if target >= last && solvable(target - last, rest, concat) {
        return true;
    }
    match last {
        0 if target == 0 => return true,
        0 => {}
        _ if target % last == 0 && solvable(target / last, rest, concat) => return true,
        _ => {}
    }
    if concat {
        let shift = 10u64.pow(last.checked_ilog10().unwrap_or(0) + 1);
        if target % shift == last && solvable(target / shift, rest, concat) {
            return true;
        }
    }
    false
}

fn calibration(equations: &[Equation], concat: bool) -> u64 {
    equations
        .iter()
        .filter(|eq| solvable(eq.target, &eq.operands, concat))
        .map(|eq| eq.target)
        .sum()
}

impl PuzzleParser for Solver {
    type Input<'a> = Vec<Equation>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        parse_lines(input, |line| {
            let (target, operands) = split_pair(line, ":")?;
            let target = target
                .trim()
                .parse::<u64>()
                .with_context(|| format!("bad test value {target:?}"))?;
            let operands = operands
                .split_whitespace()
                .map(|n| n.parse::<u64>().with_context(|| format!("bad operand {n:?}")))
                .collect::<anyhow::Result<Vec<_>>>()?;
            anyhow::ensure!(!operands.is_empty(), "no operands");
            Ok(Equation { target, operands })
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(calibration(input, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(calibration(input, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const EXAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn test_part1_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "3749");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "11387");
    }

    #[test]
    fn test_zero_operands() {
        assert!(solvable(0, &[5, 0], false));
        assert!(solvable(50, &[5, 0], true));
        assert!(!solvable(50, &[5, 0], false));
    }
}
