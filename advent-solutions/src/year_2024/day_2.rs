//! Red-nosed reports: monotone level sequences with bounded steps.

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::parsing::parse_lines;

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2024, day = 2, tags = ["2024", "parsing"])]
pub struct Solver;

fn is_safe(levels: impl Iterator<Item = i64> + Clone) -> bool {
    let mut steps = levels.clone().zip(levels.skip(1)).map(|(a, b)| b - a);
    steps.clone().all(|d| (1..=3).contains(&d)) || steps.all(|d| (-3..=-1).contains(&d))
}

/// Safe as is, or after dropping any single level
fn is_tolerably_safe(levels: &[i64]) -> bool {
    is_safe(levels.iter().copied())
        || (0..levels.len()).any(|skip| {
            is_safe(
                levels
                    .iter()
                    .enumerate()
                    .filter(move |&(i, _)| i != skip)
                    .map(|(_, &l)| l),
            )
        })
}

impl PuzzleParser for Solver {
    type Input<'a> = Vec<Vec<i64>>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        parse_lines(input, |line| {
            line.split_whitespace()
                .map(|n| anyhow::Ok(n.parse::<i64>()?))
                .collect()
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let safe = input.iter().filter(|r| is_safe(r.iter().copied())).count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let safe = input.iter().filter(|r| is_tolerably_safe(r)).count();
        Ok(safe.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn test_part1_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "2");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "4");
    }

    #[test]
    fn test_dropping_first_level() {
        assert!(!is_safe([9, 1, 2, 3].into_iter()));
        assert!(is_tolerably_safe(&[9, 1, 2, 3]));
    }

    #[test]
    fn test_direction_must_hold() {
        assert!(is_safe([7, 6, 4, 2, 1].into_iter()));
        assert!(is_safe([1, 3, 6, 7, 9].into_iter()));
        assert!(!is_safe([1, 3, 2, 4, 5].into_iter()));
    }
}
