//! Historian hysteria: reconciling two lists of location ids.

use std::collections::HashMap;

use anyhow::Context;

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::parsing::parse_lines;

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2024, day = 1, tags = ["2024", "parsing"])]
pub struct Solver;

pub struct Lists {
    left: Vec<u64>,
    right: Vec<u64>,
}

impl PuzzleParser for Solver {
    type Input<'a> = Lists;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let pairs = parse_lines(input, |line| {
            let mut ids = line.split_whitespace().map(|n| {
                n.parse::<u64>()
                    .with_context(|| format!("bad location id {n:?}"))
            });
            match (ids.next(), ids.next(), ids.next()) {
                (Some(l), Some(r), None) => Ok((l?, r?)),
                _ => anyhow::bail!("expected two ids"),
            }
        })?;
        let (mut left, mut right): (Vec<u64>, Vec<u64>) = pairs.into_iter().unzip();
        left.sort_unstable();
        right.sort_unstable();
        Ok(Lists { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let distance: u64 = input
            .left
            .iter()
            .zip(&input.right)
            .map(|(l, r)| l.abs_diff(*r))
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut counts: HashMap<u64, u64> = HashMap::new();
        for &id in &input.right {
            *counts.entry(id).or_default() += 1;
        }
        let similarity: u64 = input
            .left
            .iter()
            .map(|id| id * counts.get(id).copied().unwrap_or(0))
            .sum();
        Ok(similarity.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const EXAMPLE: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn test_part1_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "11");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "31");
    }

    #[test]
    fn test_rejects_odd_lines() {
        assert!(Solver::parse("1 2\n3").is_err());
        assert!(Solver::parse("1 2 3").is_err());
    }
}
