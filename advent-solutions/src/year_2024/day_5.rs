//! Print queue: page ordering rules applied to safety manual updates.

use std::cmp::Ordering;
use std::collections::HashSet;

use anyhow::Context;

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::parsing::{parse_lines, split_pair, split_sections};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2024, day = 5, tags = ["2024", "graph"])]
pub struct Solver;

pub struct PrintQueue {
    /// `(before, after)` page pairs
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl PrintQueue {
    fn order(&self, a: u32, b: u32) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        update.is_sorted_by(|&a, &b| self.order(a, b) != Ordering::Greater)
    }
}

fn middle(update: &[u32]) -> u32 {
    update[update.len() / 2]
}

impl PuzzleParser for Solver {
    type Input<'a> = PrintQueue;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let sections = split_sections(input);
        let [rules, updates] = sections.as_slice() else {
            return Err(ParseError::invalid(format!(
                "expected rules and updates, found {} sections",
                sections.len()
            )));
        };

        let rules: HashSet<(u32, u32)> = parse_lines(&rules.join("\n"), |line| {
            let (a, b) = split_pair(line, "|")?;
            Ok((
                a.parse::<u32>().with_context(|| format!("bad page {a:?}"))?,
                b.parse::<u32>().with_context(|| format!("bad page {b:?}"))?,
            ))
        })?
        .into_iter()
        .collect();

        let updates = parse_lines(&updates.join("\n"), |line| {
            let pages = line
                .split(',')
                .map(|p| p.parse::<u32>().with_context(|| format!("bad page {p:?}")))
                .collect::<anyhow::Result<Vec<_>>>()?;
            anyhow::ensure!(!pages.is_empty(), "empty update");
            Ok(pages)
        })?;

        Ok(PrintQueue { rules, updates })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let sum: u32 = input
            .updates
            .iter()
            .filter(|u| input.is_ordered(u))
            .map(|u| middle(u))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let sum: u32 = input
            .updates
            .iter()
            .filter(|u| !input.is_ordered(u))
            .map(|u| {
                let mut fixed = u.clone();
                fixed.sort_by(|&a, &b| input.order(a, b));
                middle(&fixed)
            })
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const EXAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn test_part1_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "143");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "123");
    }

    #[test]
    fn test_missing_updates_section() {
        assert!(Solver::parse("47|53\n97|13\n").is_err());
    }
}
