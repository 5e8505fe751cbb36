//! Scratchcards: winning numbers and cascading card copies.

use std::collections::HashSet;

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};
use anyhow::Context;

use crate::utils::parsing::{parse_lines, split_pair};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 4, tags = ["2023", "parsing"])]
pub struct Solver;

fn numbers(text: &str) -> anyhow::Result<HashSet<u32>> {
    text.split_whitespace()
        .map(|n| n.parse().with_context(|| format!("bad number {n:?}")))
        .collect()
}

/// How many of the card's numbers are winning numbers
fn matches(line: &str) -> anyhow::Result<usize> {
    let (card, body) = split_pair(line, ":")?;
    if !card.starts_with("Card") {
        anyhow::bail!("expected a card, found {card:?}");
    }
    let (winning, have) = split_pair(body, "|")?;
    let winning = numbers(winning)?;
    Ok(numbers(have)?.intersection(&winning).count())
}

impl PuzzleParser for Solver {
    /// Match count per card, in card order
    type Input<'a> = Vec<usize>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        parse_lines(input, matches)
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let worth: u64 = input
            .iter()
            .map(|&m| if m == 0 { 0 } else { 1u64 << (m - 1) })
            .sum();
        Ok(worth.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut copies = vec![1u64; input.len()];
        for (card, &won) in input.iter().enumerate() {
            let end = (card + 1 + won).min(input.len());
            for next in card + 1..end {
                copies[next] += copies[card];
            }
        }
        Ok(copies.iter().sum::<u64>().to_string())
    }
}
