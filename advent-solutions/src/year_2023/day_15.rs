//! Lens library: the HASH algorithm and the HASHMAP procedure built on it.

use anyhow::{Context, bail};

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 15, tags = ["2023", "parsing"])]
pub struct Solver;

fn hash(text: &str) -> usize {
    text.bytes()
        .fold(0, |acc, b| (acc + b as usize) * 17 % 256)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Remove,
    Insert(u8),
}

#[derive(Debug)]
pub struct Step<'a> {
    raw: &'a str,
    label: &'a str,
    op: Operation,
}

impl<'a> Step<'a> {
    fn parse(raw: &'a str) -> anyhow::Result<Self> {
        let (label, op) = if let Some(label) = raw.strip_suffix('-') {
            (label, Operation::Remove)
        } else if let Some((label, focal)) = raw.split_once('=') {
            let focal = focal
                .parse()
                .with_context(|| format!("bad focal length in {raw:?}"))?;
            (label, Operation::Insert(focal))
        } else {
            bail!("step {raw:?} is neither a removal nor an insertion");
        };
        Ok(Self { raw, label, op })
    }
}

impl PuzzleParser for Solver {
    type Input<'a> = Vec<Step<'a>>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let steps = input
            .trim()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Step::parse(s).map_err(|e| ParseError::invalid(format!("{e:#}"))))
            .collect::<Result<Vec<_>, _>>()?;
        if steps.is_empty() {
            return Err(ParseError::missing("no initialization steps"));
        }
        Ok(steps)
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().map(|s| hash(s.raw)).sum::<usize>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut boxes: Vec<Vec<(&str, u8)>> = vec![Vec::new(); 256];
        for step in input.iter() {
            let lenses = &mut boxes[hash(step.label)];
            let slot = lenses.iter().position(|(label, _)| *label == step.label);
            match (step.op, slot) {
                (Operation::Remove, Some(i)) => {
                    lenses.remove(i);
                }
                (Operation::Remove, None) => {}
                (Operation::Insert(focal), Some(i)) => lenses[i].1 = focal,
                (Operation::Insert(focal), None) => lenses.push((step.label, focal)),
            }
        }

        let power: usize = boxes
            .iter()
            .enumerate()
            .flat_map(|(b, lenses)| {
                lenses
                    .iter()
                    .enumerate()
                    .map(move |(slot, &(_, focal))| (b + 1) * (slot + 1) * focal as usize)
            })
            .sum();
        Ok(power.to_string())
    }
}
