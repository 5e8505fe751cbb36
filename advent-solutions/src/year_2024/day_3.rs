//! Mull it over: scanning corrupted memory for multiply instructions.

use std::sync::LazyLock;

use regex::Regex;

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2024, day = 3, tags = ["2024", "parsing"])]
pub struct Solver;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").expect("valid instruction regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

impl PuzzleParser for Solver {
    type Input<'a> = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        INSTRUCTION
            .captures_iter(input)
            .map(|caps| match &caps[0] {
                "do()" => Ok(Instruction::Do),
                "don't()" => Ok(Instruction::Dont),
                _ => {
                    // at most three digits each, always fits
                    let a = caps[1].parse().map_err(ParseError::invalid)?;
                    let b = caps[2].parse().map_err(ParseError::invalid)?;
                    Ok(Instruction::Mul(a, b))
                }
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let sum: u64 = input
            .iter()
            .map(|inst| match inst {
                Instruction::Mul(a, b) => a * b,
                _ => 0,
            })
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let (sum, _) = input
            .iter()
            .fold((0u64, true), |(sum, enabled), inst| match *inst {
                Instruction::Do => (sum, true),
                Instruction::Dont => (sum, false),
                Instruction::Mul(a, b) if enabled => (sum + a * b, enabled),
                Instruction::Mul(..) => (sum, enabled),
            });
        Ok(sum.to_string())
    }
}
