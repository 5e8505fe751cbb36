//! Trebuchet calibration values hidden in lines of text.

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 1, tags = ["2023", "parsing"])]
pub struct Solver;

const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl PuzzleParser for Solver {
    type Input<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let lines: Vec<_> = input.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.is_empty() {
            return Err(ParseError::missing("no calibration lines"));
        }
        Ok(lines)
    }
}

/// Digit starting at byte `i`, spelled-out words included when `words` is set.
/// Words may overlap, so `eightwo` holds both 8 and 2.
fn digit_at(line: &str, i: usize, words: bool) -> Option<u32> {
    let b = line.as_bytes()[i];
    if b.is_ascii_digit() {
        return Some((b - b'0') as u32);
    }
    if !words {
        return None;
    }
    let rest = &line[i..];
    WORDS
        .iter()
        .position(|w| rest.starts_with(w))
        .map(|n| n as u32 + 1)
}

fn calibration(line: &str, words: bool) -> Result<u32, SolveError> {
    let mut digits = (0..line.len()).filter_map(|i| digit_at(line, i, words));
    let first = digits
        .next()
        .ok_or_else(|| SolveError::failed(format!("no digit in {line:?}")))?;
    let last = digits.last().unwrap_or(first);
    Ok(first * 10 + last)
}

fn total(lines: &[&str], words: bool) -> Result<String, SolveError> {
    let mut sum = 0;
    for line in lines {
        let value = calibration(line, words)?;
        log::trace!("{line} -> {value}");
        sum += value;
    }
    Ok(sum.to_string())
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        total(input, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        total(input, true)
    }
}
