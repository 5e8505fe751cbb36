//! Line and section parsing helpers that report where the input went wrong.

use std::fmt::Display;
use std::str::FromStr;

use advent_solver::ParseError;

/// Parse every non-blank line with `f`.
///
/// Errors carry the 1-based line number and the full `anyhow` context chain.
pub fn parse_lines<T>(
    input: &str,
    mut f: impl FnMut(&str) -> anyhow::Result<T>,
) -> Result<Vec<T>, ParseError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            f(line.trim_end())
                .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {e:#}", idx + 1)))
        })
        .collect()
}

/// Whitespace separated numbers.
pub fn numbers<T>(text: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    text.split_whitespace()
        .map(|n| {
            n.parse()
                .map_err(|e| ParseError::invalid(format!("{n:?} is not a number: {e}")))
        })
        .collect()
}

/// Lines grouped into blank-line separated sections. Empty sections are
/// dropped so repeated blank lines or trailing newlines don't matter.
pub fn split_sections(input: &str) -> Vec<Vec<&str>> {
    let mut sections = vec![];
    let mut current = vec![];
    for line in input.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        sections.push(current);
    }
    sections
}

/// Split `text` once around `delimiter`, naming the delimiter on failure.
pub fn split_pair<'a>(text: &'a str, delimiter: &str) -> anyhow::Result<(&'a str, &'a str)> {
    text.split_once(delimiter)
        .ok_or_else(|| anyhow::anyhow!("expected {delimiter:?} in {text:?}"))
}
