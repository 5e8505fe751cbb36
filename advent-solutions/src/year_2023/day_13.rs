//! Point of incidence: mirror lines in patterns of ash and rocks.

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::grid::Grid;
use crate::utils::parsing::split_sections;

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 13, tags = ["2023", "grid"])]
pub struct Solver;

/// Count of mismatching cells when folding `lines` between `split - 1` and
/// `split`.
fn fold_differences(lines: &[Vec<bool>], split: usize) -> usize {
    let above = lines[..split].iter().rev();
    let below = lines[split..].iter();
    above
        .zip(below)
        .map(|(a, b)| a.iter().zip(b).filter(|(x, y)| x != y).count())
        .sum()
}

/// Number of lines before the first fold with exactly `smudges` differences.
fn reflection(lines: &[Vec<bool>], smudges: usize) -> Option<usize> {
    (1..lines.len()).find(|&split| fold_differences(lines, split) == smudges)
}

pub struct Pattern {
    rows: Vec<Vec<bool>>,
    cols: Vec<Vec<bool>>,
}

impl Pattern {
    fn from_grid(grid: &Grid<bool>) -> Self {
        let rows = grid.rows().map(<[bool]>::to_vec).collect();
        let cols = (0..grid.width())
            .map(|c| grid.column(c).copied().collect())
            .collect();
        Self { rows, cols }
    }

    fn summary(&self, smudges: usize) -> Option<usize> {
        reflection(&self.rows, smudges)
            .map(|r| 100 * r)
            .or_else(|| reflection(&self.cols, smudges))
    }
}

fn summarize(patterns: &[Pattern], smudges: usize) -> Result<String, SolveError> {
    patterns
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            p.summary(smudges).ok_or_else(|| {
                SolveError::failed(format!("pattern {} has no reflection", idx + 1))
            })
        })
        .sum::<Result<usize, _>>()
        .map(|total| total.to_string())
}

impl PuzzleParser for Solver {
    type Input<'a> = Vec<Pattern>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let patterns = split_sections(input)
            .into_iter()
            .map(|section| {
                let grid = Grid::parse_with(&section.join("\n"), |b| match b {
                    b'#' => Some(true),
                    b'.' => Some(false),
                    _ => None,
                })?;
                Ok(Pattern::from_grid(&grid))
            })
            .collect::<Result<Vec<_>, ParseError>>()?;
        if patterns.is_empty() {
            return Err(ParseError::missing("no patterns"));
        }
        Ok(patterns)
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        summarize(input, 0)
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        summarize(input, 1)
    }
}
