//! Cosmic expansion: galaxy distances after empty rows and columns grow.

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::grid::Grid;

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 11, tags = ["2023", "grid"])]
pub struct Solver;

pub struct Image {
    rows: Vec<u64>,
    cols: Vec<u64>,
}

/// Coordinates after every coordinate value missing from the sorted input
/// has grown to `factor` lines.
fn expand(sorted: &[u64], factor: u64) -> Vec<u64> {
    let mut grown = 0;
    let mut prev: Option<u64> = None;
    sorted
        .iter()
        .map(|&c| {
            if let Some(p) = prev {
                grown += (c - p).saturating_sub(1) * (factor - 1);
            } else {
                grown += c * (factor - 1);
            }
            prev = Some(c);
            c + grown
        })
        .collect()
}

/// Sum of `|a - b|` over all pairs of a sorted slice
fn pairwise_distance(sorted: &[u64]) -> u64 {
    // element `i` is the larger side of `i` pairs and the smaller side of the rest
    let n = sorted.len() as i64;
    let sum: i64 = sorted
        .iter()
        .enumerate()
        .map(|(i, &c)| c as i64 * (2 * i as i64 - n + 1))
        .sum();
    sum as u64
}

fn total_distance(image: &Image, factor: u64) -> u64 {
    pairwise_distance(&expand(&image.rows, factor)) + pairwise_distance(&expand(&image.cols, factor))
}

impl PuzzleParser for Solver {
    type Input<'a> = Image;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let grid = Grid::parse_with(input, |b| match b {
            b'#' => Some(true),
            b'.' => Some(false),
            _ => None,
        })?;
        let galaxies: Vec<_> = grid.iter().filter(|(_, g)| **g).map(|(p, _)| p).collect();

        let mut rows: Vec<u64> = galaxies.iter().map(|p| p.row as u64).collect();
        let mut cols: Vec<u64> = galaxies.iter().map(|p| p.col as u64).collect();
        rows.sort_unstable();
        cols.sort_unstable();
        Ok(Image { rows, cols })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(total_distance(input, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(total_distance(input, 1_000_000).to_string())
    }
}
