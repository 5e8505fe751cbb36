//! Clumsy crucible: least heat loss path with bounded straight runs.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::grid::{Direction, Grid, Pos};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 17, tags = ["2023", "graph"])]
pub struct Solver;

/// Dijkstra over (position, axis of the last run). Every edge is a whole
/// straight run of `min_run..=max_run` blocks followed by a turn, so the
/// run length never needs to be part of the state.
fn least_heat_loss(grid: &Grid<u8>, min_run: i64, max_run: i64) -> Option<u32> {
    let goal = Pos::new(grid.height() as i64 - 1, grid.width() as i64 - 1);
    let start = Pos::new(0, 0);

    let mut best = Grid::filled(grid.width(), grid.height(), [u32::MAX; 2]);
    let mut queue = BinaryHeap::new();
    for vertical in [false, true] {
        best[start][vertical as usize] = 0;
        queue.push(Reverse((0u32, start, vertical)));
    }

    while let Some(Reverse((loss, pos, vertical))) = queue.pop() {
        if pos == goal {
            return Some(loss);
        }
        if loss > best[pos][vertical as usize] {
            continue;
        }

        let turns = if vertical {
            [Direction::East, Direction::West]
        } else {
            [Direction::North, Direction::South]
        };
        for dir in turns {
            let mut next = pos;
            let mut run_loss = loss;
            for run in 1..=max_run {
                next = next.step(dir);
                let Some(&heat) = grid.get(next) else {
                    break;
                };
                run_loss += u32::from(heat);
                if run < min_run {
                    continue;
                }
                let slot = &mut best[next][dir.is_vertical() as usize];
                if run_loss < *slot {
                    *slot = run_loss;
                    queue.push(Reverse((run_loss, next, dir.is_vertical())));
                }
            }
        }
    }
    None
}

fn answer(grid: &Grid<u8>, min_run: i64, max_run: i64) -> Result<String, SolveError> {
    least_heat_loss(grid, min_run, max_run)
        .map(|loss| loss.to_string())
        .ok_or_else(|| SolveError::failed("the factory cannot be reached"))
}

impl PuzzleParser for Solver {
    type Input<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        Grid::parse_with(input, |b| b.is_ascii_digit().then(|| b - b'0'))
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        answer(input, 1, 3)
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        answer(input, 4, 10)
    }
}
