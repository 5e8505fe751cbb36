//! Hoof it: hiking trails climbing from height 0 to 9 one step at a time.

use std::collections::HashSet;

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::dp_cache::{ClosureProblem, DpCache, VecBackend};
use crate::utils::grid::{Grid, Pos};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2024, day = 10, tags = ["2024", "dp"])]
pub struct Solver;

const PEAK: u8 = 9;
/// Cells marked `.`, never part of a trail
const IMPASSABLE: u8 = u8::MAX;

fn uphill(map: &Grid<u8>, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
    let height = map[pos];
    map.neighbours(pos)
        .filter(move |&n| height < PEAK && map[n] == height + 1)
}

fn trailheads(map: &Grid<u8>) -> impl Iterator<Item = Pos> + '_ {
    map.iter().filter(|&(_, &h)| h == 0).map(|(p, _)| p)
}

impl PuzzleParser for Solver {
    type Input<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        Grid::parse_with(input, |b| match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'.' => Some(IMPASSABLE),
            _ => None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let map = &*input;
        let score: usize = trailheads(map)
            .map(|head| {
                let mut seen = HashSet::from([head]);
                let mut stack = vec![head];
                let mut peaks = 0;
                while let Some(pos) = stack.pop() {
                    if map[pos] == PEAK {
                        peaks += 1;
                    }
                    stack.extend(uphill(map, pos).filter(|&n| seen.insert(n)));
                }
                peaks
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let map = &*input;
        let width = map.width();
        let pos_of = |i: usize| Pos::new((i / width) as i64, (i % width) as i64);
        let index_of = |p: Pos| p.row as usize * width + p.col as usize;

        // trails from a cell to any peak
        let trails = ClosureProblem::new(
            |&i: &usize| uphill(map, pos_of(i)).map(index_of).collect(),
            |&i: &usize, deps: Vec<u64>| {
                if map[pos_of(i)] == PEAK {
                    1
                } else {
                    deps.iter().sum()
                }
            },
        );
        let cache = DpCache::new(VecBackend::with_capacity(width * map.height()), trails);

        let rating: u64 = trailheads(map).map(|head| cache.get(&index_of(head))).sum();
        Ok(rating.to_string())
    }
}
