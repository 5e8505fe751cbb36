//! Secret entrance: a 100 position safe dial turned left and right.

use anyhow::{Context, bail};

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::parsing::parse_lines;

const DIAL_SIZE: i64 = 100;
const DIAL_START: i64 = 50;

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2025, day = 1, tags = ["2025", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct Rotations {
    /// Signed clicks, negative turning left
    clicks: Vec<i64>,
    counts: Option<ZeroCounts>,
}

#[derive(Debug, Clone, Copy)]
struct ZeroCounts {
    /// Rotations that end with the dial on 0
    stops: u64,
    /// Clicks at which the dial points at 0, during or at the end of a
    /// rotation
    passes: u64,
}

impl Rotations {
    fn counts(&mut self) -> ZeroCounts {
        *self.counts.get_or_insert_with(|| {
            let (_, stops, passes) = self.clicks.iter().fold(
                (DIAL_START, 0u64, 0u64),
                |(dial, mut stops, mut passes), &turn| {
                    let moved = dial + turn;
                    if moved <= 0 && dial != 0 {
                        passes += 1;
                    }
                    passes += (moved / DIAL_SIZE).unsigned_abs();
                    let dial = moved.rem_euclid(DIAL_SIZE);
                    if dial == 0 {
                        stops += 1;
                    }
                    (dial, stops, passes)
                },
            );
            log::debug!("{stops} stops on zero, {passes} passes");
            ZeroCounts { stops, passes }
        })
    }
}

impl PuzzleParser for Solver {
    type Input<'a> = Rotations;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let clicks = parse_lines(input, |line| {
            let sign = match line.as_bytes().first() {
                Some(b'L') => -1,
                Some(b'R') => 1,
                _ => bail!("rotation must start with 'L' or 'R'"),
            };
            let amount = line[1..]
                .parse::<u32>()
                .with_context(|| format!("bad rotation amount {:?}", &line[1..]))?;
            Ok(sign * i64::from(amount))
        })?;
        Ok(Rotations {
            clicks,
            counts: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.counts().stops.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.counts().passes.to_string())
    }
}
