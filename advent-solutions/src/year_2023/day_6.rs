//! Boat races: how long to hold the button to beat each record.

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::parsing::numbers;

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 6, tags = ["2023", "math"])]
pub struct Solver;

pub struct Races<'a> {
    times: &'a str,
    distances: &'a str,
}

fn field<'a>(line: Option<&'a str>, name: &str) -> Result<&'a str, ParseError> {
    line.and_then(|l| l.trim().strip_prefix(name))
        .ok_or_else(|| ParseError::missing(format!("{name} line")))
}

/// Hold durations `h` in `0..=time` with `h * (time - h) > record`.
///
/// The winning holds lie strictly between the roots of `h^2 - time*h + record`,
/// the float estimate is nudged onto the exact integer bounds.
fn ways_to_win(time: u64, record: u64) -> u64 {
    let beats = |h: u64| h <= time && h as u128 * (time - h) as u128 > record as u128;

    let (t, r) = (time as f64, record as f64);
    let disc = t * t - 4.0 * r;
    if disc < 0.0 {
        return 0;
    }
    let mid = time / 2;
    if !beats(mid) {
        return 0;
    }

    let mut low = ((t - disc.sqrt()) / 2.0).floor().max(0.0) as u64;
    while low > 0 && beats(low - 1) {
        low -= 1;
    }
    while !beats(low) {
        low += 1;
    }
    // holds are symmetric around time / 2
    let high = time - low;
    high - low + 1
}

fn concat_digits(text: &str) -> Result<u64, ParseError> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .parse()
        .map_err(|e| ParseError::invalid(format!("{text:?}: {e}")))
}

impl PuzzleParser for Solver {
    type Input<'a> = Races<'a>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let mut lines = input.lines().filter(|l| !l.trim().is_empty());
        let times = field(lines.next(), "Time:")?;
        let distances = field(lines.next(), "Distance:")?;
        Ok(Races { times, distances })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let parse = |text| numbers::<u64>(text).map_err(|e| SolveError::SolveFailed(e.into()));
        let times = parse(input.times)?;
        let distances = parse(input.distances)?;
        if times.len() != distances.len() {
            return Err(SolveError::failed("time and distance counts differ"));
        }

        let product: u64 = times
            .iter()
            .zip(&distances)
            .map(|(&t, &d)| ways_to_win(t, d))
            .product();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let time = concat_digits(input.times).map_err(|e| SolveError::SolveFailed(e.into()))?;
        let distance =
            concat_digits(input.distances).map_err(|e| SolveError::SolveFailed(e.into()))?;
        log::debug!("single race: time {time}, record {distance}");
        Ok(ways_to_win(time, distance).to_string())
    }
}
