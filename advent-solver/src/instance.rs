//! Timed solver instances and their type-erased interface

use crate::error::{ParseError, SolveError};
use crate::solver::SolverExt;
use chrono::{DateTime, TimeDelta, Utc};

/// Answer to one part together with when it was computed
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Time spent solving the part
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Parsed input of one puzzle plus the bookkeeping needed to run its parts.
pub struct SolverInstance<'a, S: SolverExt> {
    year: u16,
    day: u8,
    input: S::Input<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: SolverExt> SolverInstance<'a, S> {
    /// Parse `input` and remember how long it took.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let input = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            input,
            parse_start,
            parse_end,
        })
    }
}

/// Object-safe view of a [`SolverInstance`], so the registry and the runner
/// can hold solvers of unrelated types side by side.
///
/// ```no_run
/// use advent_solver::DynSolver;
///
/// fn run(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("{}/{:02} part {part}: {}", solver.year(), solver.day(), result.answer);
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve one part, timing it
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When parsing started (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// When parsing completed (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Puzzle year
    fn year(&self) -> u16;

    /// Puzzle day
    fn day(&self) -> u8;

    /// Number of parts the puzzle has
    fn parts(&self) -> u8;

    /// Time spent parsing
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked(&mut self.input, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
