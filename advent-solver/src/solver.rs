//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses raw puzzle text into the data shared by every part of a puzzle.
///
/// The parsed value is handed mutably to each part in turn, so a part may
/// stash intermediate results for the parts that follow it.
///
/// # Example
///
/// ```
/// use advent_solver::{ParseError, PuzzleParser};
///
/// struct Depths;
///
/// impl PuzzleParser for Depths {
///     type Input<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::invalid("bad depth")))
///             .collect()
///     }
/// }
/// ```
pub trait PuzzleParser {
    /// The parsed input; may borrow from the raw text.
    type Input<'a>;

    /// Parse the raw puzzle text.
    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implement one of these per part and let `#[derive(PuzzleSolver)]`
/// generate the [`Solver`] dispatch.
pub trait PartSolver<const N: u8>: PuzzleParser {
    /// Compute the answer for this part.
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle solver for one year/day.
///
/// # Example
///
/// ```
/// use advent_solver::{ParseError, PuzzleParser, SolveError, Solver};
///
/// struct Sums;
///
/// impl PuzzleParser for Sums {
///     type Input<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|n| n.parse().map_err(ParseError::invalid))
///             .collect()
///     }
/// }
///
/// impl Solver for Sums {
///     const PARTS: u8 = 2;
///
///     fn solve_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(input.iter().sum::<i64>().to_string()),
///             2 => Ok(input.iter().product::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut input = Sums::parse("2 3 4").unwrap();
/// assert_eq!(Sums::solve_part(&mut input, 2).unwrap(), "24");
/// ```
pub trait Solver: PuzzleParser {
    /// Number of parts this puzzle has
    const PARTS: u8;

    /// Solve the given part against the parsed input.
    fn solve_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point shared by every [`Solver`].
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`] but rejects `0` and anything above `PARTS`
    /// with [`SolveError::PartOutOfRange`] before dispatching.
    fn solve_part_checked(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(input, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
