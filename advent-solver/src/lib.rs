//! Puzzle solver framework
//!
//! A small, type-safe framework for daily puzzle solutions spread across
//! multiple years. Each puzzle parses its input once and answers one or more
//! parts against the parsed data.
//!
//! # Overview
//!
//! - [`PuzzleParser`] turns raw text into a puzzle-specific `Input<'a>`
//!   (which may borrow from the text)
//! - [`PartSolver<N>`] answers part `N`; `#[derive(PuzzleSolver)]` wires the
//!   parts into a [`Solver`]
//! - [`SolverInstance`] / [`DynSolver`] erase the solver type and time
//!   parsing and solving
//! - [`RegistryBuilder`] / [`SolverRegistry`] map year/day to solver
//!   factories; `#[derive(AutoRegister)]` submits a [`SolverPlugin`] so the
//!   registry can discover solvers at link time
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver,
//!     RegistryBuilder, SolveError};
//!
//! #[derive(PuzzleSolver, AutoRegister)]
//! #[solver(parts = 2)]
//! #[puzzle(year = 2019, day = 1, tags = ["2019", "math"])]
//! pub struct Fuel;
//!
//! impl PuzzleParser for Fuel {
//!     type Input<'a> = Vec<u64>;
//!
//!     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
//!         input.lines().map(|l| l.parse().map_err(ParseError::invalid)).collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Fuel {
//!     fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
//!         Ok(input.iter().map(|m| m / 3 - 2).sum::<u64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Fuel {
//!     fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
//!         let total = |mut m: u64| {
//!             let mut sum = 0;
//!             while m / 3 > 2 {
//!                 m = m / 3 - 2;
//!                 sum += m;
//!             }
//!             sum
//!         };
//!         Ok(input.iter().copied().map(total).sum::<u64>().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_plugins(|p| p.year == 2019)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2019, 1, "14\n1969").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "656");
//! assert_eq!(solver.solve(2).unwrap().answer, "968");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver,
    RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Used by code generated from the derive macros
pub use inventory;

pub use advent_solver_macros::{AutoRegister, PuzzleSolver};
