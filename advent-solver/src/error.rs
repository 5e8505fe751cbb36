//! Error types for the solver library

use thiserror::Error;

/// Error type for turning puzzle input into parsed data
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input format doesn't match the expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A required section or field is missing from the input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Input file could not be obtained
    #[error("Input unavailable: {0}")]
    Unavailable(String),
}

impl ParseError {
    /// Shorthand for [`ParseError::InvalidFormat`] with any displayable message
    pub fn invalid(message: impl std::fmt::Display) -> Self {
        Self::InvalidFormat(message.to_string())
    }

    /// Shorthand for [`ParseError::MissingData`] with any displayable message
    pub fn missing(message: impl std::fmt::Display) -> Self {
        Self::MissingData(message.to_string())
    }
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number has no implementation
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is outside `1..=PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The input parsed but does not admit an answer
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Build a [`SolveError::SolveFailed`] from a plain message
    pub fn failed(message: impl Into<String>) -> Self {
        Self::SolveFailed(message.into().into())
    }
}

/// Error type for registry lookups and solver execution
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day outside of the range the registry can hold
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    /// Parsing the input failed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Solving a part failed
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// A solver for this year-day combination already exists
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day outside of the range the registry can hold
    #[error("Cannot register year {0} day {1}: outside the supported range")]
    InvalidYearDay(u16, u8),
}
