//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// First puzzle year the registry can hold
pub const BASE_YEAR: u16 = 2015;
/// Number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Reconstruct year/day from flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factory Types
// ============================================================================

/// Thread-safe factory turning raw input into a ready-to-solve instance
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// Puzzle year
    pub year: u16,
    /// Day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

/// Builder for constructing a [`SolverRegistry`].
///
/// Storage is a flat vector indexed by year/day, so lookups are O(1) and
/// iteration comes out in ascending (year, day) order for free.
///
/// # Example
///
/// ```
/// use advent_solver::{RegistryBuilder, SolverInstance};
/// # use advent_solver::{ParseError, PuzzleParser, SolveError, Solver};
/// # struct Echo;
/// # impl PuzzleParser for Echo {
/// #     type Input<'a> = &'a str;
/// #     fn parse(input: &str) -> Result<&str, ParseError> { Ok(input) }
/// # }
/// # impl Solver for Echo {
/// #     const PARTS: u8 = 1;
/// #     fn solve_part(input: &mut &str, _: u8) -> Result<String, SolveError> {
/// #         Ok(input.to_string())
/// #     }
/// # }
///
/// let registry = RegistryBuilder::new()
///     .register(2023, 1, 1, |input: &str| {
///         Ok(Box::new(SolverInstance::<Echo>::new(2023, 1, input)?))
///     })
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2023, 1, "hi").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hi");
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a solver factory with an explicit parts count.
    ///
    /// Fails with [`RegistrationError::InvalidYearDay`] when year/day is out of
    /// range and with [`RegistrationError::DuplicateSolver`] when the slot is
    /// already taken.
    pub fn register<F>(
        self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        self.register_tagged(year, day, parts, &[], factory)
    }

    fn register_tagged<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts,
            tags,
        });
        Ok(self)
    }

    /// Register every plugin submitted through `inventory`.
    ///
    /// ```no_run
    /// # use advent_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register the plugins for which `filter` returns `true`.
    ///
    /// ```no_run
    /// # use advent_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.year == 2024 && plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
pub struct SolverRegistry {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistry {
    fn entry(&self, year: u16, day: u8) -> Option<&SolverFactoryEntry> {
        calc_index(year, day).and_then(|i| self.entries.get(i)?.as_ref())
    }

    /// Parse `input` with the solver registered for year/day.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let entry = self.entries[index]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))?;

        Ok((entry.factory)(input)?)
    }

    /// Metadata of every registered solver in ascending (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    /// Metadata for a specific solver
    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.entry(year, day).map(|e| FactoryInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Tags the solver was registered with; empty when unknown
    pub fn tags(&self, year: u16, day: u8) -> &'static [&'static str] {
        self.entry(year, day).map_or(&[], |e| e.tags)
    }

    /// Check if a solver exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entry(year, day).is_some()
    }

    /// Number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Whether no solver is registered
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Object-safe registration hook so plugins of unrelated solver types can sit
/// in one `inventory` collection.
///
/// Every [`Solver`] gets this through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver with `builder` at year/day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Number of parts the solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_tagged(year, day, S::PARTS, tags, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Static registration record collected with `inventory`.
///
/// Normally produced by `#[derive(AutoRegister)]`, but can be submitted by
/// hand:
///
/// ```no_run
/// use advent_solver::{ParseError, PuzzleParser, SolveError, Solver, SolverPlugin};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type Input<'a> = ();
///     fn parse(_: &str) -> Result<(), ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 1;
///     fn solve_part(_: &mut (), part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// advent_solver::inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 1,
///         solver: &Day1,
///         tags: &["2023", "parsing"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// Puzzle year
    pub year: u16,
    /// Day number (1-25)
    pub day: u8,
    /// The solver (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags used for filtering (e.g. "2023", "grid")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::PuzzleParser;

    struct Lines;

    impl PuzzleParser for Lines {
        type Input<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::missing("no lines"));
            }
            Ok(input.lines().collect())
        }
    }

    impl Solver for Lines {
        const PARTS: u8 = 2;

        fn solve_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(input.len().to_string()),
                2 => Ok(input.concat()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn with(builder: RegistryBuilder, year: u16, day: u8) -> Result<RegistryBuilder, RegistrationError> {
        Lines.register_with(builder, year, day, &["test"])
    }

    #[test]
    fn test_index_round_trip_at_bounds() {
        for (year, day) in [(2015, 1), (2015, 25), (2034, 1), (2034, 25), (2023, 17)] {
            let index = calc_index(year, day).unwrap();
            assert_eq!(from_index(index), (year, day));
        }
        assert_eq!(calc_index(2015, 1), Some(0));
        assert_eq!(calc_index(2034, 25), Some(CAPACITY - 1));
    }

    #[test]
    fn test_index_rejects_out_of_range() {
        assert_eq!(calc_index(2014, 1), None);
        assert_eq!(calc_index(2035, 1), None);
        assert_eq!(calc_index(2020, 0), None);
        assert_eq!(calc_index(2020, 26), None);
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let builder = with(RegistryBuilder::new(), 2023, 5).unwrap();
        let err = with(builder, 2023, 5).err().unwrap();
        assert_eq!(err, RegistrationError::DuplicateSolver(2023, 5));
    }

    #[test]
    fn test_invalid_year_day_registration_fails() {
        let err = with(RegistryBuilder::new(), 2040, 1).err().unwrap();
        assert_eq!(err, RegistrationError::InvalidYearDay(2040, 1));
        let err = with(RegistryBuilder::new(), 2023, 26).err().unwrap();
        assert_eq!(err, RegistrationError::InvalidYearDay(2023, 26));
    }

    #[test]
    fn test_create_solver_and_solve() {
        let registry = with(RegistryBuilder::new(), 2024, 3).unwrap().build();

        let mut solver = registry.create_solver(2024, 3, "ab\ncd").unwrap();
        assert_eq!(solver.year(), 2024);
        assert_eq!(solver.day(), 3);
        assert_eq!(solver.parts(), 2);
        assert_eq!(solver.solve(1).unwrap().answer, "2");
        assert_eq!(solver.solve(2).unwrap().answer, "abcd");
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
        assert!(solver.parse_end() >= solver.parse_start());
    }

    #[test]
    fn test_create_solver_errors() {
        let registry = with(RegistryBuilder::new(), 2024, 3).unwrap().build();

        assert!(matches!(
            registry.create_solver(2024, 4, "x"),
            Err(SolverError::NotFound(2024, 4))
        ));
        assert!(matches!(
            registry.create_solver(1999, 4, "x"),
            Err(SolverError::InvalidYearDay(1999, 4))
        ));
        assert!(matches!(
            registry.create_solver(2024, 3, ""),
            Err(SolverError::Parse(ParseError::MissingData(_)))
        ));
    }

    #[test]
    fn test_iteration_is_ordered() {
        let mut builder = RegistryBuilder::new();
        for (year, day) in [(2024, 2), (2015, 7), (2023, 25), (2024, 1)] {
            builder = with(builder, year, day).unwrap();
        }
        let registry = builder.build();

        let order: Vec<_> = registry.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(order, vec![(2015, 7), (2023, 25), (2024, 1), (2024, 2)]);
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());
        assert!(registry.contains(2023, 25));
        assert!(!registry.contains(2023, 24));
        assert_eq!(registry.tags(2015, 7), &["test"]);
        assert!(registry.tags(2015, 8).is_empty());
        assert_eq!(
            registry.get_info(2024, 1),
            Some(FactoryInfo {
                year: 2024,
                day: 1,
                parts: 2
            })
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = RegistryBuilder::default().build();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.iter_info().count(), 0);
    }
}
