//! Property-based tests for the `PuzzleSolver` derive and the timed instances

use advent_solver::{
    DynSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError, Solver, SolverExt,
    SolverInstance,
};
use proptest::prelude::*;

#[derive(PuzzleSolver)]
#[solver(parts = 2)]
struct SumProduct;

impl PuzzleParser for SumProduct {
    type Input<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| l.parse().map_err(ParseError::invalid))
            .collect()
    }
}

impl PartSolver<1> for SumProduct {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumProduct {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().product::<i64>().to_string())
    }
}

/// Part 1 stores a value that part 2 reads back
#[derive(PuzzleSolver)]
#[solver(parts = 2)]
struct Chained;

impl PuzzleParser for Chained {
    type Input<'a> = (&'a str, Option<usize>);

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        Ok((input.trim(), None))
    }
}

impl PartSolver<1> for Chained {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let words = input.0.split_whitespace().count();
        input.1 = Some(words);
        Ok(words.to_string())
    }
}

impl PartSolver<2> for Chained {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let words = input
            .1
            .ok_or_else(|| SolveError::failed("part 1 has not run"))?;
        Ok((words * 2).to_string())
    }
}

#[derive(PuzzleSolver)]
#[solver(parts = 3)]
struct Generic<T: Default>(std::marker::PhantomData<T>);

impl<T: Default> PuzzleParser for Generic<T> {
    type Input<'a> = T;

    fn parse(_input: &str) -> Result<T, ParseError> {
        Ok(T::default())
    }
}

impl<T: Default> PartSolver<1> for Generic<T> {
    fn solve(_input: &mut T) -> Result<String, SolveError> {
        Ok("one".into())
    }
}

impl<T: Default> PartSolver<2> for Generic<T> {
    fn solve(_input: &mut T) -> Result<String, SolveError> {
        Ok("two".into())
    }
}

impl<T: Default> PartSolver<3> for Generic<T> {
    fn solve(_input: &mut T) -> Result<String, SolveError> {
        Ok("three".into())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `solve_part(k)` is `PartSolver<k>::solve`
    #[test]
    fn prop_part_dispatch(numbers in prop::collection::vec(-9i64..10, 1..6), part in 1u8..=2) {
        let text = numbers.iter().map(i64::to_string).collect::<Vec<_>>().join("\n");
        let mut a = SumProduct::parse(&text).unwrap();
        let mut b = SumProduct::parse(&text).unwrap();

        let dispatched = SumProduct::solve_part(&mut a, part).unwrap();
        let direct = match part {
            1 => <SumProduct as PartSolver<1>>::solve(&mut b),
            _ => <SumProduct as PartSolver<2>>::solve(&mut b),
        }
        .unwrap();

        prop_assert_eq!(dispatched, direct);
    }

    /// Anything above the declared parts is `PartNotImplemented` through the raw
    /// dispatch and `PartOutOfRange` through the checked entry point
    #[test]
    fn prop_invalid_part(part in 3u8..=255) {
        let mut input = SumProduct::parse("1\n2").unwrap();
        let raw = SumProduct::solve_part(&mut input, part);
        prop_assert!(matches!(raw, Err(SolveError::PartNotImplemented(p)) if p == part));
        let checked = SumProduct::solve_part_checked(&mut input, part);
        prop_assert!(matches!(checked, Err(SolveError::PartOutOfRange(p)) if p == part));
    }
}

#[test]
fn test_parts_constant() {
    assert_eq!(SumProduct::PARTS, 2);
    assert_eq!(Generic::<u32>::PARTS, 3);
}

#[test]
fn test_generic_dispatch() {
    let mut input = Generic::<String>::parse("").unwrap();
    assert_eq!(Generic::<String>::solve_part(&mut input, 3).unwrap(), "three");
}

#[test]
fn test_parse_error_propagates() {
    let result = SumProduct::parse("1\nx");
    assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    assert!(SolverInstance::<SumProduct>::new(2023, 1, "1\nx").is_err());
}

#[test]
fn test_instance_shares_state_between_parts() {
    let mut solver = SolverInstance::<Chained>::new(2024, 9, "a b c\n").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "6");
}

#[test]
fn test_instance_part_order_matters() {
    let mut solver = SolverInstance::<Chained>::new(2024, 9, "a b c").unwrap();
    assert!(matches!(solver.solve(2), Err(SolveError::SolveFailed(_))));
}

#[test]
fn test_instance_timing_is_monotonic() {
    let mut solver = SolverInstance::<SumProduct>::new(2023, 1, "2\n3\n4").unwrap();
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());

    let result = solver.solve(2).unwrap();
    assert_eq!(result.answer, "24");
    assert!(result.solve_end >= result.solve_start);
    assert!(result.solve_start >= solver.parse_end());
    assert!(result.duration() >= chrono::TimeDelta::zero());
}
