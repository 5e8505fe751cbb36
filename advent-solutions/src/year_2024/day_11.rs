//! Plutonian pebbles: stones that split or multiply every blink.

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::parsing::numbers;

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2024, day = 11, tags = ["2024", "dp"])]
pub struct Solver;

/// What a single engraved stone turns into after one blink, `None` when the
/// engraving no longer fits a `u64`
fn blink(stone: u64) -> Option<Vec<u64>> {
    if stone == 0 {
        return Some(vec![1]);
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        Some(vec![stone / half, stone % half])
    } else {
        stone.checked_mul(2024).map(|s| vec![s])
    }
}

/// Number of stones one stone becomes after some blinks, indexed by
/// `(stone, blinks)`. `None` marks an overflowed state.
struct StoneCount;

impl DpProblem<(u64, u32), Option<u64>> for StoneCount {
    fn deps(&self, &(stone, blinks): &(u64, u32)) -> Vec<(u64, u32)> {
        if blinks == 0 {
            return vec![];
        }
        blink(stone)
            .unwrap_or_default()
            .into_iter()
            .map(|s| (s, blinks - 1))
            .collect()
    }

    fn compute(&self, &(_, blinks): &(u64, u32), deps: Vec<Option<u64>>) -> Option<u64> {
        // a blink always yields a stone, so no deps means the blink overflowed
        if blinks == 0 {
            Some(1)
        } else if deps.is_empty() {
            None
        } else {
            deps.into_iter().try_fold(0u64, |sum, d| sum.checked_add(d?))
        }
    }
}

fn stones_after(stones: &[u64], blinks: u32) -> Result<u64, SolveError> {
    let cache = DpCache::new(HashMapBackend::new(), StoneCount);
    let total = stones
        .iter()
        .try_fold(0u64, |sum, &s| sum.checked_add(cache.get(&(s, blinks))?));
    log::debug!(
        "{} distinct (stone, blinks) states",
        cache.into_backend().len()
    );
    total.ok_or_else(|| SolveError::failed("stone engraving or count overflowed"))
}

impl PuzzleParser for Solver {
    type Input<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let stones = numbers::<u64>(input)?;
        if stones.is_empty() {
            return Err(ParseError::missing("no stones"));
        }
        Ok(stones)
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(stones_after(input, 25)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(stones_after(input, 75)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    #[test]
    fn test_blink_rules() {
        assert_eq!(blink(0), Some(vec![1]));
        assert_eq!(blink(1000), Some(vec![10, 0]));
        assert_eq!(blink(17), Some(vec![1, 7]));
        assert_eq!(blink(125), Some(vec![253000]));
        assert_eq!(blink(u64::MAX / 1000), None);
    }

    #[test]
    fn test_example_blinks() {
        assert_eq!(stones_after(&[125, 17], 6).unwrap(), 22);
        assert_eq!(stones_after(&[0, 1, 10, 99, 999], 1).unwrap(), 7);
    }

    #[test]
    fn test_huge_stone_fails_instead_of_overflowing() {
        let mut input = Solver::parse("2333133121414131402").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut input).is_err());
        assert_eq!(stones_after(&[2333133121414131402], 0).unwrap(), 1);
    }

    #[test]
    fn test_part1_example() {
        assert_eq!(solve::<Solver>("125 17\n", 1), "55312");
    }
}
