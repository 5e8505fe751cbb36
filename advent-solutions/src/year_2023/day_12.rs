//! Hot springs: counting spring arrangements that match damaged group sizes.

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};
use anyhow::{Context, bail};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::parsing::{parse_lines, split_pair};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 12, tags = ["2023", "dp"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    springs: Vec<u8>,
    groups: Vec<usize>,
}

impl Record {
    /// Five copies, springs joined by `?`
    fn unfold(&self) -> Record {
        let mut springs = Vec::with_capacity(self.springs.len() * 5 + 4);
        for copy in 0..5 {
            if copy > 0 {
                springs.push(b'?');
            }
            springs.extend_from_slice(&self.springs);
        }
        Record {
            springs,
            groups: self.groups.repeat(5),
        }
    }

    /// Whether damaged group `g` can start at `pos`
    fn fits(&self, pos: usize, g: usize) -> bool {
        let Some(&len) = self.groups.get(g) else {
            return false;
        };
        let end = pos + len;
        end <= self.springs.len()
            && !self.springs[pos..end].contains(&b'.')
            && self.springs.get(end) != Some(&b'#')
    }

    fn arrangements(&self) -> u64 {
        DpCache::new(HashMapBackend::new(), self).get(&(0, 0))
    }
}

/// Ways to fill `springs[pos..]` with `groups[g..]`
impl DpProblem<(usize, usize), u64> for &Record {
    fn deps(&self, &(pos, g): &(usize, usize)) -> Vec<(usize, usize)> {
        let Some(&spring) = self.springs.get(pos) else {
            return vec![];
        };
        let mut deps = Vec::with_capacity(2);
        if spring != b'#' {
            deps.push((pos + 1, g));
        }
        if spring != b'.' && self.fits(pos, g) {
            // the group plus the operational spring after it
            deps.push((pos + self.groups[g] + 1, g + 1));
        }
        deps
    }

    fn compute(&self, &(pos, g): &(usize, usize), deps: Vec<u64>) -> u64 {
        if pos >= self.springs.len() {
            (g == self.groups.len()) as u64
        } else {
            deps.iter().sum()
        }
    }
}

fn parse_record(line: &str) -> anyhow::Result<Record> {
    let (springs, groups) = split_pair(line, " ")?;
    if let Some(bad) = springs.bytes().find(|b| !b".#?".contains(b)) {
        bail!("unexpected spring {:?}", bad as char);
    }
    let groups = groups
        .split(',')
        .map(|g| g.trim().parse::<usize>().with_context(|| format!("bad group size {g:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    if groups.contains(&0) {
        bail!("group sizes must be positive");
    }
    Ok(Record {
        springs: springs.as_bytes().to_vec(),
        groups,
    })
}

impl PuzzleParser for Solver {
    type Input<'a> = Vec<Record>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        parse_lines(input, parse_record)
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().map(Record::arrangements).sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let total: u64 = input.iter().map(|r| r.unfold().arrangements()).sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const EXAMPLE: &str = "\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

    #[test]
    fn test_part1_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "21");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "525152");
    }

    #[test]
    fn test_arrangements_per_record() {
        let records = Solver::parse(EXAMPLE).unwrap();
        let counts: Vec<_> = records.iter().map(Record::arrangements).collect();
        assert_eq!(counts, vec![1, 4, 1, 1, 4, 10]);
        let unfolded: Vec<_> = records.iter().map(|r| r.unfold().arrangements()).collect();
        assert_eq!(unfolded, vec![1, 16384, 1, 16, 2500, 506250]);
    }

    #[test]
    fn test_unfold() {
        let record = parse_record(".# 1").unwrap();
        let unfolded = record.unfold();
        assert_eq!(unfolded.springs, b".#?.#?.#?.#?.#");
        assert_eq!(unfolded.groups, vec![1; 5]);
    }

    #[test]
    fn test_rejects_zero_group() {
        assert!(Solver::parse("#. 0").is_err());
    }
}
