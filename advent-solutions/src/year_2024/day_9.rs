//! Disk fragmenter: compacting files on a dense disk map.

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2024, day = 9, tags = ["2024", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    len: usize,
}

#[derive(Debug, Clone)]
pub struct DiskMap {
    /// Indexed by file id
    files: Vec<Span>,
    gaps: Vec<Span>,
}

impl DiskMap {
    fn size(&self) -> usize {
        self.files.iter().chain(&self.gaps).map(|s| s.start + s.len).max().unwrap_or(0)
    }
}

fn checksum(blocks: impl Iterator<Item = (usize, usize)>) -> u64 {
    blocks.map(|(pos, id)| (pos * id) as u64).sum()
}

/// Moves single blocks from the end into the leftmost free block.
fn compact_blocks(disk: &DiskMap) -> u64 {
    let mut blocks = vec![None; disk.size()];
    for (id, file) in disk.files.iter().enumerate() {
        blocks[file.start..file.start + file.len].fill(Some(id));
    }

    let (mut free, mut last) = (0, blocks.len());
    loop {
        while free < last && blocks[free].is_some() {
            free += 1;
        }
        while last > free && blocks[last - 1].is_none() {
            last -= 1;
        }
        if free >= last {
            break;
        }
        blocks.swap(free, last - 1);
    }

    checksum(
        blocks
            .iter()
            .enumerate()
            .filter_map(|(pos, id)| id.map(|id| (pos, id))),
    )
}

/// Moves whole files, highest id first, into the leftmost gap that fits.
fn compact_files(disk: &DiskMap) -> u64 {
    let mut files = disk.files.clone();
    let mut gaps = disk.gaps.clone();

    for file in files.iter_mut().rev() {
        let Some(gap) = gaps
            .iter_mut()
            .take_while(|g| g.start < file.start)
            .find(|g| g.len >= file.len)
        else {
            continue;
        };
        // vacated spans are never reused: later files have lower ids and
        // only look left of their own start, which lies before this one
        file.start = gap.start;
        gap.start += file.len;
        gap.len -= file.len;
    }

    checksum(
        files
            .iter()
            .enumerate()
            .flat_map(|(id, f)| (f.start..f.start + f.len).map(move |pos| (pos, id))),
    )
}

impl PuzzleParser for Solver {
    type Input<'a> = DiskMap;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let digits = input.trim();
        if digits.is_empty() {
            return Err(ParseError::missing("empty disk map"));
        }

        let mut disk = DiskMap {
            files: Vec::new(),
            gaps: Vec::new(),
        };
        let mut start = 0;
        for (i, c) in digits.chars().enumerate() {
            let len = c
                .to_digit(10)
                .ok_or_else(|| ParseError::invalid(format!("{c:?} at {} is not a digit", i + 1)))?
                as usize;
            let span = Span { start, len };
            if i % 2 == 0 {
                disk.files.push(span);
            } else if len > 0 {
                disk.gaps.push(span);
            }
            start += len;
        }
        Ok(disk)
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(compact_blocks(input).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(compact_files(input).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const EXAMPLE: &str = "2333133121414131402\n";

    #[test]
    fn test_part1_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "1928");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "2858");
    }

    #[test]
    fn test_small_map() {
        // 0..111....22222 -> 022111222
        assert_eq!(solve::<Solver>("12345", 1), "60");
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(Solver::parse("12a4").is_err());
        assert!(Solver::parse("\n").is_err());
    }
}
