//! Guard gallivant: a patrolling guard that turns right at obstacles.

use rayon::prelude::*;

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::grid::{Direction, Grid, Pos};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2024, day = 6, tags = ["2024", "simulation"])]
pub struct Solver;

pub struct Lab {
    obstacles: Grid<bool>,
    guard: Pos,
}

enum Patrol {
    /// Per-cell bitmask of the directions the guard walked through before
    /// leaving the lab
    Leaves(Grid<u8>),
    Loops,
}

impl Lab {
    fn blocked(&self, pos: Pos, extra: Option<Pos>) -> bool {
        extra == Some(pos) || self.obstacles.get(pos).copied().unwrap_or(false)
    }

    fn patrol(&self, extra: Option<Pos>) -> Patrol {
        let mut seen = Grid::filled(self.obstacles.width(), self.obstacles.height(), 0u8);
        let mut pos = self.guard;
        let mut dir = Direction::North;

        loop {
            let mask = 1u8 << dir.index();
            if seen[pos] & mask != 0 {
                return Patrol::Loops;
            }
            seen[pos] |= mask;

            let ahead = pos.step(dir);
            if !self.obstacles.contains(ahead) {
                return Patrol::Leaves(seen);
            }
            if self.blocked(ahead, extra) {
                dir = dir.turn_right();
            } else {
                pos = ahead;
            }
        }
    }

    fn route(&self) -> Result<Vec<Pos>, SolveError> {
        match self.patrol(None) {
            Patrol::Leaves(seen) => Ok(seen
                .iter()
                .filter(|&(_, &m)| m != 0)
                .map(|(p, _)| p)
                .collect()),
            Patrol::Loops => Err(SolveError::failed("the guard never leaves the lab")),
        }
    }
}

impl PuzzleParser for Solver {
    type Input<'a> = Lab;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let cells = Grid::parse_with(input, |b| b".#^".contains(&b).then_some(b))?;
        let mut guards = cells.iter().filter(|&(_, &b)| b == b'^').map(|(p, _)| p);
        let guard = guards
            .next()
            .ok_or_else(|| ParseError::missing("no guard in the lab"))?;
        if let Some(other) = guards.next() {
            return Err(ParseError::invalid(format!(
                "second guard at {other}, expected only the one at {guard}"
            )));
        }
        Ok(Lab {
            obstacles: cells.map(|&b| b == b'#'),
            guard,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.route()?.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let lab = &*input;
        // only cells on the original route can change it
        let candidates: Vec<Pos> = lab.route()?.into_iter().filter(|&p| p != lab.guard).collect();
        log::debug!("trying {} obstruction positions", candidates.len());

        let loops = candidates
            .par_iter()
            .filter(|&&p| matches!(lab.patrol(Some(p)), Patrol::Loops))
            .count();
        Ok(loops.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const EXAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn test_part1_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "41");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "6");
    }

    #[test]
    fn test_guard_count_is_checked() {
        assert!(matches!(Solver::parse("..\n.."), Err(ParseError::MissingData(_))));
        assert!(matches!(Solver::parse("^.\n.^"), Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_trapped_guard_fails() {
        let mut lab = Solver::parse(".#.\n#^#\n.#.").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut lab).is_err());
    }
}
