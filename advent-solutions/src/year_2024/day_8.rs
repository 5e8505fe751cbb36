//! Resonant collinearity: antinodes of same-frequency antenna pairs.

use std::collections::{HashMap, HashSet};

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::grid::{Grid, Pos};
use crate::utils::math::gcd;

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2024, day = 8, tags = ["2024", "grid"])]
pub struct Solver;

pub struct City {
    map: Grid<u8>,
    antennas: HashMap<u8, Vec<Pos>>,
}

impl City {
    /// Every ordered pair of distinct antennas sharing a frequency
    fn pairs(&self) -> impl Iterator<Item = (Pos, Pos)> + '_ {
        self.antennas.values().flat_map(|group| {
            group.iter().flat_map(move |&a| {
                group
                    .iter()
                    .filter(move |&&b| b != a)
                    .map(move |&b| (a, b))
            })
        })
    }
}

impl PuzzleParser for Solver {
    type Input<'a> = City;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let map = Grid::parse_with(input, |b| {
            (b == b'.' || b.is_ascii_alphanumeric()).then_some(b)
        })?;
        let mut antennas: HashMap<u8, Vec<Pos>> = HashMap::new();
        for (pos, &b) in map.iter().filter(|&(_, &b)| b != b'.') {
            antennas.entry(b).or_default().push(pos);
        }
        log::debug!("{} antenna frequencies", antennas.len());
        Ok(City { map, antennas })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let antinodes: HashSet<Pos> = input
            .pairs()
            .map(|(a, b)| b + (b - a))
            .filter(|&p| input.map.contains(p))
            .collect();
        Ok(antinodes.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut antinodes = HashSet::new();
        for (a, b) in input.pairs() {
            let delta = b - a;
            let g = gcd(delta.row.unsigned_abs(), delta.col.unsigned_abs()) as i64;
            let step = Pos::new(delta.row / g, delta.col / g);
            let mut p = a;
            while input.map.contains(p) {
                antinodes.insert(p);
                p = p + step;
            }
        }
        Ok(antinodes.len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const EXAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn test_part1_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "14");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "34");
    }

    #[test]
    fn test_part2_t_frequency() {
        let input = "\
T.........
...T......
.T........
..........
..........
..........
..........
..........
..........
..........
";
        assert_eq!(solve::<Solver>(input, 2), "9");
    }
}
