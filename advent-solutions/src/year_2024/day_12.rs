//! Garden groups: fencing regions of plots by perimeter and by sides.

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::grid::{Direction, Grid, Pos};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2024, day = 12, tags = ["2024", "grid"])]
pub struct Solver;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    area: usize,
    perimeter: usize,
    /// Equal to the number of corners
    sides: usize,
}

fn regions(garden: &Grid<u8>) -> Vec<Region> {
    let same = |p: Pos, plant: u8| garden.get(p) == Some(&plant);
    let mut visited = Grid::filled(garden.width(), garden.height(), false);
    let mut regions = Vec::new();

    for start in garden.positions() {
        if visited[start] {
            continue;
        }
        let plant = garden[start];
        let mut region = Region::default();
        let mut stack = vec![start];
        visited[start] = true;

        while let Some(p) = stack.pop() {
            region.area += 1;
            for dir in Direction::ALL {
                let next = p.step(dir);
                if same(next, plant) {
                    if !visited[next] {
                        visited[next] = true;
                        stack.push(next);
                    }
                } else {
                    region.perimeter += 1;
                }

                let side = p.step(dir.turn_right());
                let diagonal = next.step(dir.turn_right());
                let outer = !same(next, plant) && !same(side, plant);
                let inner = same(next, plant) && same(side, plant) && !same(diagonal, plant);
                if outer || inner {
                    region.sides += 1;
                }
            }
        }
        log::trace!("region {:?} at {start}: {region:?}", plant as char);
        regions.push(region);
    }
    regions
}

impl PuzzleParser for Solver {
    type Input<'a> = Vec<Region>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let garden = Grid::parse_with(input, |b| b.is_ascii_alphabetic().then_some(b))?;
        Ok(regions(&garden))
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let price: usize = input.iter().map(|r| r.area * r.perimeter).sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let price: usize = input.iter().map(|r| r.area * r.sides).sum();
        Ok(price.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const SMALL: &str = "\
AAAA
BBCD
BBCC
EEEC
";

    const LARGE: &str = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

    #[test]
    fn test_part1_examples() {
        assert_eq!(solve::<Solver>(SMALL, 1), "140");
        assert_eq!(solve::<Solver>(LARGE, 1), "1930");
    }

    #[test]
    fn test_part2_examples() {
        assert_eq!(solve::<Solver>(SMALL, 2), "80");
        assert_eq!(solve::<Solver>(LARGE, 2), "1206");

        let e_shape = "EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE\n";
        assert_eq!(solve::<Solver>(e_shape, 2), "236");
    }

    #[test]
    fn test_enclosed_region() {
        let regions = Solver::parse("AAA\nABA\nAAA").unwrap();
        assert_eq!(
            regions[0],
            Region {
                area: 8,
                perimeter: 16,
                sides: 8
            }
        );
        assert_eq!(
            regions[1],
            Region {
                area: 1,
                perimeter: 4,
                sides: 4
            }
        );
    }
}
