//! Cube conundrum: games of colored cubes drawn from a bag.

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};
use anyhow::{Context, bail};

use crate::utils::parsing::{parse_lines, split_pair};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 2, tags = ["2023", "parsing"])]
pub struct Solver;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn fits_in(self, bag: Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn power(self) -> u32 {
        self.red * self.green * self.blue
    }
}

#[derive(Debug)]
pub struct Game {
    id: u32,
    grabs: Vec<Cubes>,
}

impl Game {
    /// Fewest cubes of each color that make every grab possible
    fn minimum_set(&self) -> Cubes {
        self.grabs.iter().copied().fold(Cubes::default(), Cubes::max)
    }
}

const BAG: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

fn parse_grab(text: &str) -> anyhow::Result<Cubes> {
    let mut cubes = Cubes::default();
    for entry in text.split(',') {
        let (count, color) = split_pair(entry.trim(), " ")?;
        let count = count.parse::<u32>().with_context(|| format!("bad count {count:?}"))?;
        match color {
            "red" => cubes.red += count,
            "green" => cubes.green += count,
            "blue" => cubes.blue += count,
            _ => bail!("unknown color {color:?}"),
        }
    }
    Ok(cubes)
}

fn parse_game(line: &str) -> anyhow::Result<Game> {
    let (head, grabs) = split_pair(line, ":")?;
    let id = head
        .strip_prefix("Game ")
        .context("line must start with \"Game \"")?
        .parse::<u32>()
        .context("bad game id")?;
    let grabs: Vec<Cubes> = grabs
        .split(';')
        .map(parse_grab)
        .collect::<anyhow::Result<_>>()?;
    Ok(Game { id, grabs })
}

impl PuzzleParser for Solver {
    type Input<'a> = Vec<Game>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        parse_lines(input, parse_game)
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let sum: u32 = input
            .iter()
            .filter(|g| g.grabs.iter().all(|c| c.fits_in(BAG)))
            .map(|g| g.id)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let sum: u32 = input.iter().map(|g| g.minimum_set().power()).sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn test_part1_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "8");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "2286");
    }

    #[test]
    fn test_unknown_color_is_parse_error() {
        assert!(Solver::parse("Game 1: 3 purple").is_err());
    }
}
