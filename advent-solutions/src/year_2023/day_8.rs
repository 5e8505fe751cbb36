//! Haunted wasteland: walking a left/right node network.

use std::collections::HashMap;
use std::sync::LazyLock;

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};
use regex::Regex;

use crate::utils::math::lcm;
use crate::utils::parsing::split_sections;

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 8, tags = ["2023", "graph"])]
pub struct Solver;

static NODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+) = \((\w+), (\w+)\)$").expect("valid node regex"));

pub struct Network<'a> {
    /// `true` for a left turn
    turns: Vec<bool>,
    nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> Network<'a> {
    /// Steps from `start` until `done` holds. Fails when the walk cycles
    /// forever without getting there.
    fn steps(&self, start: &'a str, done: impl Fn(&str) -> bool) -> Result<u64, SolveError> {
        // past this many steps some (node, turn index) state has repeated
        let limit = (self.nodes.len() * self.turns.len()) as u64;
        let mut node = start;
        for (steps, &left) in self.turns.iter().cycle().enumerate() {
            let steps = steps as u64;
            if done(node) {
                return Ok(steps);
            }
            if steps > limit {
                break;
            }
            let &(l, r) = self
                .nodes
                .get(node)
                .ok_or_else(|| SolveError::failed(format!("unknown node {node}")))?;
            node = if left { l } else { r };
        }
        Err(SolveError::failed(format!("no end reachable from {start}")))
    }
}

impl PuzzleParser for Solver {
    type Input<'a> = Network<'a>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let sections = split_sections(input);
        let [turns, nodes] = sections.as_slice() else {
            return Err(ParseError::invalid("expected turns and nodes sections"));
        };

        let turns = turns
            .concat()
            .bytes()
            .map(|b| match b {
                b'L' => Ok(true),
                b'R' => Ok(false),
                _ => Err(ParseError::invalid(format!("bad turn {:?}", b as char))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if turns.is_empty() {
            return Err(ParseError::missing("turns"));
        }

        let nodes: HashMap<_, _> = nodes
            .iter()
            .map(|&line| {
                let caps = NODE_PATTERN
                    .captures(line)
                    .ok_or_else(|| ParseError::invalid(format!("bad node {line:?}")))?;
                let (_, [name, l, r]) = caps.extract();
                Ok::<_, ParseError>((name, (l, r)))
            })
            .collect::<Result<_, ParseError>>()?;

        Ok(Network { turns, nodes })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        if !input.nodes.contains_key("AAA") {
            return Err(SolveError::failed("no AAA node"));
        }
        Ok(input.steps("AAA", |n| n == "ZZZ")?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut starts: Vec<_> = input.nodes.keys().filter(|n| n.ends_with('A')).copied().collect();
        starts.sort_unstable();
        if starts.is_empty() {
            return Err(SolveError::failed("no ghost start nodes"));
        }

        // every ghost runs a cycle that hits its end exactly at multiples of
        // its first arrival, so the ghosts meet at the lcm
        let mut total = 1;
        for start in starts {
            let steps = input.steps(start, |n| n.ends_with('Z'))?;
            log::debug!("ghost from {start} arrives after {steps} steps");
            total = lcm(total, steps);
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    #[test]
    fn test_part1_examples() {
        let direct = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";
        assert_eq!(solve::<Solver>(direct, 1), "2");

        let repeating = "LLR\n\nAAA = (BBB, BBB)\nBBB = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)\n";
        assert_eq!(solve::<Solver>(repeating, 1), "6");
    }

    #[test]
    fn test_part2_example() {
        let input = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";
        assert_eq!(solve::<Solver>(input, 2), "6");
    }

    #[test]
    fn test_unreachable_end_fails() {
        let mut input = Solver::parse("L\n\nAAA = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut input).is_err());
    }
}
