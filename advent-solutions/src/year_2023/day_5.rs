//! Seed almanac: numbers and number ranges pushed through a chain of
//! piecewise-shift maps.

use std::ops::Range;

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use crate::utils::parsing::{numbers, split_sections};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 5, tags = ["2023", "math"])]
pub struct Solver;

/// `source..source + len` maps onto `dest..dest + len`
#[derive(Debug, Clone, Copy)]
struct Rule {
    dest: u64,
    source: u64,
    len: u64,
}

impl Rule {
    fn source_range(&self) -> Range<u64> {
        self.source..self.source + self.len
    }

    fn shift(&self, value: u64) -> u64 {
        value - self.source + self.dest
    }
}

/// One "x-to-y" map; values outside every rule map to themselves.
#[derive(Debug)]
struct Mapping {
    rules: Vec<Rule>,
}

impl Mapping {
    fn map(&self, value: u64) -> u64 {
        self.rules
            .iter()
            .find(|r| r.source_range().contains(&value))
            .map_or(value, |r| r.shift(value))
    }

    /// Image of `ranges`, splitting each range wherever a rule boundary cuts it.
    fn map_ranges(&self, mut pending: Vec<Range<u64>>) -> Vec<Range<u64>> {
        let mut mapped = Vec::with_capacity(pending.len());

        for rule in &self.rules {
            let src = rule.source_range();
            let mut unmatched = Vec::with_capacity(pending.len());
            for range in pending {
                let overlap = range.start.max(src.start)..range.end.min(src.end);
                if overlap.is_empty() {
                    unmatched.push(range);
                    continue;
                }
                mapped.push(rule.shift(overlap.start)..rule.shift(overlap.end - 1) + 1);
                if range.start < overlap.start {
                    unmatched.push(range.start..overlap.start);
                }
                if overlap.end < range.end {
                    unmatched.push(overlap.end..range.end);
                }
            }
            pending = unmatched;
        }

        mapped.extend(pending);
        mapped
    }
}

pub struct Almanac {
    seeds: Vec<u64>,
    mappings: Vec<Mapping>,
}

fn parse_mapping(lines: &[&str]) -> Result<Mapping, ParseError> {
    let (header, rows) = lines
        .split_first()
        .ok_or_else(|| ParseError::missing("empty map section"))?;
    if !header.ends_with("map:") {
        return Err(ParseError::invalid(format!("expected a map header, found {header:?}")));
    }
    let rules: Vec<Rule> = rows
        .iter()
        .map(|row| match numbers::<u64>(row)?[..] {
            [dest, source, len] => Ok(Rule { dest, source, len }),
            _ => Err(ParseError::invalid(format!("expected three numbers in {row:?}"))),
        })
        .collect::<Result<_, _>>()?;
    Ok(Mapping { rules })
}

impl PuzzleParser for Solver {
    type Input<'a> = Almanac;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let sections = split_sections(input);
        let (first, maps) = sections
            .split_first()
            .ok_or_else(|| ParseError::missing("empty almanac"))?;

        let seeds = first
            .concat()
            .strip_prefix("seeds:")
            .map(numbers::<u64>)
            .ok_or_else(|| ParseError::missing("seeds line"))??;
        let mappings = maps
            .iter()
            .map(|lines| parse_mapping(lines))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Almanac { seeds, mappings })
    }
}

impl Almanac {
    fn location(&self, seed: u64) -> u64 {
        self.mappings.iter().fold(seed, |value, m| m.map(value))
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        input
            .seeds
            .iter()
            .map(|&s| input.location(s))
            .min()
            .map(|v| v.to_string())
            .ok_or_else(|| SolveError::failed("no seeds"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        if input.seeds.len() % 2 != 0 {
            return Err(SolveError::failed("seed ranges come in start/length pairs"));
        }
        let seeds: Vec<_> = input
            .seeds
            .chunks_exact(2)
            .map(|pair| pair[0]..pair[0] + pair[1])
            .filter(|r| !r.is_empty())
            .collect();

        let locations = input
            .mappings
            .iter()
            .fold(seeds, |ranges, m| m.map_ranges(ranges));
        log::debug!("{} location ranges", locations.len());

        locations
            .iter()
            .map(|r| r.start)
            .min()
            .map(|v| v.to_string())
            .ok_or_else(|| SolveError::failed("no seed ranges"))
    }
}
