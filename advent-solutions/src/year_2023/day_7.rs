//! Camel cards: ranking poker-like hands, with and without jokers.

use advent_solver::{AutoRegister, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};
use anyhow::{Context, bail};

use crate::utils::parsing::{parse_lines, split_pair};

#[derive(PuzzleSolver, AutoRegister)]
#[solver(parts = 2)]
#[puzzle(year = 2023, day = 7, tags = ["2023", "parsing"])]
pub struct Solver;

const LABELS: &[u8; 13] = b"23456789TJQKA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

#[derive(Debug, Clone, Copy)]
pub struct Hand {
    /// Card strengths, `2` is 0 and `A` is 12
    cards: [u8; 5],
    bid: u64,
}

const JACK: u8 = 9;

impl Hand {
    fn hand_type(&self, jokers: bool) -> HandType {
        let mut counts = [0u8; 13];
        let mut wild = 0;
        for &c in &self.cards {
            if jokers && c == JACK {
                wild += 1;
            } else {
                counts[c as usize] += 1;
            }
        }
        counts.sort_unstable_by(|a, b| b.cmp(a));
        // jokers always join the largest group
        match (counts[0] + wild, counts[1]) {
            (5, _) => HandType::FiveOfAKind,
            (4, _) => HandType::FourOfAKind,
            (3, 2) => HandType::FullHouse,
            (3, _) => HandType::ThreeOfAKind,
            (2, 2) => HandType::TwoPair,
            (2, _) => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }

    /// Sort key: hand type first, then card strengths left to right
    fn strength(&self, jokers: bool) -> (HandType, [u8; 5]) {
        let cards = self.cards.map(|c| match c {
            // jokers rank below 2
            JACK if jokers => 0,
            c => c + 1,
        });
        (self.hand_type(jokers), cards)
    }
}

fn parse_hand(line: &str) -> anyhow::Result<Hand> {
    let (cards, bid) = split_pair(line, " ")?;
    if cards.len() != 5 {
        bail!("hand {cards:?} must have five cards");
    }
    let mut hand = [0u8; 5];
    for (slot, label) in hand.iter_mut().zip(cards.bytes()) {
        *slot = LABELS
            .iter()
            .position(|&l| l == label)
            .with_context(|| format!("unknown card {:?}", label as char))? as u8;
    }
    let bid = bid.trim().parse::<u64>().context("bad bid")?;
    Ok(Hand { cards: hand, bid })
}

fn winnings(hands: &[Hand], jokers: bool) -> String {
    let mut ranked: Vec<_> = hands.iter().map(|h| (h.strength(jokers), h.bid)).collect();
    ranked.sort_unstable();
    ranked
        .iter()
        .enumerate()
        .map(|(rank, (_, bid))| (rank as u64 + 1) * bid)
        .sum::<u64>()
        .to_string()
}

impl PuzzleParser for Solver {
    type Input<'a> = Vec<Hand>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        parse_lines(input, parse_hand)
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(winnings(input, false))
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(winnings(input, true))
    }
}
