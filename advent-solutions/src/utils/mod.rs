//! Helpers shared by the puzzle solutions

pub mod dp_cache;
pub mod grid;
pub mod math;
pub mod parsing;

#[cfg(test)]
pub(crate) mod testing {
    use advent_solver::SolverExt;

    /// Parse `input` and solve `part`, panicking on any error
    pub fn solve<S: SolverExt>(input: &str, part: u8) -> String {
        let mut parsed = S::parse(input).unwrap_or_else(|e| panic!("parse failed: {e}"));
        S::solve_part_checked(&mut parsed, part)
            .unwrap_or_else(|e| panic!("part {part} failed: {e}"))
    }
}
