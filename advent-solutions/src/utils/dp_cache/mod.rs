//! Memoization for dynamic programming problems whose values depend on other
//! values in a DAG.
//!
//! A [`DpProblem`] names the dependencies of an index and how to combine their
//! values; [`DpCache`] walks the dependencies on demand and stores every value
//! in a [`Backend`]:
//!
//! - [`VecBackend`]: dense `usize` indices
//! - [`HashMapBackend`]: any `Hash + Eq` index
//!
//! There is no cycle detection. Dependencies that loop back overflow the
//! stack.

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::{ClosureProblem, DpProblem};

#[cfg(test)]
mod tests;
