//! Daily puzzle solutions with automatic registration
//!
//! Solutions are grouped by year. Each one derives `PuzzleSolver` and
//! `AutoRegister`, so linking this crate is enough for
//! `RegistryBuilder::register_all_plugins` to find every puzzle. Yearly
//! features allow building a subset.

pub mod utils;

#[cfg(feature = "year-2023")]
pub mod year_2023;

#[cfg(feature = "year-2024")]
pub mod year_2024;

#[cfg(feature = "year-2025")]
pub mod year_2025;

