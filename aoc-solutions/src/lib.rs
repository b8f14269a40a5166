//! Puzzle solutions with automatic registration
//!
//! Each solution derives `AutoRegisterSolver`, so linking this crate is enough for
//! `RegistryBuilder::register_all_plugins` to find it. Solutions are grouped by year behind a
//! cargo feature per year.

pub mod utils;

#[cfg(feature = "year-2024")]
pub mod year_2024;
