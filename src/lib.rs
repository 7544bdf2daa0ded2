pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod risk;
pub mod table;
pub mod theme;

pub use error::{NosPlotError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_MISMATCH: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
