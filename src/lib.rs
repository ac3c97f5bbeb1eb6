pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod facts;
pub mod filesystem;
pub mod logging;
pub mod output;
pub mod report;
pub mod rules;

#[cfg(test)]
mod test_fixtures;

pub use error::{ConformError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECKS_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
