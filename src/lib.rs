pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod encoding;
pub mod error;
pub mod output;
pub mod path_utils;
pub mod scanner;
pub mod stats;

pub use error::{IndentGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ISSUES_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
