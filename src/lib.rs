pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod hook;
pub mod output;
pub mod scanner;

pub use error::{QualityGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_ADVISORY: i32 = 2;
pub const EXIT_CONFIG_ERROR: i32 = 3;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
