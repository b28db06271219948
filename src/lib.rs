pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod lexer;
pub mod output;
pub mod scanner;

pub use error::{BracketGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;
