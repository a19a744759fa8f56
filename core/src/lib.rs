//! Core crate: argument parsing and rendering for the argdump tool.

pub mod args;
pub mod printer;
pub mod runner;

pub use args::{collect_tokens, parse, scan_int, Command, ParsedArgs};
pub use printer::print;
pub use runner::run;

use thiserror::Error;

/// Common error type for argdump.
#[derive(Debug, Error)]
pub enum Error {
    /// The invocation did not carry 2 or 3 tokens.
    #[error("Need 2 or 3 args, got {0}")]
    WrongArity(usize),

    /// The sub_value token was not exactly one byte long.
    #[error("arg sub_value need to be size 1, got {0:?}")]
    BadSubValueLength(String),

    /// The command code did not scan to one of 0, 1, 2 or 3.
    #[error("Invalid cmd {0}: expected 0, 1, 2 or 3")]
    BadCommandCode(i64),

    /// An argument could not be read as UTF-8.
    #[error("Argument is not valid UTF-8: {0:?}")]
    InvalidUtf8(String),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient alias for results returned by the core crate.
pub type Result<T> = std::result::Result<T, Error>;
