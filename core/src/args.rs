//! Positional argument parsing.
//!
//! Accepted shapes, program name excluded:
//! - `<sub_value> <command_code>`
//! - `<value> <sub_value> <command_code>`

use crate::{Error, Result};
use std::ffi::OsString;
use std::fmt;
use tracing::{debug, warn};

/// Operation selected by the trailing command code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    First,
    Second,
    Third,
    Fourth,
}

impl Command {
    /// Map a scanned command code to its variant.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Command::First),
            1 => Some(Command::Second),
            2 => Some(Command::Third),
            3 => Some(Command::Fourth),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::First => "First",
            Command::Second => "Second",
            Command::Third => "Third",
            Command::Fourth => "Fourth",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fully validated invocation.
///
/// Only [`parse`] and [`ParsedArgs::new`] build one, so every instance holds
/// a meaningful value in each field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    value: i64,
    sub_value: char,
    command: Command,
}

impl ParsedArgs {
    pub fn new(value: i64, sub_value: char, command: Command) -> Self {
        Self {
            value,
            sub_value,
            command,
        }
    }

    /// The leading integer, 0 when it was omitted.
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn sub_value(&self) -> char {
        self.sub_value
    }

    pub fn command(&self) -> Command {
        self.command
    }
}

/// Turn the raw process arguments into UTF-8 tokens.
///
/// Every token is kept as typed, `--` included.
pub fn collect_tokens<I>(raw: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    raw.into_iter()
        .map(|token| {
            token.into_string().map_err(|token| {
                warn!(token = ?token, "argument is not valid UTF-8");
                Error::InvalidUtf8(token.to_string_lossy().into_owned())
            })
        })
        .collect()
}

/// Parse the raw tokens that followed the program name.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<ParsedArgs> {
    let (value_token, sub_token, command_token) = match tokens {
        [sub, cmd] => (None, sub.as_ref(), cmd.as_ref()),
        [value, sub, cmd] => (Some(value.as_ref()), sub.as_ref(), cmd.as_ref()),
        _ => {
            warn!(count = tokens.len(), "wrong number of arguments");
            return Err(Error::WrongArity(tokens.len()));
        }
    };

    let value = value_token.map(scan_int).unwrap_or(0);

    // Length is measured in bytes, so a multibyte character is too long.
    let sub_value = match sub_token.as_bytes() {
        [byte] => char::from(*byte),
        _ => {
            warn!(token = sub_token, "sub_value is not a single byte");
            return Err(Error::BadSubValueLength(sub_token.to_string()));
        }
    };

    let code = scan_int(command_token);
    let command = Command::from_code(code).ok_or_else(|| {
        warn!(token = command_token, code, "unknown command code");
        Error::BadCommandCode(code)
    })?;

    debug!(value, sub_value = %sub_value, %command, "parsed arguments");
    Ok(ParsedArgs::new(value, sub_value, command))
}

/// Read the leading integer of `token`, falling back to 0.
///
/// Leading whitespace and one `+`/`-` sign are accepted, then the longest run
/// of ASCII digits is read and anything after it is ignored. A token with no
/// digits scans as 0. A number beyond the `i64` range saturates at
/// `i64::MAX` or `i64::MIN`.
pub fn scan_int(token: &str) -> i64 {
    let trimmed = token.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    // Accumulate towards the sign so i64::MIN is reachable.
    rest.bytes()
        .take_while(u8::is_ascii_digit)
        .map(|digit| i64::from(digit - b'0'))
        .fold(0i64, |acc, digit| {
            let acc = acc.saturating_mul(10);
            if negative {
                acc.saturating_sub(digit)
            } else {
                acc.saturating_add(digit)
            }
        })
}
