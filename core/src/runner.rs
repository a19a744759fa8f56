//! One full invocation: parse, then print.

use crate::{args, printer, ParsedArgs, Result};
use std::io::Write;
use tracing::debug;

/// Parse `tokens` and print the result to `out`.
///
/// Nothing is written when parsing fails.
pub fn run<S: AsRef<str>, W: Write>(tokens: &[S], out: &mut W) -> Result<ParsedArgs> {
    let parsed = args::parse(tokens)?;
    printer::print(&parsed, out)?;
    out.flush()?;
    debug!(command = %parsed.command(), "printed arguments");
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Command, Error};

    #[test]
    fn prints_valid_invocation() {
        let mut out = Vec::new();
        let parsed = run(&["5", "a", "0"], &mut out).unwrap();
        assert_eq!(parsed.command(), Command::First);
        assert_eq!(String::from_utf8(out).unwrap(), "value: 5sub_value 97First");
    }

    #[test]
    fn writes_nothing_on_parse_failure() {
        let mut out = Vec::new();
        let err = run(&["bb", "2"], &mut out).unwrap_err();
        assert!(matches!(err, Error::BadSubValueLength(_)));
        assert!(out.is_empty());
    }
}
