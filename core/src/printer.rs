//! Plain-text rendering of parsed arguments.

use crate::{ParsedArgs, Result};
use std::io::Write;

/// Write the segments of `args` to `out` with no separators between them.
///
/// A zero value is skipped, whether it was typed or omitted. The sub_value is
/// written as its numeric code point.
pub fn print<W: Write>(args: &ParsedArgs, out: &mut W) -> Result<()> {
    if args.value() != 0 {
        write!(out, "value: {}", args.value())?;
    }
    write!(out, "sub_value {}", u32::from(args.sub_value()))?;
    out.write_all(args.command().label().as_bytes())?;
    Ok(())
}
