mod status;

use status::ExitStatus;
use std::env;
use std::io::{self, Write};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Usage: `argdump-cli [value] <sub_value> <command_code>`.
///
/// Tokens reach the parser exactly as typed, so a literal `--` counts as an
/// argument like any other.
fn main() -> ExitStatus {
    init_logging();

    let mut stdout = io::stdout().lock();
    let result = argdump_core::collect_tokens(env::args_os().skip(1)).and_then(|tokens| {
        debug!(?tokens, "collected arguments");
        argdump_core::run(tokens.as_slice(), &mut stdout)
    });
    if let Err(err) = &result {
        error!(%err, "invocation rejected");
        // Diagnostics share stdout with the regular output.
        let _ = writeln!(stdout, "{err}");
    }
    ExitStatus::from(&result)
}

/// Send tracing output to stderr; silent unless `RUST_LOG` asks for more.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
