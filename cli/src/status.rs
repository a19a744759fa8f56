//! Process exit codes.
//!
//! - 0: arguments parsed and printed
//! - 1: any rejected invocation or output failure

use std::process::{ExitCode, Termination};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

impl<T, E> From<&Result<T, E>> for ExitStatus {
    fn from(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => ExitStatus::Success,
            Err(_) => ExitStatus::Error,
        }
    }
}
