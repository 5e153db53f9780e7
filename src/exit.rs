// src/exit.rs
//! Standardized process exit codes for `filescope`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum FilescopeExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, missing file).
    Error = 1,
    /// Snapshot or config could not be parsed.
    InvalidInput = 2,
    /// Strict mode and the technical-debt alert fired.
    AlertRaised = 3,
}

impl FilescopeExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for FilescopeExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
