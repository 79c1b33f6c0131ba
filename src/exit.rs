// src/exit.rs
//! Standardized process exit codes for `vaultlink`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum VaultExit {
    /// Every stage completed and every artifact was written.
    Success = 0,
    /// Fatal error (unreadable corpus root, I/O on the output directory).
    Error = 1,
    /// Bad command line or unparseable `vaultlink.toml`.
    InvalidInput = 2,
    /// At least one downstream stage failed while the others completed.
    StageFailed = 3,
}

impl VaultExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for VaultExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
