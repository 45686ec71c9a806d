//! Exit codes for the ped-core CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing; they are stable and mapped from the error taxonomy's numeric
//! code ranges.

use ped_common::Error;

/// Exit codes for ped-core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Inference completed and results were rendered.
    Clean = 0,

    /// Configuration / priors error.
    ConfigError = 10,

    /// Pedigree load or structural error.
    LoadError = 11,

    /// Inference error, including degenerate evidence.
    InferenceError = 12,

    /// I/O error.
    IoError = 13,

    /// Internal/unknown error.
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Map an error onto its exit code via the stable error-code ranges.
    pub fn from_error(err: &Error) -> Self {
        match err.code() {
            10..=19 => ExitCode::ConfigError,
            20..=29 => ExitCode::LoadError,
            30..=39 => ExitCode::InferenceError,
            60..=69 => ExitCode::IoError,
            _ => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}
