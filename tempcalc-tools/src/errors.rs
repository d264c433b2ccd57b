//! Error types for the generation and validation tools
//!
//! Unlike the core crate these errors may own heap data (paths, parser
//! messages): the tools run on a workstation, once, and their only job on
//! failure is to explain what went wrong before exiting non-zero.

use thiserror_no_std::Error;

use tempcalc_core::CalibrationError;

/// Result type for tool operations
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors raised by `tempcalc-gen` and `tempcalc-sweep`
#[derive(Error, Debug)]
pub enum ToolError {
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Calibration file is not valid JSON for a calibration
    #[error("invalid calibration file: {0}")]
    Json(#[from] serde_json::Error),

    /// Calibration was rejected at generation time
    #[error("calibration rejected: {0}")]
    Calibration(#[from] CalibrationError),

    /// Command line could not be parsed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `--check` found a constants file that differs from the calibration
    #[error("generated constants at {path} are out of date")]
    StaleConstants {
        /// File that was checked
        path: String,
    },
}
